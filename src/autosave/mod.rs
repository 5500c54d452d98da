//! Autosave lifecycle.
//!
//! [`AutosaveController`] tracks at most one session path. While recording
//! it holds exactly one trigger-event subscription; each matching event the
//! host delivers through [`AutosaveController::dispatch`] re-saves the
//! session at the tracked path.
//!
//! # Example
//!
//! ```
//! use autosession::autosave::{AutosaveController, StopOptions};
//! use autosession::events::EventRegistry;
//! use autosession::paths::{PathPlatform, PathResolver};
//! use autosession::store::MemoryStore;
//! use autosession::ui::MockUI;
//!
//! let resolver = PathResolver::new("")
//!     .with_platform(PathPlatform::Unix)
//!     .with_working_dir("/home/user");
//! let mut controller =
//!     AutosaveController::new(resolver, MemoryStore::new(), EventRegistry::new());
//! let mut ui = MockUI::new();
//!
//! controller.start_autosave(Some("work"), &mut ui).unwrap();
//! assert!(controller.dispatch("exiting", &mut ui).unwrap());
//! controller.stop_autosave(StopOptions { save: false }, &mut ui).unwrap();
//!
//! assert_eq!(controller.store().persisted(), ["/home/user/work"]);
//! assert!(!controller.is_recording());
//! ```

mod controller;
mod state;

pub use controller::AutosaveController;
pub use state::{LoadOptions, RecordingState, SaveOptions, StopOptions};
