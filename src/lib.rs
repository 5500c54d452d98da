//! autosession - Editor session path resolution and autosave.
//!
//! autosession computes a canonical on-disk path for a saved editor session
//! and keeps that session saved while the editor runs: an explicit save or
//! load starts recording, every configured trigger event re-saves the
//! session, and stopping optionally writes it one last time.
//!
//! # Modules
//!
//! - [`autosave`] - The recording lifecycle controller
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`events`] - Trigger event subscriptions
//! - [`hooks`] - Hooks run around save and load
//! - [`paths`] - Session path resolution and escaping
//! - [`shell`] - Shell command execution
//! - [`store`] - Session persistence backends
//! - [`ui`] - Terminal output and notifications
//!
//! # Example
//!
//! ```
//! use autosession::autosave::{AutosaveController, SaveOptions};
//! use autosession::events::EventRegistry;
//! use autosession::paths::{PathPlatform, PathResolver};
//! use autosession::store::MemoryStore;
//! use autosession::ui::MockUI;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let resolver = PathResolver::new("")
//!     .with_platform(PathPlatform::current())
//!     .with_working_dir(dir.path().to_string_lossy());
//! let mut controller =
//!     AutosaveController::new(resolver, MemoryStore::new(), EventRegistry::new());
//! let mut ui = MockUI::new();
//!
//! let path = controller
//!     .save(Some("work"), SaveOptions::default(), &mut ui)
//!     .unwrap();
//! controller.dispatch("exiting", &mut ui).unwrap();
//!
//! assert_eq!(controller.store().persisted().len(), 2);
//! assert_eq!(controller.tracked_path(), Some(&path));
//! ```

pub mod autosave;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod hooks;
pub mod paths;
pub mod shell;
pub mod store;
pub mod ui;

pub use error::{Result, SessionError};
