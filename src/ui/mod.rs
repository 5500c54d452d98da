//! User-facing notification output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the notification sink used by the controller
//! - [`TerminalUI`] writing styled lines to the terminal
//! - [`MockUI`] capturing notifications for tests
//!
//! # Example
//!
//! ```
//! use autosession::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Session saved");
//! assert!(ui.has_success("saved"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, SessionTheme};

/// Trait for user-facing notifications.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Errors are shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Display a secondary detail, only in verbose mode.
    fn detail(&mut self, msg: &str) {
        if self.output_mode().shows_details() {
            self.message(msg);
        }
    }
}
