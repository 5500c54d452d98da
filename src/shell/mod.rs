//! Shell command execution for hooks and the command-backed store.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};
