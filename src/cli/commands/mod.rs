//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`autosession save`, `autosession attach`)
//! - Shared configuration loading and controller construction
//! - Consistent global flag handling

pub mod attach;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod load;
pub mod resolve;
pub mod save;

pub use dispatcher::{
    build_controller, Command, CommandContext, CommandDispatcher, CommandResult, CliController,
};
