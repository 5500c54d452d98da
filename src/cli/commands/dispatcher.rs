//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] shared by commands that need configuration
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::autosave::AutosaveController;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, SessionConfig};
use crate::error::Result;
use crate::events::EventRegistry;
use crate::hooks::Hooks;
use crate::paths::PathResolver;
use crate::store::CommandStore;
use crate::ui::UserInterface;

/// Controller wired to the shell-backed store and the in-process registry.
pub type CliController = AutosaveController<CommandStore, EventRegistry>;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Working directory and config override shared by commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    cwd: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context.
    pub fn new(cwd: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self { cwd, config_path }
    }

    /// The working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The explicit config file, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the effective configuration.
    pub fn load_config(&self) -> Result<SessionConfig> {
        load_config(&self.cwd, self.config_path())
    }

    /// Path resolver for `config`, anchored at the working directory.
    pub fn resolver(&self, config: &SessionConfig) -> PathResolver {
        PathResolver::from_config(config).with_working_dir(self.cwd.to_string_lossy())
    }
}

/// Build the controller used by CLI commands.
///
/// Store and hook commands run in the context's working directory.
///
/// # Errors
///
/// Returns `InvalidHook` if a configured hook entry is malformed.
pub fn build_controller(context: &CommandContext, config: &SessionConfig) -> Result<CliController> {
    let store = CommandStore::from_config(&config.store).with_working_dir(context.cwd());
    let hooks = Hooks::from_config(&config.hooks)?.with_working_dir(context.cwd());
    Ok(
        AutosaveController::new(context.resolver(config), store, EventRegistry::new())
            .with_trigger_events(config.events.clone())
            .with_ensure_directories(config.ensure_directories)
            .with_hooks(hooks),
    )
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given working directory.
    pub fn new(cwd: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            context: CommandContext::new(cwd, config_path),
        }
    }

    /// Get the working directory.
    pub fn cwd(&self) -> &Path {
        self.context.cwd()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Save(args) => {
                let cmd = super::save::SaveCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Load(args) => {
                let cmd = super::load::LoadCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Attach => {
                let cmd = super::attach::AttachCommand::new(self.context.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
