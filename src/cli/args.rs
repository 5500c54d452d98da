//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. [`HostLine`] parses the
//! line commands accepted by `autosession attach` with the same argument
//! structs.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::autosave::{LoadOptions, SaveOptions, StopOptions};

/// autosession - Editor session path resolution and autosave.
#[derive(Debug, Parser)]
#[command(name = "autosession")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (skips the global and project config files)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Working directory used for relative paths and absolute mode
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the current session once
    Save(SaveArgs),

    /// Restore a saved session once
    Load(LoadArgs),

    /// Print the resolved session path
    Resolve(ResolveArgs),

    /// Show the effective configuration
    Config(ConfigArgs),

    /// Bridge an editor host over stdin, autosaving on trigger events
    Attach,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for `save`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SaveArgs {
    /// Session path (defaults to the configured session_filepath)
    pub path: Option<String>,

    /// Do not keep autosaving after this save
    #[arg(long)]
    pub no_autosave: bool,
}

impl SaveArgs {
    /// Controller options for these arguments.
    pub fn options(&self) -> SaveOptions {
        SaveOptions {
            autosave: !self.no_autosave,
        }
    }
}

/// Arguments for `load`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LoadArgs {
    /// Session path (defaults to the configured session_filepath)
    pub path: Option<String>,

    /// Do not start autosaving the loaded session
    #[arg(long)]
    pub no_autosave: bool,

    /// Do not report a missing session file
    #[arg(long)]
    pub silent: bool,
}

impl LoadArgs {
    /// Controller options for these arguments.
    pub fn options(&self) -> LoadOptions {
        LoadOptions {
            autosave: !self.no_autosave,
            silent: self.silent,
        }
    }
}

/// Arguments for `start`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StartArgs {
    /// Session path (defaults to the configured session_filepath)
    pub path: Option<String>,
}

/// Arguments for `stop`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StopArgs {
    /// Stop without writing the session one last time
    #[arg(long)]
    pub no_save: bool,
}

impl StopArgs {
    /// Controller options for these arguments.
    pub fn options(&self) -> StopOptions {
        StopOptions {
            save: !self.no_save,
        }
    }
}

/// Arguments for `event`.
#[derive(Debug, Clone, clap::Args)]
pub struct EventArgs {
    /// Name of the trigger event that fired
    pub name: String,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Session path (defaults to the configured session_filepath)
    pub path: Option<String>,

    /// Create missing parent directories
    #[arg(long)]
    pub ensure: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// One line of the attach protocol.
#[derive(Debug, Parser)]
#[command(name = "autosession-host", no_binary_name = true)]
#[command(disable_version_flag = true)]
pub struct HostLine {
    #[command(subcommand)]
    pub command: HostCommand,
}

/// Commands accepted by `autosession attach`.
#[derive(Debug, Subcommand)]
pub enum HostCommand {
    /// Write the session and keep autosaving it
    Save(SaveArgs),

    /// Restore a session and autosave it
    Load(LoadArgs),

    /// Autosave a session without writing it now
    Start(StartArgs),

    /// Stop autosaving
    Stop(StopArgs),

    /// Report that a trigger event fired
    Event(EventArgs),

    /// Print whether a session is being recorded
    Status,

    /// Stop autosaving without a final save and exit
    Quit,
}
