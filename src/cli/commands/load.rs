//! Load command implementation.
//!
//! The `autosession load` command restores a session once through the
//! configured restore command.

use crate::autosave::LoadOptions;
use crate::cli::args::LoadArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{build_controller, Command, CommandContext, CommandResult};

/// The load command implementation.
pub struct LoadCommand {
    context: CommandContext,
    args: LoadArgs,
}

impl LoadCommand {
    /// Create a new load command.
    pub fn new(context: CommandContext, args: LoadArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LoadArgs {
        &self.args
    }
}

impl Command for LoadCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let mut controller = build_controller(&self.context, &config)?;

        let options = LoadOptions {
            autosave: false,
            silent: self.args.silent,
        };
        match controller.load(self.args.path.as_deref(), options, ui) {
            Ok(_) => Ok(CommandResult::success()),
            Err(_) => Ok(CommandResult::failure(1)),
        }
    }
}
