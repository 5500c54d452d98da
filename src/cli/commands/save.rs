//! Save command implementation.
//!
//! The `autosession save` command writes the session once through the
//! configured persist command. The process exits right after, so autosave
//! is never started.

use crate::autosave::SaveOptions;
use crate::cli::args::SaveArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{build_controller, Command, CommandContext, CommandResult};

/// The save command implementation.
pub struct SaveCommand {
    context: CommandContext,
    args: SaveArgs,
}

impl SaveCommand {
    /// Create a new save command.
    pub fn new(context: CommandContext, args: SaveArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SaveArgs {
        &self.args
    }
}

impl Command for SaveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let mut controller = build_controller(&self.context, &config)?;

        let options = SaveOptions { autosave: false };
        match controller.save(self.args.path.as_deref(), options, ui) {
            Ok(_) => Ok(CommandResult::success()),
            // already reported by the controller
            Err(_) => Ok(CommandResult::failure(1)),
        }
    }
}
