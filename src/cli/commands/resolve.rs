//! Resolve command implementation.
//!
//! The `autosession resolve` command prints the session path that `save`
//! or `load` would use, without touching the store.

use crate::cli::args::ResolveArgs;
use crate::error::{Result, SessionError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    context: CommandContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(context: CommandContext, args: ResolveArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResolveArgs {
        &self.args
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let resolver = self.context.resolver(&config);

        let path = match resolver.resolve(self.args.path.as_deref(), self.args.ensure) {
            Ok(path) => path,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        if self.args.json {
            let out = serde_json::json!({
                "path": path.as_str(),
                "escaped": path.escaped(),
                "absolute_mode": self.args.path.is_none() && resolver.is_absolute_mode(),
            });
            let json =
                serde_json::to_string_pretty(&out).map_err(|e| SessionError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.message(path.as_str());
        }

        Ok(CommandResult::success())
    }
}
