//! Config command implementation.
//!
//! The `autosession config` command shows the effective configuration and
//! the files it was merged from.

use crate::cli::args::ConfigArgs;
use crate::config::ConfigPaths;
use crate::error::{Result, SessionError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    context: CommandContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: CommandContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| SessionError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        // Show config file path(s)
        let sources = match self.context.config_path() {
            Some(path) => vec![path.to_path_buf()],
            None => ConfigPaths::discover(self.context.cwd())
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        };
        if sources.is_empty() {
            ui.message("# defaults (no config file found)");
        }
        for path in &sources {
            ui.message(&format!("# {}", path.display()));
        }

        let yaml = serde_yaml::to_string(&config).map_err(|e| SessionError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup(config: &str) -> (TempDir, CommandContext) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.yml");
        fs::write(&file, config).unwrap();
        let ctx = CommandContext::new(temp.path().to_path_buf(), Some(file));
        (temp, ctx)
    }

    #[test]
    fn config_shows_source_and_yaml() {
        let (_temp, ctx) = setup("session_filepath: /tmp/sessions//\nevents: [exiting]\n");
        let mut ui = MockUI::new();

        let result = ConfigCommand::new(ctx, ConfigArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.messages()[0].contains("custom.yml"));
        assert!(ui.has_message("session_filepath: /tmp/sessions//"));
        assert!(ui.has_message("- exiting"));
    }

    #[test]
    fn config_json_output() {
        let (_temp, ctx) = setup("events: [exiting, exiting]\n");
        let mut ui = MockUI::new();

        ConfigCommand::new(ctx, ConfigArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["events"], serde_json::json!(["exiting"]));
    }

    #[test]
    fn config_invalid_file_errors() {
        let (_temp, ctx) = setup("events: [\"\"]\n");
        let result = ConfigCommand::new(ctx, ConfigArgs::default()).execute(&mut MockUI::new());
        assert!(matches!(
            result,
            Err(SessionError::ConfigValidationError { .. })
        ));
    }
}
