//! Session state persistence.
//!
//! The store is a black box: given a path it writes the host's current
//! session there, or restores the session found there. Paths handed to a
//! store are already escaped for command interpolation.

use std::path::PathBuf;

use crate::config::{StoreConfig, PATH_PLACEHOLDER};
use crate::error::{Result, SessionError};
use crate::shell::{execute, CommandOptions};

/// Writes and restores opaque session state.
pub trait SessionStore {
    /// Write the current session to `escaped_path`.
    fn persist(&mut self, escaped_path: &str) -> Result<()>;

    /// Restore the session stored at `escaped_path`.
    fn restore(&mut self, escaped_path: &str) -> Result<()>;
}

/// Store backed by shell command templates.
///
/// `{path}` in each template is replaced by the escaped session path, e.g.
/// `nvim --server "$NVIM" --remote-send ':mksession! {path}<CR>'`.
#[derive(Debug, Clone, Default)]
pub struct CommandStore {
    persist_command: Option<String>,
    restore_command: Option<String>,
    working_dir: Option<PathBuf>,
}

impl CommandStore {
    /// Create a store from command templates.
    pub fn new(persist_command: Option<String>, restore_command: Option<String>) -> Self {
        Self {
            persist_command,
            restore_command,
            working_dir: None,
        }
    }

    /// Run commands in `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Create a store from the `store` config section.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(
            config.persist_command.clone(),
            config.restore_command.clone(),
        )
    }

    fn run(&self, template: Option<&str>, operation: &str, escaped_path: &str) -> Result<()> {
        let template = template.ok_or_else(|| SessionError::StoreNotConfigured {
            operation: operation.to_string(),
        })?;
        let command = template.replace(PATH_PLACEHOLDER, escaped_path);
        let options = CommandOptions {
            cwd: self.working_dir.clone(),
            capture: true,
            ..Default::default()
        };

        let result = execute(&command, &options)?;
        if result.success {
            tracing::debug!("{} finished in {:?}", operation, result.duration);
            Ok(())
        } else {
            tracing::warn!("{} failed: {}", operation, result.stderr.trim());
            Err(SessionError::CommandFailed {
                command,
                code: result.exit_code,
            })
        }
    }
}

impl SessionStore for CommandStore {
    fn persist(&mut self, escaped_path: &str) -> Result<()> {
        self.run(self.persist_command.as_deref(), "persist", escaped_path)
    }

    fn restore(&mut self, escaped_path: &str) -> Result<()> {
        self.run(self.restore_command.as_deref(), "restore", escaped_path)
    }
}

/// In-memory store recording every call.
///
/// Intended for tests and dry runs; it never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    persisted: Vec<String>,
    restored: Vec<String>,
    fail_persist: bool,
    fail_restore: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every persist call fail.
    pub fn failing_persist(mut self) -> Self {
        self.fail_persist = true;
        self
    }

    /// Make every restore call fail.
    pub fn failing_restore(mut self) -> Self {
        self.fail_restore = true;
        self
    }

    /// Paths passed to `persist`, in call order.
    pub fn persisted(&self) -> &[String] {
        &self.persisted
    }

    /// Paths passed to `restore`, in call order.
    pub fn restored(&self) -> &[String] {
        &self.restored
    }
}

impl SessionStore for MemoryStore {
    fn persist(&mut self, escaped_path: &str) -> Result<()> {
        if self.fail_persist {
            return Err(anyhow::anyhow!("persist refused for {}", escaped_path).into());
        }
        self.persisted.push(escaped_path.to_string());
        Ok(())
    }

    fn restore(&mut self, escaped_path: &str) -> Result<()> {
        if self.fail_restore {
            return Err(anyhow::anyhow!("restore refused for {}", escaped_path).into());
        }
        self.restored.push(escaped_path.to_string());
        Ok(())
    }
}
