//! Hooks run around session save and load.
//!
//! A hook is either a shell command or a callback. Each phase holds an
//! ordered [`HookList`]; entries run strictly in order and a hook that asks
//! to stop ends that list only. Hook outcomes never cancel the write or
//! restore they surround.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_yaml::Value;

use crate::config::HooksConfig;
use crate::error::{Result, SessionError};
use crate::paths::ResolvedPath;
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

/// Environment variable carrying the event tag into command hooks.
pub const EVENT_ENV: &str = "AUTOSESSION_EVENT";

/// Environment variable carrying the session path into command hooks.
pub const PATH_ENV: &str = "AUTOSESSION_PATH";

/// Event tag used for explicit saves and final saves on stop.
pub const SAVE_EVENT: &str = "Save";

/// Event tag used for loads.
pub const LOAD_EVENT: &str = "Load";

/// When a hook list runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPhase {
    SavePre,
    SavePost,
    LoadPre,
    LoadPost,
}

impl HookPhase {
    /// Config key of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SavePre => "save_pre",
            Self::SavePost => "save_post",
            Self::LoadPre => "load_pre",
            Self::LoadPost => "load_post",
        }
    }
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a callback hook asks for after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookFlow {
    /// Run the next hook in the list.
    #[default]
    Continue,
    /// Skip the remaining hooks in this list.
    Stop,
}

/// What a hook is told about the operation it surrounds.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// `"Save"`, `"Load"`, or the name of the trigger event.
    pub event: &'a str,
    /// The unescaped session path.
    pub path: &'a ResolvedPath,
}

/// Callback hook signature.
pub type HookCallback = Arc<dyn Fn(&HookContext<'_>) -> HookFlow + Send + Sync>;

/// A single hook entry.
#[derive(Clone)]
pub enum Hook {
    /// Shell command run as-is; a non-zero exit stops the list.
    Command(String),
    /// Callback invoked with the event tag and session path.
    Callback(HookCallback),
}

impl Hook {
    /// Create a command hook.
    pub fn command(command: impl Into<String>) -> Self {
        Self::Command(command.into())
    }

    /// Create a callback hook.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&HookContext<'_>) -> HookFlow + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// Build a hook from a config entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHook` unless the entry is a non-empty string.
    pub fn from_value(phase: HookPhase, index: usize, value: &Value) -> Result<Self> {
        let invalid = |message: &str| SessionError::InvalidHook {
            phase: phase.to_string(),
            index,
            message: message.to_string(),
        };
        match value {
            Value::String(command) if command.trim().is_empty() => {
                Err(invalid("command must not be empty"))
            }
            Value::String(command) => Ok(Self::Command(command.clone())),
            Value::Null => Err(invalid("expected a command string, found null")),
            Value::Bool(_) | Value::Number(_) => {
                Err(invalid("expected a command string, found a scalar"))
            }
            Value::Sequence(_) => Err(invalid("expected a command string, found a list")),
            Value::Mapping(_) => Err(invalid("expected a command string, found a mapping")),
            Value::Tagged(_) => Err(invalid("expected a command string, found a tagged value")),
        }
    }

    /// Run the hook; commands run in `cwd` when given.
    fn run(
        &self,
        phase: HookPhase,
        ctx: &HookContext<'_>,
        cwd: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> HookFlow {
        match self {
            Self::Callback(f) => f(ctx),
            Self::Command(command) => {
                let options = CommandOptions {
                    env: HashMap::from([
                        (EVENT_ENV.to_string(), ctx.event.to_string()),
                        (PATH_ENV.to_string(), ctx.path.to_string()),
                    ]),
                    cwd: cwd.map(Path::to_path_buf),
                    capture: true,
                };
                match execute(command, &options) {
                    Ok(result) if result.success => {
                        let out = result.stdout.trim();
                        if !out.is_empty() {
                            ui.detail(out);
                        }
                        HookFlow::Continue
                    }
                    Ok(result) => {
                        ui.warning(&format!(
                            "{} hook '{}' exited with {:?}; skipping remaining {} hooks",
                            phase, command, result.exit_code, phase
                        ));
                        HookFlow::Stop
                    }
                    Err(e) => {
                        ui.warning(&format!(
                            "{} hook failed: {}; skipping remaining {} hooks",
                            phase, e, phase
                        ));
                        HookFlow::Stop
                    }
                }
            }
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(command) => f.debug_tuple("Command").field(command).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Result of running a hook list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HookOutcome {
    /// Number of hooks that ran.
    pub ran: usize,
    /// Whether a hook stopped the list early.
    pub stopped: bool,
}

/// Ordered hooks of one phase.
#[derive(Debug, Clone, Default)]
pub struct HookList(Vec<Hook>);

impl HookList {
    /// Build the list for `phase` from config entries.
    pub fn from_values(phase: HookPhase, values: &[Value]) -> Result<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| Hook::from_value(phase, index, value))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Append a hook.
    pub fn push(&mut self, hook: Hook) {
        self.0.push(hook);
    }

    /// Number of hooks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no hooks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the hooks in order.
    pub fn iter(&self) -> impl Iterator<Item = &Hook> {
        self.0.iter()
    }

    /// Run hooks in order until one stops the list.
    pub fn run(
        &self,
        phase: HookPhase,
        ctx: &HookContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> HookOutcome {
        self.run_in(phase, ctx, None, ui)
    }

    fn run_in(
        &self,
        phase: HookPhase,
        ctx: &HookContext<'_>,
        cwd: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> HookOutcome {
        let mut outcome = HookOutcome::default();
        for hook in &self.0 {
            outcome.ran += 1;
            if hook.run(phase, ctx, cwd, ui) == HookFlow::Stop {
                tracing::debug!("{} hook #{} stopped the list", phase, outcome.ran);
                outcome.stopped = true;
                break;
            }
        }
        outcome
    }
}

/// Hook lists for every phase.
#[derive(Debug, Clone, Default)]
pub struct Hooks {
    save_pre: HookList,
    save_post: HookList,
    load_pre: HookList,
    load_post: HookList,
    working_dir: Option<PathBuf>,
}

impl Hooks {
    /// Build typed hooks from the config, rejecting malformed entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHook` for the first entry that is not a non-empty
    /// command string.
    pub fn from_config(config: &HooksConfig) -> Result<Self> {
        Ok(Self {
            save_pre: HookList::from_values(HookPhase::SavePre, &config.save_pre)?,
            save_post: HookList::from_values(HookPhase::SavePost, &config.save_post)?,
            load_pre: HookList::from_values(HookPhase::LoadPre, &config.load_pre)?,
            load_post: HookList::from_values(HookPhase::LoadPost, &config.load_post)?,
            working_dir: None,
        })
    }

    /// Run command hooks in `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Hooks of one phase.
    pub fn phase(&self, phase: HookPhase) -> &HookList {
        match phase {
            HookPhase::SavePre => &self.save_pre,
            HookPhase::SavePost => &self.save_post,
            HookPhase::LoadPre => &self.load_pre,
            HookPhase::LoadPost => &self.load_post,
        }
    }

    /// Append a hook to a phase.
    pub fn add(&mut self, phase: HookPhase, hook: Hook) {
        match phase {
            HookPhase::SavePre => self.save_pre.push(hook),
            HookPhase::SavePost => self.save_post.push(hook),
            HookPhase::LoadPre => self.load_pre.push(hook),
            HookPhase::LoadPost => self.load_post.push(hook),
        }
    }

    /// Run the hooks of one phase.
    pub fn run(
        &self,
        phase: HookPhase,
        ctx: &HookContext<'_>,
        ui: &mut dyn UserInterface,
    ) -> HookOutcome {
        self.phase(phase)
            .run_in(phase, ctx, self.working_dir.as_deref(), ui)
    }
}
