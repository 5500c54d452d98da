//! Configuration schema definitions for autosession.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format.

use serde::{Deserialize, Serialize};

/// Trigger events subscribed to when no `events` key is configured.
pub const DEFAULT_EVENTS: &[&str] = &["buffer-entered", "exiting"];

/// Root configuration structure for `.autosession.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Trigger events that cause a re-save while recording, in order.
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Base directory, absolute-mode base (trailing `//`) or single session file.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub session_filepath: String,

    /// Create missing parent directories when saving.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub ensure_directories: bool,

    /// Hooks run around save and load.
    #[serde(default, skip_serializing_if = "HooksConfig::is_empty")]
    pub hooks: HooksConfig,

    /// Commands backing the session store.
    #[serde(default, skip_serializing_if = "StoreConfig::is_empty")]
    pub store: StoreConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            events: default_events(),
            session_filepath: String::new(),
            ensure_directories: true,
            hooks: HooksConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

fn default_events() -> Vec<String> {
    DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn is_true(v: &bool) -> bool {
    *v
}

/// Hook entries per phase, as written in the config file.
///
/// Entries stay untyped here so that a malformed entry can be reported with
/// its phase and position when the hooks are built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HooksConfig {
    /// Run before the session is written.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub save_pre: Vec<serde_yaml::Value>,

    /// Run after the session is written.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub save_post: Vec<serde_yaml::Value>,

    /// Run before the session is restored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_pre: Vec<serde_yaml::Value>,

    /// Run after the session is restored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub load_post: Vec<serde_yaml::Value>,
}

impl HooksConfig {
    /// True when no phase has any entry.
    pub fn is_empty(&self) -> bool {
        self.save_pre.is_empty()
            && self.save_post.is_empty()
            && self.load_pre.is_empty()
            && self.load_post.is_empty()
    }
}

/// Command templates used by the shell-backed session store.
///
/// `{path}` in a template is replaced by the escaped session path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Writes the current session to `{path}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_command: Option<String>,

    /// Restores the session stored at `{path}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_command: Option<String>,
}

impl StoreConfig {
    /// True when neither command is set.
    pub fn is_empty(&self) -> bool {
        self.persist_command.is_none() && self.restore_command.is_none()
    }
}
