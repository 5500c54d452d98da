//! Configuration file discovery and loading.
//!
//! Configuration is layered: the user's global file is read first and the
//! project file in the working directory overrides it key by key.

use crate::config::schema::SessionConfig;
use crate::config::validator::{normalize_events, validate};
use crate::error::{Result, SessionError};
use crate::hooks::Hooks;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".autosession.yml";

/// Paths to configuration files in merge order (later overrides earlier).
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: `<config dir>/autosession/config.yml`
    pub user_global: Option<PathBuf>,

    /// Project config: `.autosession.yml` in the working directory
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover existing config files for the given working directory.
    pub fn discover(cwd: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: existing(cwd.join(PROJECT_CONFIG_FILE)),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        existing(dirs::config_dir()?.join("autosession").join("config.yml"))
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Parse YAML content into a normalized, validated [`SessionConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SessionConfig> {
    let value: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content).map_err(|e| SessionError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?
    };
    from_value(value, source_path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and `ConfigParseError`
/// if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<SessionConfig> {
    let content = read(path)?;
    parse_config(&content, path)
}

/// Load and merge all discovered config files for `cwd`.
///
/// Missing files are not an error: with no file at all the defaults apply.
pub fn load_merged_config(cwd: &Path) -> Result<SessionConfig> {
    let paths = ConfigPaths::discover(cwd);
    let mut merged = Value::Mapping(Default::default());

    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        let content = read(path)?;
        if content.trim().is_empty() {
            continue;
        }
        let layer: Value =
            serde_yaml::from_str(&content).map_err(|e| SessionError::ConfigParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;
        merged = merge_layer(merged, layer);
    }

    from_value(merged, &cwd.join(PROJECT_CONFIG_FILE))
}

/// Load config with an optional explicit file.
///
/// An explicit file is loaded alone, without merging.
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<SessionConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(cwd),
    }
}

/// Merge `overlay` onto `base`: mappings merge recursively, anything else
/// in the overlay replaces the base value, and a null removes the key.
pub fn merge_layer(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(mut base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                let merged = match base_map.remove(&key) {
                    Some(existing) => merge_layer(existing, value),
                    None => value,
                };
                base_map.insert(key, merged);
            }
            Value::Mapping(base_map)
        }
        (_, overlay) => overlay,
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SessionError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SessionError::Io(e)
        }
    })
}

fn from_value(value: Value, source_path: &Path) -> Result<SessionConfig> {
    let mut config: SessionConfig =
        serde_yaml::from_value(value).map_err(|e| SessionError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.events = normalize_events(&config.events);
    validate(&config)?;
    Hooks::from_config(&config.hooks)?;
    Ok(config)
}
