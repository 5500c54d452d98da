//! Configuration validation rules.
//!
//! - Trigger event names must be non-empty
//! - Store command templates, when set, must be non-empty and use `{path}`
//!
//! Hook entries are checked when hooks are built (see [`crate::hooks`]).

use crate::config::schema::SessionConfig;
use crate::error::{Result, SessionError};

/// Placeholder replaced by the escaped session path in store commands.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Drop duplicate event names, keeping the first occurrence of each.
pub fn normalize_events(events: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    events
        .iter()
        .map(|e| e.trim().to_string())
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &SessionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.events.iter().any(|e| e.is_empty()) {
        errors.push(ValidationError {
            rule: "empty-event".to_string(),
            message: "Trigger event names must not be empty".to_string(),
        });
    }

    let templates = [
        ("persist_command", &config.store.persist_command),
        ("restore_command", &config.store.restore_command),
    ];
    for (name, template) in templates {
        let Some(template) = template else { continue };
        if template.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-store-command".to_string(),
                message: format!("store.{} must not be empty", name),
            });
        } else if !template.contains(PATH_PLACEHOLDER) {
            errors.push(ValidationError {
                rule: "missing-path-placeholder".to_string(),
                message: format!("store.{} must contain {}", name, PATH_PLACEHOLDER),
            });
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &SessionConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(SessionError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
