//! Configuration loading, parsing, and validation for autosession.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, layering and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use autosession::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config("session_filepath: /tmp/sessions//", Path::new("inline")).unwrap();
//! assert_eq!(config.events, vec!["buffer-entered", "exiting"]);
//! assert!(config.ensure_directories);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. User global config (`<config dir>/autosession/config.yml`)
//! 2. Project config (`.autosession.yml` in the working directory)

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, load_merged_config, merge_layer, parse_config, ConfigPaths,
    PROJECT_CONFIG_FILE,
};
pub use schema::{HooksConfig, SessionConfig, StoreConfig, DEFAULT_EVENTS};
pub use validator::{
    normalize_events, validate, validate_config, ValidationError, PATH_PLACEHOLDER,
};
