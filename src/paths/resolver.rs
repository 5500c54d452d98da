//! Session path resolution.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;
use crate::error::{Result, SessionError};

use super::escape::escape;
use super::platform::PathPlatform;

/// File name used for sessions derived in absolute mode.
pub const SESSION_FILE_NAME: &str = "session";

/// Replaces separators when a working directory is encoded as a file name.
pub const PLACEHOLDER: char = '%';

/// A canonical, absolute, unescaped session path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// The path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path as a filesystem path.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// The path escaped for interpolation into a command string.
    pub fn escaped(&self) -> String {
        escape(&self.0)
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Where relative paths are anchored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkingDir {
    /// The process working directory, read on every resolution.
    #[default]
    Process,
    /// A fixed absolute directory.
    Fixed(String),
}

/// Turns explicit or configured path fragments into canonical session paths.
#[derive(Debug, Clone)]
pub struct PathResolver {
    platform: PathPlatform,
    base: String,
    working_dir: WorkingDir,
    home: Option<String>,
}

impl PathResolver {
    /// Create a resolver for the configured `session_filepath` value.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            platform: PathPlatform::current(),
            base: base.into(),
            working_dir: WorkingDir::Process,
            home: dirs::home_dir().map(|h| h.to_string_lossy().into_owned()),
        }
    }

    /// Create a resolver from a loaded configuration.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.session_filepath.clone())
    }

    /// Use the conventions of `platform` instead of the host's.
    pub fn with_platform(mut self, platform: PathPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Anchor relative paths at a fixed directory.
    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = WorkingDir::Fixed(dir.into());
        self
    }

    /// Override the home directory used for `~` expansion.
    pub fn with_home(mut self, home: Option<String>) -> Self {
        self.home = home;
        self
    }

    /// The platform conventions in use.
    pub fn platform(&self) -> PathPlatform {
        self.platform
    }

    /// The configured base, as written.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the base derives one session per working directory.
    pub fn is_absolute_mode(&self) -> bool {
        self.platform.has_double_trailing_separator(&self.base)
    }

    /// Resolve the session path.
    ///
    /// An explicit non-empty path wins; otherwise the configured base is
    /// used. With `ensure_directories`, missing parent directories are
    /// created.
    ///
    /// # Errors
    ///
    /// `NoPathConfigured` when neither source yields a path, `InvalidPath`
    /// when the result has no file name or contains a line break or other
    /// control character, `DirectoryCreationFailed` when the
    /// parent directory cannot be created.
    pub fn resolve(&self, explicit: Option<&str>, ensure_directories: bool) -> Result<ResolvedPath> {
        let cwd = self.current_dir()?;

        let path = match explicit.filter(|p| !p.is_empty()) {
            Some(explicit) => self.platform.absolutize(&self.expand_home(explicit), &cwd),
            None if self.base.is_empty() => return Err(SessionError::NoPathConfigured),
            None if self.is_absolute_mode() => {
                let base = self.platform.absolutize(&self.expand_home(&self.base), &cwd);
                let dir = self.platform.join(&base, &self.encode_dir(&cwd));
                self.platform.join(&dir, SESSION_FILE_NAME)
            }
            None => self.platform.absolutize(&self.expand_home(&self.base), &cwd),
        };

        if path.chars().any(|c| c.is_control() && c != '\t') {
            return Err(SessionError::InvalidPath {
                path: path.escape_debug().to_string(),
                reason: "control character",
            });
        }

        let (parent, basename) = self.platform.split_parent(&path);
        if basename.is_empty() {
            return Err(SessionError::InvalidPath {
                path,
                reason: "no file name",
            });
        }

        if ensure_directories && !Path::new(parent).is_dir() {
            tracing::debug!("Creating session directory {}", parent);
            fs::create_dir_all(parent).map_err(|source| SessionError::DirectoryCreationFailed {
                path: PathBuf::from(parent),
                source,
            })?;
        }

        Ok(ResolvedPath(path))
    }

    /// Encode an absolute directory as a single file name component.
    ///
    /// `/home/user/proj` becomes `%home%user%proj`; on Windows `C:\work`
    /// becomes `%C%work`.
    pub fn encode_dir(&self, dir: &str) -> String {
        let normalized = self.platform.normalize(dir);
        let (drive, rest) = self.platform.split_drive_letter(&normalized);
        let mut encoded = String::with_capacity(normalized.len() + 1);
        if let Some(letter) = drive {
            encoded.push(PLACEHOLDER);
            encoded.push(letter);
        }
        for c in rest.chars() {
            if self.platform.is_separator(c) {
                encoded.push(PLACEHOLDER);
            } else {
                encoded.push(c);
            }
        }
        encoded
    }

    fn current_dir(&self) -> Result<String> {
        match &self.working_dir {
            WorkingDir::Fixed(dir) => Ok(dir.clone()),
            WorkingDir::Process => Ok(std::env::current_dir()?.to_string_lossy().into_owned()),
        }
    }

    fn expand_home(&self, path: &str) -> String {
        let Some(home) = &self.home else {
            return path.to_string();
        };
        match path.strip_prefix('~') {
            Some("") => home.clone(),
            Some(rest) if rest.starts_with(|c| self.platform.is_separator(c)) => {
                format!("{}{}", home, rest)
            }
            _ => path.to_string(),
        }
    }
}
