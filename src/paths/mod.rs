//! Session path resolution.
//!
//! - [`PathResolver`] turns an explicit path, a configured base directory or
//!   the working directory into a canonical absolute [`ResolvedPath`]
//! - [`PathPlatform`] isolates separator and drive-letter conventions
//! - [`escape`] prepares a path for interpolation into a command string
//!
//! # Example
//!
//! ```
//! use autosession::paths::{PathPlatform, PathResolver};
//!
//! let resolver = PathResolver::new("/tmp/sessions//")
//!     .with_platform(PathPlatform::Unix)
//!     .with_working_dir("/home/user/proj");
//! let path = resolver.resolve(None, false).unwrap();
//! assert_eq!(path.as_str(), "/tmp/sessions/%home%user%proj/session");
//! ```

pub mod escape;
pub mod platform;
pub mod resolver;

pub use escape::{escape, split_escaped, unescape};
pub use platform::PathPlatform;
pub use resolver::{PathResolver, ResolvedPath, WorkingDir, SESSION_FILE_NAME};
