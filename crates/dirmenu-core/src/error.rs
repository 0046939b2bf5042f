//! Error types for `dirmenu-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The directory lies outside the configured navigation root.
    #[error("illegal directory: {path} is outside {root}")]
    IllegalDirectory { path: PathBuf, root: PathBuf },

    /// Bad page size, reserved-key collision or similar startup problem.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No free activation key remained for an entry.
    #[error("no free key left for {label:?}")]
    KeySpaceExhausted { label: String },

    /// Reading a directory failed while building its menu.
    #[error("failed to list {path}: {source}")]
    ListingFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filter or exclusion pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A caller-supplied file or directory action failed.
    #[error("action failed: {0}")]
    Action(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `dirmenu-core`.
pub type CoreResult<T> = Result<T, CoreError>;
