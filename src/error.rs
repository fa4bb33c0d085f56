//! # Error Handling
//!
//! This module defines the error type shared by every stage of the
//! URL-to-path pipeline. It uses `thiserror` so that each failure mode carries
//! the context needed to print a single, readable line on standard error.
//!
//! ## Key Components
//!
//! - **`Error`**: One variant per failure mode, from argument handling through
//!   URL interpretation, repository discovery and filesystem checks.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! None of these errors are recovered from internally. They travel unchanged
//! to the command entry point, which reports them and exits with status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for git-path-from-url operations
#[derive(Error, Debug)]
pub enum Error {
    /// The command was invoked without a URL argument.
    #[error("usage: git path-from-url <url>")]
    Usage,

    /// The argument could not be parsed as a URL at all.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The URL parsed, but its scheme or host is not one we can map to a
    /// local path.
    #[error("unsupported URL: {url}")]
    UnsupportedUrl { url: String },

    /// A GitHub URL whose path does not name both an owner and a repository.
    #[error("invalid GitHub URL: missing owner/repo: {url}")]
    InvalidGitHubUrl { url: String },

    /// `git rev-parse --show-toplevel` failed for the working directory.
    ///
    /// `stderr` holds whatever git printed, which may be empty when the
    /// binary could not be spawned at all.
    #[error("not a git repository: {}{}", path.display(), if stderr.is_empty() { String::new() } else { format!(" ({})", stderr) })]
    NotAGitRepository { path: PathBuf, stderr: String },

    /// The resolved repository root is missing on disk.
    #[error("path does not exist: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// Checking the resolved path failed for a reason other than absence.
    #[error("failed to access path {}: {source}", path.display())]
    PathAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An internal consistency check failed.
    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
