//! # Repository Root Discovery
//!
//! This module provides the seam between the URL pipeline and the `git`
//! binary. Everything that needs the repository root asks a
//! [`RepoRootResolver`] rather than spawning git directly.
//!
//! ## Design
//!
//! - **`RepoRootResolver`**: the one operation the pipeline needs from version
//!   control, finding the top-level directory for a given working directory.
//!
//! - **`GitCli`**: the implementation used by the command-line tool, which
//!   delegates to [`crate::git::show_toplevel`].
//!
//! The working directory is always an explicit argument. Tests substitute a
//! resolver that returns a fixed root, so no real repository is required.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for locating the repository root - allows stubbing in tests
pub trait RepoRootResolver {
    /// Returns the absolute path of the top-level directory of the
    /// repository that contains `cwd`.
    fn repo_root(&self, cwd: &Path) -> Result<PathBuf>;
}

/// The default implementation of `RepoRootResolver`, which asks the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl RepoRootResolver for GitCli {
    fn repo_root(&self, cwd: &Path) -> Result<PathBuf> {
        crate::git::show_toplevel(cwd)
    }
}
