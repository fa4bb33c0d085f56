//! # git-path-from-url Library
//!
//! This library maps a GitHub web link onto the matching path inside the local
//! checkout of that repository. It backs the `git-path-from-url` command-line
//! tool (usable as `git path-from-url <url>`), but the pipeline is plain
//! library code and can be driven directly.
//!
//! ## Quick Example
//!
//! ```no_run
//! use std::path::Path;
//! use git_path_from_url::convert;
//! use git_path_from_url::repository::GitCli;
//!
//! let path = convert(
//!     "https://github.com/foo/bar/blob/main/src/lib.rs",
//!     Path::new("."),
//!     &GitCli,
//! )
//! .unwrap();
//! println!("{}", path.display());
//! ```
//!
//! ## Execution Flow
//!
//! 1.  **Interpretation (`target`)**: Parse the URL, check that it is a
//!     supported GitHub link and split it into owner, repository and sub-path.
//! 2.  **Repository root (`repository`, `git`)**: Ask git for the top-level
//!     directory of the repository containing the working directory.
//! 3.  **Resolution (`resolve`)**: Join the sub-path onto the root, or check
//!     that the root exists when there is no sub-path.
//!
//! Every step returns [`error::Result`] and the first failure ends the run.

pub mod error;
pub mod git;
pub mod repository;
pub mod resolve;
pub mod target;

#[cfg(test)]
mod target_proptest;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::repository::RepoRootResolver;
use crate::target::UrlTarget;

/// Convert a URL into a local path under the repository containing `cwd`.
pub fn convert(raw: &str, cwd: &Path, resolver: &dyn RepoRootResolver) -> Result<PathBuf> {
    UrlTarget::parse(raw, cwd, resolver)?.local_path()
}
