//! Local path resolution for parsed URL targets

use std::io::ErrorKind;
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::target::GitHubTarget;

/// Resolve a GitHub target to a path under its repository root
///
/// A non-empty sub-path is joined onto the root as-is; whether that file
/// exists is left to the caller. With no sub-path the root itself is
/// returned, after checking that it is present on disk.
pub fn github_local_path(target: &GitHubTarget) -> Result<PathBuf> {
    if target.owner.is_empty() || target.repo.is_empty() {
        return Err(Error::InvalidState {
            message: format!(
                "GitHub target is missing its owner or repository name (owner={:?}, repo={:?})",
                target.owner, target.repo
            ),
        });
    }

    if !target.sub_path.as_os_str().is_empty() {
        return Ok(target.repo_root.join(&target.sub_path));
    }

    let root = &target.repo_root;
    match std::fs::metadata(root) {
        Ok(_) => Ok(root.clone()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("repository root {} is missing", root.display());
            Err(Error::PathNotFound { path: root.clone() })
        }
        Err(source) => Err(Error::PathAccess {
            path: root.clone(),
            source,
        }),
    }
}
