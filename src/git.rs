use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Find the top-level directory of the git repository containing `cwd`
///
/// Runs `git rev-parse --show-toplevel` with `cwd` as its working directory,
/// so the result does not depend on the process's own current directory.
/// Any failure to run git, a non-zero exit, or an empty answer is reported as
/// [`Error::NotAGitRepository`].
pub fn show_toplevel(cwd: &Path) -> Result<PathBuf> {
    debug!("running git rev-parse --show-toplevel in {}", cwd.display());

    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(cwd)
        .output()
        .map_err(|e| Error::NotAGitRepository {
            path: cwd.to_path_buf(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("git rev-parse failed: {}", stderr.trim());
        return Err(Error::NotAGitRepository {
            path: cwd.to_path_buf(),
            stderr: single_line(&stderr),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let toplevel = stdout.trim();
    if toplevel.is_empty() {
        return Err(Error::NotAGitRepository {
            path: cwd.to_path_buf(),
            stderr: String::new(),
        });
    }

    debug!("repository root is {}", toplevel);
    Ok(PathBuf::from(toplevel))
}

/// Collapse git's (possibly multi-line) stderr into one line.
fn single_line(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
