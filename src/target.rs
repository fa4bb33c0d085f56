//! # URL Interpretation
//!
//! Turns a raw URL string into a [`UrlTarget`]: a classified, fully parsed
//! description of what the URL points at inside the local checkout.
//!
//! ## Supported URLs
//!
//! Only `http`/`https` links to `github.com` are recognised. Within those, the
//! path is read as `/<owner>/<repo>[/<rest>...]`:
//!
//! - `/<owner>/<repo>/blob/<ref>/<path>` and `/<owner>/<repo>/tree/<ref>/<path>`
//!   point at `<path>`; the ref is skipped.
//! - `/<owner>/<repo>/<path>` points at `<path>`.
//! - `/<owner>/<repo>` points at the repository root.
//!
//! A `blob`/`tree` link that stops at or before the ref yields an empty
//! sub-path and therefore the repository root. Query strings and fragments
//! (such as `#L10`) are ignored.
//!
//! Adding another host means adding a [`SupportedHost`] variant and a
//! matching [`UrlTarget`] variant; callers only ever see
//! [`UrlTarget::local_path`].

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};
use crate::repository::RepoRootResolver;
use crate::resolve;

const GITHUB_HOST: &str = "github.com";

/// A URL host we know how to map onto a local checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedHost {
    GitHub,
}

impl SupportedHost {
    /// Classify a parsed URL by scheme and host.
    ///
    /// `Url::host_str` never includes the port, so `github.com:443` matches.
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str().unwrap_or_default();
        let web_scheme = matches!(url.scheme(), "http" | "https");

        if web_scheme && host.eq_ignore_ascii_case(GITHUB_HOST) {
            Some(Self::GitHub)
        } else {
            None
        }
    }
}

/// A GitHub link broken down into its parts, with the local repository root
/// it will be resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubTarget {
    pub(crate) host: String,
    pub(crate) owner: String,
    pub(crate) repo: String,
    pub(crate) sub_path: PathBuf,
    pub(crate) repo_root: PathBuf,
}

impl GitHubTarget {
    /// Parse the path of a GitHub URL and resolve the repository root for
    /// `cwd`.
    ///
    /// The URL is fully validated before `resolver` is consulted.
    pub fn from_url(url: &Url, cwd: &Path, resolver: &dyn RepoRootResolver) -> Result<Self> {
        let segments = path_segments(url);
        trace!("path segments for {}: {:?}", url, segments);

        if segments.len() < 2 {
            return Err(Error::InvalidGitHubUrl {
                url: url.to_string(),
            });
        }

        let owner = segments[0].to_string_lossy().into_owned();
        let repo_segment = segments[1].to_string_lossy();
        let repo = repo_segment
            .strip_suffix(".git")
            .unwrap_or(&repo_segment)
            .to_string();
        let sub_path = sub_path(&segments);

        debug!(
            "github url: owner={} repo={} sub_path={}",
            owner,
            repo,
            sub_path.display()
        );

        let repo_root = resolver.repo_root(cwd)?;

        Ok(Self {
            host: url.host_str().unwrap_or_default().to_string(),
            owner,
            repo,
            sub_path,
            repo_root,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name, without any `.git` suffix.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Path inside the repository; empty for the repository root.
    pub fn sub_path(&self) -> &Path {
        &self.sub_path
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }
}

/// A recognised URL, ready to be turned into a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlTarget {
    GitHub(GitHubTarget),
}

impl UrlTarget {
    /// Interpret `raw` and resolve the repository root for `cwd`.
    pub fn parse(raw: &str, cwd: &Path, resolver: &dyn RepoRootResolver) -> Result<Self> {
        let url = Url::parse(raw).map_err(|source| Error::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        match SupportedHost::from_url(&url) {
            Some(SupportedHost::GitHub) => {
                GitHubTarget::from_url(&url, cwd, resolver).map(Self::GitHub)
            }
            None => Err(Error::UnsupportedUrl {
                url: raw.to_string(),
            }),
        }
    }

    /// The local filesystem path this URL refers to.
    pub fn local_path(&self) -> Result<PathBuf> {
        match self {
            Self::GitHub(target) => resolve::github_local_path(target),
        }
    }
}

/// Non-empty segments of the percent-decoded URL path.
///
/// Decoding is byte-wise, so escapes that are not valid UTF-8 (`%FF`) reach
/// the filesystem path unchanged on unix.
fn path_segments(url: &Url) -> Vec<OsString> {
    let decoded: Vec<u8> = percent_decode_str(url.path()).collect();
    decoded
        .split(|byte| *byte == b'/')
        .filter(|segment| !segment.is_empty())
        .map(os_string_from_bytes)
        .collect()
}

#[cfg(unix)]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    std::ffi::OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    String::from_utf8_lossy(bytes).into_owned().into()
}

/// Sub-path selected by the segments after `<owner>/<repo>`.
fn sub_path(segments: &[OsString]) -> PathBuf {
    let rest: &[OsString] = match segments.get(2).map(|segment| segment.to_str()) {
        Some(Some("blob")) | Some(Some("tree")) => segments.get(4..).unwrap_or_default(),
        Some(_) => &segments[2..],
        None => &[],
    };
    rest.iter().collect()
}
