//! Property-based tests for URL interpretation and path resolution.
//!
//! These tests use proptest to generate GitHub-shaped URLs and verify that
//! the resolved path follows the owner/repo/ref layout for every input.

#[cfg(test)]
mod proptest_tests {
    use crate::convert;
    use crate::error::Error;
    use crate::repository::testing::FixedRoot;
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    const ROOT: &str = "/home/u/checkout";

    /// Path segment that the URL parser leaves untouched (never `.` or `..`)
    fn segment() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,11}"
    }

    fn sub_segments() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(segment(), 1..5)
    }

    fn resolve(url: &str) -> Result<PathBuf, Error> {
        let resolver = FixedRoot::new(ROOT);
        convert(url, Path::new(ROOT), &resolver)
    }

    fn expected(parts: &[String]) -> PathBuf {
        parts.iter().fold(PathBuf::from(ROOT), |acc, p| acc.join(p))
    }

    // ============================================================================
    // blob/tree links
    // ============================================================================

    proptest! {
        /// Property: blob and tree links resolve to the segments after the ref
        #[test]
        fn blob_and_tree_links_skip_the_ref(
            owner in segment(),
            repo in segment(),
            marker in prop::sample::select(vec!["blob", "tree"]),
            git_ref in segment(),
            parts in sub_segments(),
        ) {
            let url = format!(
                "https://github.com/{}/{}/{}/{}/{}",
                owner, repo, marker, git_ref, parts.join("/")
            );
            prop_assert_eq!(resolve(&url).unwrap(), expected(&parts));
        }

        /// Property: any other third segment starts the sub-path itself
        #[test]
        fn plain_links_keep_every_segment(
            owner in segment(),
            repo in segment(),
            parts in sub_segments(),
        ) {
            prop_assume!(parts[0] != "blob" && parts[0] != "tree");
            let url = format!("https://github.com/{}/{}/{}", owner, repo, parts.join("/"));
            prop_assert_eq!(resolve(&url).unwrap(), expected(&parts));
        }

        /// Property: a trailing .git on the repository changes nothing
        #[test]
        fn git_suffix_is_transparent(
            owner in segment(),
            repo in segment(),
            parts in sub_segments(),
        ) {
            let rest = parts.join("/");
            let plain = format!("https://github.com/{}/{}/blob/main/{}", owner, repo, rest);
            let suffixed = format!("https://github.com/{}/{}.git/blob/main/{}", owner, repo, rest);
            prop_assert_eq!(resolve(&plain).unwrap(), resolve(&suffixed).unwrap());
        }

        /// Property: hosts other than github.com are always rejected
        #[test]
        fn other_hosts_are_unsupported(
            host in "[a-z]{1,10}\\.(com|org|io)",
            owner in segment(),
            repo in segment(),
        ) {
            prop_assume!(host != "github.com");
            let url = format!("https://{}/{}/{}", host, owner, repo);
            let is_unsupported = matches!(resolve(&url), Err(Error::UnsupportedUrl { .. }));
            prop_assert!(is_unsupported);
        }

        /// Property: resolution is deterministic
        #[test]
        fn resolution_is_deterministic(
            owner in segment(),
            repo in segment(),
            parts in sub_segments(),
        ) {
            let url = format!("https://github.com/{}/{}/tree/dev/{}", owner, repo, parts.join("/"));
            prop_assert_eq!(resolve(&url).unwrap(), resolve(&url).unwrap());
        }
    }
}
