use crate::error::Result;

pub mod client;

pub use client::HttpFeed;

/// Repository whose release tags track the Rust toolchain.
pub const RUST_REPO: &str = "rust-lang/rust";

/// Upstream sources of release versions.
///
/// `HttpFeed` talks to the real services; tests substitute an in-memory
/// implementation.
pub trait ReleaseFeed {
    /// Tag of the latest release of `repo` (`owner/name`).
    fn latest_tag(&self, repo: &str) -> Result<String>;

    /// `major.minor` of the first entry in the Go download index.
    fn latest_go_minor(&self) -> Result<String>;

    /// First non-prerelease tag of `repo` starting with `prefix`, with the
    /// prefix removed.
    fn latest_tag_with_prefix(&self, repo: &str, prefix: &str) -> Result<String>;

    /// `major.minor` of the latest Rust toolchain release.
    fn latest_rust_minor(&self) -> Result<String> {
        let tag = self.latest_tag(RUST_REPO)?;
        Ok(major_minor(&tag))
    }
}

/// Reduce `1.78.0` to `1.78`. Versions with fewer than two components are
/// returned as-is.
pub fn major_minor(version: &str) -> String {
    let mut parts = version.splitn(3, '.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{major}.{minor}"),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn major_minor_drops_patch() {
        assert_eq!(major_minor("1.78.0"), "1.78");
        assert_eq!(major_minor("1.23.4.5"), "1.23");
        assert_eq!(major_minor("1.23"), "1.23");
    }

    #[test]
    fn major_minor_keeps_single_component() {
        assert_eq!(major_minor("2"), "2");
        assert_eq!(major_minor(""), "");
    }

    struct TagOnly {
        requested: RefCell<Vec<String>>,
    }

    impl ReleaseFeed for TagOnly {
        fn latest_tag(&self, repo: &str) -> Result<String> {
            self.requested.borrow_mut().push(repo.to_string());
            Ok("1.82.0".to_string())
        }

        fn latest_go_minor(&self) -> Result<String> {
            unreachable!()
        }

        fn latest_tag_with_prefix(&self, _repo: &str, _prefix: &str) -> Result<String> {
            unreachable!()
        }
    }

    #[test]
    fn rust_minor_uses_toolchain_repository() {
        let feed = TagOnly {
            requested: RefCell::new(Vec::new()),
        };
        assert_eq!(feed.latest_rust_minor().unwrap(), "1.82");
        assert_eq!(*feed.requested.borrow(), vec![RUST_REPO.to_string()]);
    }
}
