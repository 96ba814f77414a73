use crate::error::Result;
use crate::feed::ReleaseFeed;
use crate::pin::hints::Hints;
use std::fmt;

/// Declaration name resolved against the Go download index.
pub const GO_TAG: &str = "GO_TAG";
/// Declaration name resolved against the Rust toolchain tags.
pub const RUST_TAG: &str = "RUST_TAG";

/// Which feed answers for a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStrategy {
    /// First non-prerelease release of `repo` whose tag starts with `prefix`.
    PrefixedRelease { repo: String, prefix: String },
    /// `major.minor` from the Go download index.
    RuntimeIndex,
    /// `major.minor` from the latest Rust release tag.
    ToolchainTag,
    /// Tag of the latest release of `repo`.
    LatestTag { repo: String },
}

impl FeedStrategy {
    /// Pick the strategy for a declaration, or `None` if nothing applies.
    ///
    /// Priority: repo + prefix hints, then the `GO_TAG` and `RUST_TAG` names,
    /// then a lone repo hint.
    pub fn resolve(name: &str, hints: &Hints) -> Option<Self> {
        if let (Some(repo), Some(prefix)) = (&hints.repo, &hints.prefix) {
            return Some(Self::PrefixedRelease {
                repo: repo.clone(),
                prefix: prefix.clone(),
            });
        }

        match name {
            GO_TAG => Some(Self::RuntimeIndex),
            RUST_TAG => Some(Self::ToolchainTag),
            _ => hints
                .repo
                .as_ref()
                .map(|repo| Self::LatestTag { repo: repo.clone() }),
        }
    }

    /// Query the feed for the candidate version.
    pub fn fetch(&self, feed: &dyn ReleaseFeed) -> Result<String> {
        match self {
            Self::PrefixedRelease { repo, prefix } => feed.latest_tag_with_prefix(repo, prefix),
            Self::RuntimeIndex => feed.latest_go_minor(),
            Self::ToolchainTag => feed.latest_rust_minor(),
            Self::LatestTag { repo } => feed.latest_tag(repo),
        }
    }
}

impl fmt::Display for FeedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrefixedRelease { repo, prefix } => {
                write!(f, "releases of {repo} tagged {prefix}*")
            }
            Self::RuntimeIndex => write!(f, "Go download index"),
            Self::ToolchainTag => write!(f, "Rust toolchain releases"),
            Self::LatestTag { repo } => write!(f, "latest release of {repo}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(repo: Option<&str>, prefix: Option<&str>) -> Hints {
        Hints {
            repo: repo.map(str::to_string),
            prefix: prefix.map(str::to_string),
        }
    }

    #[test]
    fn repo_and_prefix_win_over_special_names() {
        let strategy = FeedStrategy::resolve(GO_TAG, &hints(Some("golang/go"), Some("go")));
        assert_eq!(
            strategy,
            Some(FeedStrategy::PrefixedRelease {
                repo: "golang/go".into(),
                prefix: "go".into()
            })
        );
    }

    #[test]
    fn special_names_win_over_repo_hint() {
        assert_eq!(
            FeedStrategy::resolve(GO_TAG, &hints(Some("a/b"), None)),
            Some(FeedStrategy::RuntimeIndex)
        );
        assert_eq!(
            FeedStrategy::resolve(RUST_TAG, &Hints::default()),
            Some(FeedStrategy::ToolchainTag)
        );
    }

    #[test]
    fn repo_hint_selects_latest_tag() {
        assert_eq!(
            FeedStrategy::resolve("HELM_VERSION", &hints(Some("helm/helm"), None)),
            Some(FeedStrategy::LatestTag {
                repo: "helm/helm".into()
            })
        );
    }

    #[test]
    fn prefix_without_repo_is_ignored() {
        assert_eq!(
            FeedStrategy::resolve("HELM_VERSION", &hints(None, Some("helm-"))),
            None
        );
        assert_eq!(
            FeedStrategy::resolve(RUST_TAG, &hints(None, Some("v"))),
            Some(FeedStrategy::ToolchainTag)
        );
    }

    #[test]
    fn nothing_applies_without_hints_or_known_name() {
        assert_eq!(FeedStrategy::resolve("DEBIAN_VERSION", &Hints::default()), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(FeedStrategy::resolve("go_tag", &Hints::default()), None);
    }
}
