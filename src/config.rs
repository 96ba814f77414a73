use crate::error::{Result, UpdateError};
use std::time::Duration;
use url::Url;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_GO_INDEX: &str = "https://go.dev/dl/?mode=json";

const TOKEN_VAR: &str = "GITHUB_TOKEN";
const GITHUB_API_VAR: &str = "GITHUB_API_URL";
const GO_INDEX_VAR: &str = "GO_DL_INDEX_URL";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("update-versions/", env!("CARGO_PKG_VERSION"));

/// Endpoints and credentials shared by every feed request.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub github_api: String,
    pub go_index: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FeedConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let github_api = match non_empty(GITHUB_API_VAR) {
            Some(raw) => Self::validate_endpoint(GITHUB_API_VAR, raw.trim())?,
            None => DEFAULT_GITHUB_API.to_string(),
        };
        let go_index = match non_empty(GO_INDEX_VAR) {
            Some(raw) => Self::validate_endpoint(GO_INDEX_VAR, raw.trim())?,
            None => DEFAULT_GO_INDEX.to_string(),
        };

        Ok(Self {
            github_api: github_api.trim_end_matches('/').to_string(),
            go_index,
            token: non_empty(TOKEN_VAR),
            timeout: HTTP_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        })
    }

    fn validate_endpoint(var: &str, raw: &str) -> Result<String> {
        let parsed = Url::parse(raw)
            .map_err(|e| UpdateError::Config(format!("{var} is not a valid URL ({raw}): {e}")))?;

        match parsed.scheme() {
            "https" | "http" => Ok(raw.to_string()),
            scheme => Err(UpdateError::Config(format!(
                "{var} uses unsupported scheme: {scheme}"
            ))),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            github_api: DEFAULT_GITHUB_API.to_string(),
            go_index: DEFAULT_GO_INDEX.to_string(),
            token: None,
            timeout: HTTP_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = FeedConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.github_api, DEFAULT_GITHUB_API);
        assert_eq!(config.go_index, DEFAULT_GO_INDEX);
        assert!(config.token.is_none());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("update-versions/"));
    }

    #[test]
    fn reads_token_and_ignores_blank_one() {
        let config = FeedConfig::from_lookup(lookup_from(&[("GITHUB_TOKEN", "abc")])).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));

        let config = FeedConfig::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  ")])).unwrap();
        assert!(config.token.is_none());
    }

    #[test]
    fn trims_trailing_slash_from_api_override() {
        let config = FeedConfig::from_lookup(lookup_from(&[(
            "GITHUB_API_URL",
            "https://ghe.example.com/api/v3/",
        )]))
        .unwrap();
        assert_eq!(config.github_api, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn rejects_unsupported_scheme() {
        let err = FeedConfig::from_lookup(lookup_from(&[("GO_DL_INDEX_URL", "ftp://example.com")]))
            .unwrap_err();
        assert!(matches!(err, UpdateError::Config(_)));
    }

    #[test]
    fn rejects_unparseable_override() {
        let err = FeedConfig::from_lookup(lookup_from(&[("GITHUB_API_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, UpdateError::Config(_)));
    }
}
