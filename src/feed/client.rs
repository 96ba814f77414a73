use crate::config::FeedConfig;
use crate::error::{Result, UpdateError};
use crate::feed::{ReleaseFeed, major_minor};
use crate::utils::verbose;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024;
const RELEASES_PER_PAGE: u32 = 100;
const GO_VERSION_PREFIX: &str = "go";

/// Blocking HTTP client for the GitHub releases API and the Go download index.
pub struct HttpFeed {
    client: Client,
    config: FeedConfig,
}

impl HttpFeed {
    pub fn new(config: FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(UpdateError::HttpClient)?;

        Ok(Self { client, config })
    }

    /// GET `url` and decode the JSON body. `bearer` is attached as an
    /// `Authorization` header when present.
    fn get_json<T: DeserializeOwned>(&self, url: &str, bearer: Option<&str>) -> Result<T> {
        verbose::log(format!("Fetching: {url}"));

        let mut request = self.client.get(url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|source| {
            verbose::log(format!("Request failed: {source}"));
            UpdateError::Request {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            verbose::log(format!("HTTP {status}: {url}"));
            return Err(UpdateError::Feed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > MAX_RESPONSE_BYTES as u64)
        {
            return Err(UpdateError::ResponseTooLarge {
                url: url.to_string(),
            });
        }

        let text = response.text().map_err(|source| UpdateError::Request {
            url: url.to_string(),
            source,
        })?;

        if text.len() > MAX_RESPONSE_BYTES {
            return Err(UpdateError::ResponseTooLarge {
                url: url.to_string(),
            });
        }

        serde_json::from_str(&text).map_err(|source| UpdateError::MalformedResponse {
            url: url.to_string(),
            source,
        })
    }

    fn github_token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }
}

impl ReleaseFeed for HttpFeed {
    fn latest_tag(&self, repo: &str) -> Result<String> {
        let url = format!("{}/repos/{}/releases/latest", self.config.github_api, repo);
        let release: LatestRelease = self.get_json(&url, self.github_token())?;

        if release.tag_name.is_empty() {
            return Err(UpdateError::EmptyResult {
                repo: repo.to_string(),
            });
        }
        Ok(release.tag_name)
    }

    fn latest_go_minor(&self) -> Result<String> {
        let url = self.config.go_index.as_str();
        let entries: Vec<GoRelease> = self.get_json(url, None)?;

        // The index lists the newest release first.
        let first = entries.first().ok_or_else(|| UpdateError::EmptyFeed {
            url: url.to_string(),
        })?;
        let version = first
            .version
            .strip_prefix(GO_VERSION_PREFIX)
            .unwrap_or(&first.version);
        if version.is_empty() {
            return Err(UpdateError::EmptyFeed {
                url: url.to_string(),
            });
        }

        Ok(major_minor(version))
    }

    fn latest_tag_with_prefix(&self, repo: &str, prefix: &str) -> Result<String> {
        let url = format!(
            "{}/repos/{}/releases?per_page={}",
            self.config.github_api, repo, RELEASES_PER_PAGE
        );
        let releases: Vec<Release> = self.get_json(&url, self.github_token())?;

        releases
            .iter()
            .filter(|release| !release.prerelease)
            .filter_map(|release| release.tag_name.strip_prefix(prefix))
            .find(|version| !version.is_empty())
            .map(str::to_string)
            .ok_or_else(|| UpdateError::NoMatch {
                repo: repo.to_string(),
                prefix: prefix.to_string(),
            })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    #[serde(default)]
    tag_name: String,
}

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
    #[serde(default)]
    prerelease: bool,
}

#[derive(Debug, Deserialize)]
struct GoRelease {
    version: String,
}
