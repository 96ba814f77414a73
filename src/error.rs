use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("unexpected status {status} for {url}")]
    Feed { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response from {url} exceeded the 10MB limit")]
    ResponseTooLarge { url: String },

    #[error("no tag found for {repo:?}")]
    EmptyResult { repo: String },

    #[error("empty version feed at {url}")]
    EmptyFeed { url: String },

    #[error("no release found for {repo:?} with prefix {prefix:?}")]
    NoMatch { repo: String, prefix: String },

    #[error("Invalid declaration pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl UpdateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, UpdateError>;
