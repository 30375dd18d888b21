//! Best-effort retrieval of context pages.
//!
//! Fetch failures never propagate past [`PageFetcher::gather`]: a page that
//! cannot be retrieved simply contributes no fragments.

use std::time::Duration;

use futures::future::join_all;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use crate::context::extract_fragments;
use crate::error::WordgenError;

pub const ENCYCLOPEDIA_ENDPOINT: &str = "https://en.wikipedia.org/w/index.php";
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSource {
    Encyclopedia,
    SearchEngine,
}

impl ContextSource {
    pub fn name(&self) -> &'static str {
        match self {
            ContextSource::Encyclopedia => "Wikipedia",
            ContextSource::SearchEngine => "Google",
        }
    }

    /// Builds the search URL for `base` against `endpoint`.
    pub fn search_url(&self, endpoint: &str, base: &str) -> Result<Url, WordgenError> {
        let url = match self {
            ContextSource::Encyclopedia => {
                let query = base.to_lowercase();
                Url::parse_with_params(endpoint, &[("search", query.as_str())])?
            }
            ContextSource::SearchEngine => {
                let query = format!("{} CTF challenge", base);
                Url::parse_with_params(endpoint, &[("q", query.as_str())])?
            }
        };
        Ok(url)
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    /// Pause before every request.
    pub delay: Duration,
    pub user_agent: String,
    pub encyclopedia_endpoint: String,
    pub search_endpoint: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            encyclopedia_endpoint: ENCYCLOPEDIA_ENDPOINT.to_string(),
            search_endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn endpoint(&self, source: ContextSource) -> &str {
        match source {
            ContextSource::Encyclopedia => &self.encyclopedia_endpoint,
            ContextSource::SearchEngine => &self.search_endpoint,
        }
    }
}

pub struct PageFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, WordgenError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetches a page body. Anything but `200 OK` is an error.
    pub async fn fetch(&self, url: &Url) -> Result<String, WordgenError> {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(WordgenError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn fragments_from(&self, source: ContextSource, base: &str) -> Vec<String> {
        let url = match source.search_url(self.config.endpoint(source), base) {
            Ok(url) => url,
            Err(err) => {
                warn!(source = source.name(), error = %err, "skipping context source");
                return Vec::new();
            }
        };

        match self.fetch(&url).await {
            Ok(body) => {
                let fragments = extract_fragments(&body);
                debug!(source = source.name(), count = fragments.len(), "extracted fragments");
                fragments
            }
            Err(err) => {
                warn!(source = source.name(), url = %url, error = %err, "failed to fetch context");
                Vec::new()
            }
        }
    }

    /// Fetches every source concurrently and concatenates their fragments in
    /// the order the sources were given.
    pub async fn gather(&self, sources: &[ContextSource], base: &str) -> Vec<String> {
        let pages = join_all(
            sources
                .iter()
                .map(|source| self.fragments_from(*source, base)),
        )
        .await;

        pages.into_iter().flatten().collect()
    }
}
