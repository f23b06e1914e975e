pub mod duckduckgo;
pub mod google;

use crate::models::search::{SearchResult, SearchSource};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: SearchSource,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0} response is missing its results field")]
    MissingResults(SearchSource),

    #[error("Invalid {provider} base URL: {source}")]
    InvalidUrl {
        provider: SearchSource,
        #[source]
        source: url::ParseError,
    },
}

impl SearchError {
    pub(crate) const fn transport(provider: SearchSource, source: reqwest::Error) -> Self {
        Self::Transport { provider, source }
    }
}

/// A web search backend returning results in the common shape.
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    fn source(&self) -> SearchSource;

    /// Up to `num_results` results for `query`.
    ///
    /// # Errors
    ///
    /// - Returns [`SearchError::Transport`] when the request or body decoding fails
    /// - Returns [`SearchError::MissingResults`] when the body has no results field
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// Build a shared HTTP client for both providers so they reuse one
/// connection pool and the same per-call timeout.
pub fn build_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .user_agent(concat!("Chatterbox/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}
