use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{SearchError, SearchProvider};
use crate::models::search::{SearchResult, SearchSource};

pub const GOOGLE_SEARCH_API: &str = "https://www.googleapis.com/customsearch/v1";

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    items: Option<Vec<GoogleItem>>,
}

#[derive(Debug, Deserialize)]
struct GoogleItem {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl From<GoogleItem> for SearchResult {
    fn from(item: GoogleItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
            source: SearchSource::Google,
        }
    }
}

/// Google Custom Search JSON API client.
#[derive(Clone)]
pub struct GoogleClient {
    client: Client,
    base_url: String,
    api_key: String,
    cx: String,
}

impl GoogleClient {
    #[must_use]
    pub fn with_shared_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        cx: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            cx: cx.into(),
        }
    }

    fn build_url(&self, query: &str, num_results: usize) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.base_url).map_err(|source| SearchError::InvalidUrl {
            provider: SearchSource::Google,
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("cx", &self.cx)
            .append_pair("q", query)
            .append_pair("num", &num_results.to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchProvider for GoogleClient {
    fn source(&self) -> SearchSource {
        SearchSource::Google
    }

    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.build_url(query, num_results)?;

        // Error statuses still carry a JSON body; a missing `items` field is
        // what marks the call as failed.
        let body: GoogleResponse = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::transport(SearchSource::Google, e))?
            .json()
            .await
            .map_err(|e| SearchError::transport(SearchSource::Google, e))?;

        let items = body
            .items
            .ok_or(SearchError::MissingResults(SearchSource::Google))?;

        Ok(items.into_iter().map(SearchResult::from).collect())
    }
}
