use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::{SearchError, SearchProvider};
use crate::models::search::{SearchResult, SearchSource};

pub const DUCKDUCKGO_API: &str = "https://api.duckduckgo.com";

#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Topic groups (`{"Name", "Topics"}`) have neither field and map to empty
/// strings.
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: String,
    #[serde(rename = "FirstURL", default)]
    first_url: String,
}

impl From<RelatedTopic> for SearchResult {
    fn from(topic: RelatedTopic) -> Self {
        Self {
            title: topic.text.clone(),
            link: topic.first_url,
            snippet: topic.text,
            source: SearchSource::DuckDuckGo,
        }
    }
}

/// DuckDuckGo Instant Answer API client, used as the keyless fallback.
#[derive(Clone)]
pub struct DuckDuckGoClient {
    client: Client,
    base_url: String,
}

impl DuckDuckGoClient {
    #[must_use]
    pub fn with_shared_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.base_url).map_err(|source| SearchError::InvalidUrl {
            provider: SearchSource::DuckDuckGo,
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("format", "json");
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchProvider for DuckDuckGoClient {
    fn source(&self) -> SearchSource {
        SearchSource::DuckDuckGo
    }

    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.build_url(query)?;

        let body: InstantAnswer = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::transport(SearchSource::DuckDuckGo, e))?
            .json()
            .await
            .map_err(|e| SearchError::transport(SearchSource::DuckDuckGo, e))?;

        Ok(body
            .related_topics
            .into_iter()
            .take(num_results)
            .map(SearchResult::from)
            .collect())
    }
}
