//! Query resolution: analysis, cached search, humanized answer.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::models::search::SourceLink;
use crate::nlp::{TextAnalysis, TextAnalyzer};
use crate::services::search::SearchService;

pub const NO_RESULTS_RESPONSE: &str = "I apologize, but I couldn't find relevant information.";

pub const DEFAULT_CHAT_RESULTS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub response: String,
    /// Analysis of the user query. Not used to build the search query.
    pub context: TextAnalysis,
    pub sources: Vec<SourceLink>,
}

pub struct ChatService {
    analyzer: TextAnalyzer,
    search: Arc<SearchService>,
    result_count: usize,
}

impl ChatService {
    #[must_use]
    pub const fn new(
        analyzer: TextAnalyzer,
        search: Arc<SearchService>,
        result_count: usize,
    ) -> Self {
        Self {
            analyzer,
            search,
            result_count,
        }
    }

    /// Runs each step in order. The raw query, not its keywords, is what gets
    /// searched and cached. No results is a normal outcome answered with
    /// [`NO_RESULTS_RESPONSE`].
    pub async fn resolve(&self, user_query: &str) -> Resolution {
        let context = self.analyzer.analyze(user_query);

        let results = self.search.aggregate(user_query, self.result_count).await;

        if results.is_empty() {
            debug!(query = user_query, "No search results for chat message");
            return Resolution {
                response: NO_RESULTS_RESPONSE.to_string(),
                context,
                sources: Vec::new(),
            };
        }

        let mut combined = String::new();
        for result in &results {
            combined.push_str(&result.snippet);
            combined.push(' ');
        }

        let sources = results.iter().map(SourceLink::from).collect();

        Resolution {
            response: self.analyzer.humanize(&combined),
            context,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::SearchProvider;
    use crate::models::search::SearchSource;
    use crate::services::cache::ResultCache;
    use crate::services::search::testing::FakeProvider;
    use std::time::Duration;

    fn chat_service(
        primary: Option<Arc<FakeProvider>>,
        fallback: Arc<FakeProvider>,
        ttl: Duration,
    ) -> ChatService {
        let search = SearchService::new(
            primary.map(|p| p as Arc<dyn SearchProvider>),
            fallback,
            Arc::new(ResultCache::new(ttl)),
        );
        ChatService::new(TextAnalyzer::new(), Arc::new(search), DEFAULT_CHAT_RESULTS)
    }

    #[tokio::test]
    async fn zero_results_give_the_apology() {
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(None, fallback, Duration::from_secs(3600));

        let resolution = service.resolve("What is Python?").await;

        assert_eq!(resolution.response, NO_RESULTS_RESPONSE);
        assert!(resolution.sources.is_empty());
        assert_eq!(resolution.context.tokens.original_text, "What is Python?");
    }

    #[tokio::test]
    async fn empty_query_still_resolves() {
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(None, fallback, Duration::from_secs(3600));

        let resolution = service.resolve("").await;
        assert_eq!(resolution.response, NO_RESULTS_RESPONSE);
    }

    #[tokio::test]
    async fn snippets_are_humanized_and_sources_kept_in_order() {
        let primary = Arc::new(FakeProvider::returning(
            SearchSource::Google,
            &["first", "second", "third"],
        ));
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(Some(primary), fallback, Duration::from_secs(3600));

        let resolution = service.resolve("order").await;

        assert_eq!(
            resolution.response,
            "First snippet.. Well, Second snippet.. Third snippet."
        );
        let titles: Vec<&str> = resolution.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert_eq!(resolution.sources[0].link, "https://example.com/first");
    }

    #[tokio::test(start_paused = true)]
    async fn cache_hit_skips_the_search_client() {
        let primary = Arc::new(FakeProvider::returning(SearchSource::Google, &["a"]));
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(Some(primary.clone()), fallback, Duration::from_secs(3600));

        let first = service.resolve("What is Rust?").await;
        tokio::time::advance(Duration::from_secs(1800)).await;
        let second = service.resolve("What is Rust?").await;

        assert_eq!(first.response, second.response);
        assert_eq!(first.sources, second.sources);
        assert_eq!(primary.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_cache_searches_again() {
        let primary = Arc::new(FakeProvider::returning(SearchSource::Google, &["a"]));
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(Some(primary.clone()), fallback, Duration::from_secs(3600));

        service.resolve("What is Rust?").await;
        tokio::time::advance(Duration::from_secs(3601)).await;
        service.resolve("What is Rust?").await;

        assert_eq!(primary.calls(), 2);
    }

    #[tokio::test]
    async fn differently_cased_queries_are_separate_lookups() {
        let primary = Arc::new(FakeProvider::returning(SearchSource::Google, &["a"]));
        let fallback = Arc::new(FakeProvider::failing(SearchSource::DuckDuckGo));
        let service = chat_service(Some(primary.clone()), fallback, Duration::from_secs(3600));

        service.resolve("rust").await;
        service.resolve("Rust").await;

        assert_eq!(primary.calls(), 2);
    }
}
