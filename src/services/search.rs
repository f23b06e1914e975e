use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::clients::SearchProvider;
use crate::clients::duckduckgo::DuckDuckGoClient;
use crate::clients::google::GoogleClient;
use crate::config::SearchConfig;
use crate::models::search::SearchResult;
use crate::services::cache::ResultCache;

/// Primary provider with a single fallback, fronted by the result cache.
///
/// Every call tries the primary again; nothing about earlier failures is
/// remembered.
pub struct SearchService {
    primary: Option<Arc<dyn SearchProvider>>,
    fallback: Arc<dyn SearchProvider>,
    cache: Arc<ResultCache>,
}

impl SearchService {
    /// `primary` is `None` when no credentials are configured.
    #[must_use]
    pub fn new(
        primary: Option<Arc<dyn SearchProvider>>,
        fallback: Arc<dyn SearchProvider>,
        cache: Arc<ResultCache>,
    ) -> Self {
        Self {
            primary,
            fallback,
            cache,
        }
    }

    /// Google when both credentials are set, DuckDuckGo behind it.
    #[must_use]
    pub fn from_config(
        config: &SearchConfig,
        client: reqwest::Client,
        cache: Arc<ResultCache>,
    ) -> Self {
        let primary = config.google_credentials().map(|(key, cx)| {
            Arc::new(GoogleClient::with_shared_client(
                client.clone(),
                config.google_base_url.clone(),
                key,
                cx,
            )) as Arc<dyn SearchProvider>
        });

        if primary.is_none() {
            debug!("No Google credentials configured, searches go to DuckDuckGo");
        }

        let fallback = Arc::new(DuckDuckGoClient::with_shared_client(
            client,
            config.duckduckgo_base_url.clone(),
        ));

        Self::new(primary, fallback, cache)
    }

    #[must_use]
    pub const fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }

    /// At most `num_results` results. Provider failures never surface:
    /// the primary degrades to the fallback, the fallback to an empty list.
    pub async fn search(&self, query: &str, num_results: usize) -> Vec<SearchResult> {
        if let Some(primary) = &self.primary {
            match primary.search(query, num_results).await {
                Ok(mut results) => {
                    results.truncate(num_results);
                    return results;
                }
                Err(e) => {
                    warn!(
                        provider = %primary.source(),
                        fallback = %self.fallback.source(),
                        "Primary search failed, falling back: {}",
                        e
                    );
                    metrics::counter!("search_fallback_total").increment(1);
                }
            }
        }

        self.search_fallback(query, num_results).await
    }

    async fn search_fallback(&self, query: &str, num_results: usize) -> Vec<SearchResult> {
        match self.fallback.search(query, num_results).await {
            Ok(mut results) => {
                results.truncate(num_results);
                results
            }
            Err(e) => {
                warn!(provider = %self.fallback.source(), "Fallback search failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Cached results for `query` when fresh and non-empty; otherwise a new
    /// search whose outcome (even an empty one) replaces the cache entry.
    pub async fn aggregate(&self, query: &str, num_results: usize) -> Vec<SearchResult> {
        if let Some(cached) = self.cache.get(query).await
            && !cached.is_empty()
        {
            debug!(query, "Search cache hit");
            metrics::counter!("search_cache_hits_total").increment(1);
            return cached;
        }

        metrics::counter!("search_cache_misses_total").increment(1);

        let results = self.search(query, num_results).await;
        info!(query, count = results.len(), "Search completed");

        self.cache.put(query, results.clone()).await;
        results
    }
}
