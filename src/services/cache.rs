//! In-process search result cache.
//!
//! Keys are the raw query strings, so `"Rust"` and `"rust"` are different
//! entries. Entries older than the TTL are ignored but stay in memory until
//! the same query is stored again; the map has no size bound.

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::models::search::SearchResult;

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct CacheEntry {
    results: Vec<SearchResult>,
    timestamp: Instant,
}

#[derive(Debug)]
pub struct ResultCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ResultCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Results stored for exactly `query`, if younger than the TTL.
    pub async fn get(&self, query: &str) -> Option<Vec<SearchResult>> {
        let entries = self.entries.read().await;
        entries
            .get(query)
            .filter(|entry| entry.timestamp.elapsed() < self.ttl)
            .map(|entry| entry.results.clone())
    }

    /// Replaces any existing entry for `query` and restarts its clock.
    pub async fn put(&self, query: &str, results: Vec<SearchResult>) {
        let entry = CacheEntry {
            results,
            timestamp: Instant::now(),
        };
        self.entries.write().await.insert(query.to_string(), entry);
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
