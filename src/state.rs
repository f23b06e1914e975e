use std::sync::Arc;
use std::time::Duration;

use crate::clients::build_http_client;
use crate::config::Config;
use crate::db::Store;
use crate::nlp::TextAnalyzer;
use crate::services::{ChatService, ResultCache, SearchService};

/// Services built once at startup and shared by the HTTP layer and the CLI.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub analyzer: TextAnalyzer,

    pub search_service: Arc<SearchService>,

    pub chat_service: Arc<ChatService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let http_client = build_http_client(config.search.request_timeout_seconds)?;
        let cache = Arc::new(ResultCache::new(Duration::from_secs(
            config.search.cache_ttl_seconds,
        )));
        let search_service = Arc::new(SearchService::from_config(
            &config.search,
            http_client,
            cache,
        ));

        Ok(Self::from_parts(config, store, search_service))
    }

    /// Wires the remaining services around an existing store and search
    /// service, which lets callers substitute providers.
    #[must_use]
    pub fn from_parts(config: Config, store: Store, search_service: Arc<SearchService>) -> Self {
        let analyzer = TextAnalyzer::new();
        let chat_service = Arc::new(ChatService::new(
            analyzer,
            search_service.clone(),
            config.search.chat_result_count,
        ));

        Self {
            config: Arc::new(config),
            store,
            analyzer,
            search_service,
            chat_service,
        }
    }
}
