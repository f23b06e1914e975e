use std::sync::Arc;
use std::time::Duration;

use crate::clients::build_http_client;
use crate::config::Config;
use crate::nlp::TextAnalyzer;
use crate::services::{ChatService, ResultCache, SearchService};

pub async fn cmd_ask(config: &Config, query: &str) -> anyhow::Result<()> {
    let client = build_http_client(config.search.request_timeout_seconds)?;
    let cache = Arc::new(ResultCache::new(Duration::from_secs(
        config.search.cache_ttl_seconds,
    )));
    let search = Arc::new(SearchService::from_config(&config.search, client, cache));
    let chat = ChatService::new(TextAnalyzer::new(), search, config.search.chat_result_count);

    let resolution = chat.resolve(query).await;

    println!("{}", resolution.response);

    if !resolution.sources.is_empty() {
        println!();
        println!("Sources:");
        println!("{:-<60}", "");
        for source in &resolution.sources {
            println!("• {}", source.title);
            println!("  {}", source.link);
        }
    }

    Ok(())
}
