use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chatterbox::clients::{SearchError, SearchProvider};
use chatterbox::config::Config;
use chatterbox::db::Store;
use chatterbox::models::search::{SearchResult, SearchSource};
use chatterbox::services::{ResultCache, SearchService};
use chatterbox::state::SharedState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

struct StaticProvider {
    source: SearchSource,
    results: Vec<SearchResult>,
    calls: AtomicUsize,
}

impl StaticProvider {
    fn new(source: SearchSource, snippets: &[&str]) -> Self {
        let results = snippets
            .iter()
            .enumerate()
            .map(|(i, snippet)| SearchResult {
                title: format!("Result {i}"),
                link: format!("https://example.com/{i}"),
                snippet: (*snippet).to_string(),
                source,
            })
            .collect();
        Self {
            source,
            results,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SearchProvider for StaticProvider {
    fn source(&self) -> SearchSource {
        self.source
    }

    async fn search(
        &self,
        _query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.iter().take(num_results).cloned().collect())
    }
}

struct TestApp {
    router: Router,
    store: Store,
    fallback: Arc<StaticProvider>,
}

async fn spawn_app(snippets: &[&str]) -> TestApp {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    config.observability.metrics_enabled = false;

    let store = Store::new(&config.general.database_path)
        .await
        .expect("Failed to open store");

    let fallback = Arc::new(StaticProvider::new(SearchSource::DuckDuckGo, snippets));
    let search = Arc::new(SearchService::new(
        None,
        fallback.clone(),
        Arc::new(ResultCache::new(Duration::from_secs(3600))),
    ));

    let shared = Arc::new(SharedState::from_parts(config, store.clone(), search));
    let state = chatterbox::api::create_app_state(shared, None);

    TestApp {
        router: chatterbox::api::router(state),
        store,
        fallback,
    }
}

async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_message() {
    let app = spawn_app(&[]).await;

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Welcome to the Chatbot API");
}

#[tokio::test]
async fn test_analyze_shape() {
    let app = spawn_app(&[]).await;

    let (status, body) = post_json(
        &app.router,
        "/nlp/analyze",
        &json!({ "text": "Rust programs run fast. Rust programs are safe." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");

    let analysis = &body["analysis"];
    assert_eq!(analysis["sentence_count"], 2);
    assert_eq!(analysis["keywords"][0], "rust");
    assert!(analysis["keywords"].as_array().unwrap().len() <= 5);
    assert_eq!(
        analysis["tokens"]["original_text"],
        "Rust programs run fast. Rust programs are safe."
    );
    assert_eq!(analysis["tokens"]["sentences"].as_array().unwrap().len(), 2);

    let pos_tags = analysis["pos_tags"].as_array().unwrap();
    assert!(!pos_tags.is_empty());
    assert_eq!(pos_tags[0].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_query_and_humanize() {
    let app = spawn_app(&[]).await;

    let (status, body) = post_json(
        &app.router,
        "/nlp/search-query",
        &json!({ "text": "Python programming and Python machine learning" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["search_query"], "python programming machine");

    let (status, body) = post_json(
        &app.router,
        "/nlp/humanize",
        &json!({ "text": "However, it works. Therefore it ships." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["humanized_text"], "But, it works.. So it ships.");

    let (_, body) = post_json(
        &app.router,
        "/nlp/humanize",
        &json!({ "text": "However, it works. Therefore it ships. Thus it sells." }),
    )
    .await;
    assert_eq!(
        body["humanized_text"],
        "But, it works.. Well, So it ships.. So it sells."
    );
}

#[tokio::test]
async fn test_search_respects_num_results() {
    let app = spawn_app(&["one", "two", "three", "four"]).await;

    let (status, body) = post_json(
        &app.router,
        "/search/search",
        &json!({ "query": "rust", "num_results": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["query"], "rust");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["source"] == "duckduckgo"));
}

#[tokio::test]
async fn test_search_defaults_to_five_results() {
    let snippets: Vec<String> = (0..10).map(|i| format!("snippet {i}")).collect();
    let snippets: Vec<&str> = snippets.iter().map(String::as_str).collect();
    let app = spawn_app(&snippets).await;

    let (status, body) = post_json(&app.router, "/search/search", &json!({ "query": "x" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_search_cache_hit_within_ttl() {
    let app = spawn_app(&["cached"]).await;

    for _ in 0..2 {
        let (status, _) = post_json(&app.router, "/search/search", &json!({ "query": "rust" })).await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(app.fallback.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_chat_persists_exchange() {
    let app = spawn_app(&["First snippet.", "Second snippet."]).await;

    let (status, body) = post_json(
        &app.router,
        "/chat/chat",
        &json!({ "message": "tell me about rust" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sources"].as_array().unwrap().len(), 2);
    assert_eq!(body["sources"][0]["link"], "https://example.com/0");
    assert!(body["sources"][0].get("snippet").is_none());

    assert_eq!(app.store.count_chats().await.unwrap(), 1);
    let latest = app.store.latest_chat().await.unwrap().unwrap();
    assert_eq!(latest.user_message, "tell me about rust");
    assert_eq!(latest.bot_response, body["response"].as_str().unwrap());
}

#[tokio::test]
async fn test_chat_without_results_apologizes() {
    let app = spawn_app(&[]).await;

    let (status, body) = post_json(
        &app.router,
        "/chat/chat",
        &json!({ "message": "something obscure" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "I apologize, but I couldn't find relevant information."
    );
    assert!(body["sources"].as_array().unwrap().is_empty());
    assert_eq!(app.store.count_chats().await.unwrap(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_unprocessable() {
    let app = spawn_app(&[]).await;

    let (status, body) = post_json(&app.router, "/chat/chat", &json!({ "text": "wrong field" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = post_json(
        &app.router,
        "/search/search",
        &json!({ "query": "rust", "num_results": -1 }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
