use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use super::{ApiJson, AppState, STATUS_SUCCESS, SearchRequest, SearchResponse};

pub async fn search(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Json<SearchResponse> {
    let num_results = request
        .num_results
        .unwrap_or(state.config().search.default_num_results);

    let results = state
        .search_service()
        .aggregate(&request.query, num_results)
        .await;

    info!(
        query = %request.query,
        num_results,
        returned = results.len(),
        "Search request served"
    );

    Json(SearchResponse {
        status: STATUS_SUCCESS,
        query: request.query,
        results,
    })
}
