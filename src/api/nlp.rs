use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    AnalyzeResponse, ApiJson, AppState, HumanizeResponse, STATUS_SUCCESS, SearchQueryResponse,
    TextRequest,
};

pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<TextRequest>,
) -> Json<AnalyzeResponse> {
    Json(AnalyzeResponse {
        status: STATUS_SUCCESS,
        analysis: state.analyzer().analyze(&request.text),
    })
}

pub async fn format_search_query(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<TextRequest>,
) -> Json<SearchQueryResponse> {
    Json(SearchQueryResponse {
        status: STATUS_SUCCESS,
        search_query: state.analyzer().format_search_query(&request.text),
    })
}

pub async fn humanize_text(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<TextRequest>,
) -> Json<HumanizeResponse> {
    Json(HumanizeResponse {
        status: STATUS_SUCCESS,
        humanized_text: state.analyzer().humanize(&request.text),
    })
}
