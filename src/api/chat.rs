use anyhow::Context;
use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiJson, AppState, ChatRequest, ChatResponse};

/// Answers a message and appends the exchange to the chat log.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let resolution = state.chat_service().resolve(&request.message).await;

    let record = state
        .store()
        .record_chat(&request.message, &resolution.response)
        .await
        .context("Failed to record chat exchange")?;

    metrics::counter!("chat_messages_total").increment(1);
    tracing::debug!(chat_id = record.id, sources = resolution.sources.len(), "Chat answered");

    Ok(Json(ChatResponse {
        response: resolution.response,
        sources: resolution.sources,
    }))
}
