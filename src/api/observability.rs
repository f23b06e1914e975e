use crate::api::AppState;
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        metrics_exporter_prometheus::PrometheusHandle::render,
    )
}

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

/// Endpoint family of a request path, used as a bounded label.
fn route_group(path: &str) -> &'static str {
    match path.trim_start_matches('/').split('/').next() {
        Some("") => "root",
        Some("nlp") => "nlp",
        Some("search") => "search",
        Some("chat") => "chat",
        Some("metrics") => "metrics",
        _ => "other",
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let group = route_group(&path);

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        group,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status().as_u16();

        let labels = [
            ("method", method),
            ("group", group.to_string()),
            ("status", status.to_string()),
        ];
        metrics::counter!("http_requests_total", &labels).increment(1);
        metrics::histogram!("http_request_duration_seconds", &labels)
            .record(start.elapsed().as_secs_f64());

        if group == "chat" || group == "search" {
            info!(
                status_code = status,
                duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                "Query request finished"
            );
        } else {
            tracing::debug!(status_code = status, "Request finished");
        }

        response
    }
    .instrument(span)
    .await
}
