use crate::server::error::AppError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use biasio_core::BiasResponse;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain")],
            "metrics recorder not installed".to_string(),
        ),
    }
}

// ============================================================================
// Chat endpoints
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct RespondRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl RespondRequest {
    /// Parse a request body; anything that is not a JSON object with a
    /// string `message` counts as an empty payload
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Trimmed message, if any text is left
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

pub async fn respond(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BiasResponse>, AppError> {
    let request = RespondRequest::from_body(&body);
    let Some(message) = request.message() else {
        warn!("Rejected request without a message");
        metrics::counter!("biasio_rejected_total").increment(1);
        return Err(AppError::EmptyMessage);
    };

    let start = Instant::now();
    let response = state.composer.build_response(message);
    let latency_us = start.elapsed().as_micros() as u64;

    debug!(
        topic = %response.topic,
        region = %response.region,
        latency_us,
        "Composed response"
    );
    metrics::histogram!("biasio_compose_latency_us").record(latency_us as f64);
    metrics::counter!(
        "biasio_responses_total",
        "topic" => response.topic.clone(),
        "region" => response.region.as_str()
    )
    .increment(1);

    Ok(Json(response))
}

// ============================================================================
// Catalog endpoints
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub name: String,
    pub keywords: Vec<String>,
}

pub async fn list_topics(State(state): State<AppState>) -> impl IntoResponse {
    let topics: Vec<TopicSummary> = state
        .composer
        .catalog()
        .topics
        .iter()
        .map(|t| TopicSummary {
            name: t.name.clone(),
            keywords: t.keywords.clone(),
        })
        .collect();

    Json(serde_json::json!({ "topics": topics }))
}
