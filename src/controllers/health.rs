use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::language::{LanguageDetectionApi, LanguageDetectionService};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State(language_service): State<Arc<LanguageDetectionService>>,
) -> impl IntoResponse {
    // Exercise the detector once so readiness reflects a working classifier
    match language_service.detect("ready", false) {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "language_detection": "available",
                "tts": "available"
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "language_detection": "unavailable",
                "tts": "unknown"
            })),
        ),
    }
}
