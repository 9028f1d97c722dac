pub mod request_id;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, language::LanguageController, tts::TtsController};
use crate::domain::language::LanguageDetectionService;
use crate::infrastructure::config::Config;
use self::request_id::request_id_middleware;

/// Build the CORS layer from configuration. A configured origin of "*"
/// keeps the permissive behavior of the development default.
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let cors = if config.cors_allowed_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(config.cors_allowed_origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any)
    };
    Ok(cors)
}

/// Assemble the application router with all routes and middleware.
/// Split out from server startup so tests can drive the real app in-process.
pub fn build_router(
    cors: CorsLayer,
    language_service: Arc<LanguageDetectionService>,
    language_controller: Arc<LanguageController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    // Language detection routes
    let language_routes = Router::new()
        .route(
            "/api/v1/language/supported",
            get(LanguageController::supported),
        )
        .route("/api/v1/language/detect", post(LanguageController::detect))
        .route(
            "/api/v1/language/detect/batch",
            post(LanguageController::detect_batch),
        )
        .route(
            "/api/v1/language/detect/confidence",
            post(LanguageController::detect_with_confidence),
        )
        .with_state(language_controller);

    // TTS routes
    let tts_routes = Router::new()
        .route("/api/v1/tts/voices", get(TtsController::voices))
        .route(
            "/api/v1/tts/voices/search",
            post(TtsController::search_voices),
        )
        .route("/api/v1/tts/synthesize", post(TtsController::synthesize))
        .route(
            "/api/v1/tts/synthesize/stream",
            post(TtsController::synthesize_stream),
        )
        .with_state(tts_controller);

    // Health routes probe the detector directly
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(language_service);

    Router::new()
        .route("/", get(root))
        .merge(health_routes)
        .merge(language_routes)
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    language_service: Arc<LanguageDetectionService>,
    language_controller: Arc<LanguageController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let cors = build_cors_layer(&config)?;
    let app = build_router(cors, language_service, language_controller, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// GET / - Service directory
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to VoiceBox API",
        "description": "Voice processing platform with text-to-speech and language detection services",
        "version": "1.0.0",
        "services": {
            "voice_synthesis": {
                "/api/v1/tts/voices": "Get all available TTS voices",
                "/api/v1/tts/voices/search": "Search TTS voices by filters",
                "/api/v1/tts/synthesize": "Convert text to speech (returns metadata)",
                "/api/v1/tts/synthesize/stream": "Convert text to speech (returns audio stream)"
            },
            "language_detection": {
                "/api/v1/language/supported": "Get supported languages for detection",
                "/api/v1/language/detect": "Detect language of single text",
                "/api/v1/language/detect/batch": "Batch detect languages for multiple texts",
                "/api/v1/language/detect/confidence": "Detect language with confidence score"
            }
        }
    }))
}
