use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsService, TtsServiceApi, Voice, VoiceFilter},
    error::{AppError, AppResult},
};

const MAX_TEXT_LENGTH: usize = 10_000;
const MAX_SEARCH_LIMIT: usize = 100;

/// Request for POST /api/v1/tts/synthesize and /synthesize/stream
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceSearchRequest {
    #[serde(flatten)]
    pub filter: VoiceFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
    pub total_count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceSearchResponse {
    pub voices: Vec<Voice>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub filters_applied: VoiceFilter,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub message: String,
    pub audio_size: usize,
    pub voice_used: String,
    pub parameters: SynthesisParameters,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesisParameters {
    pub text_length: usize,
    pub voice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /api/v1/tts/voices - List all available voices
    pub async fn voices(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<VoicesResponse>> {
        let voices = controller.tts_service.list_voices().await?;
        let total_count = voices.len();
        Ok(Json(VoicesResponse {
            voices,
            total_count,
            timestamp: Utc::now(),
        }))
    }

    /// POST /api/v1/tts/voices/search - Search voices by filters
    pub async fn search_voices(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<VoiceSearchRequest>,
    ) -> AppResult<Json<VoiceSearchResponse>> {
        if let Some(limit) = request.limit {
            if limit < 1 || limit > MAX_SEARCH_LIMIT {
                return Err(AppError::BadRequest(format!(
                    "Limit must be between 1 and {}",
                    MAX_SEARCH_LIMIT
                )));
            }
        }

        let search = controller
            .tts_service
            .search_voices(&request.filter, request.limit)
            .await?;

        Ok(Json(VoiceSearchResponse {
            filtered_count: search.voices.len(),
            voices: search.voices,
            total_count: search.total_count,
            filters_applied: request.filter,
            timestamp: Utc::now(),
        }))
    }

    /// POST /api/v1/tts/synthesize - Convert text to speech, returns metadata
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        validate_synthesize_request(&request)?;

        let result = controller
            .tts_service
            .synthesize(&request.text, &request.voice, request.speed)
            .await?;

        Ok(Json(SynthesizeResponse {
            message: "Speech synthesis completed successfully".to_string(),
            audio_size: result.audio_data.len(),
            voice_used: result.voice_used,
            parameters: SynthesisParameters {
                text_length: result.char_count,
                voice: request.voice,
                speed: request.speed,
            },
            timestamp: Utc::now(),
        }))
    }

    /// POST /api/v1/tts/synthesize/stream - Convert text to speech, returns audio
    pub async fn synthesize_stream(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        validate_synthesize_request(&request)?;

        let result = controller
            .tts_service
            .synthesize(&request.text, &request.voice, request.speed)
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            "attachment; filename=speech.mp3".parse().unwrap(),
        );
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );
        headers.insert("X-Voice-Used", result.voice_used.parse().unwrap());

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}

fn validate_synthesize_request(request: &SynthesizeRequest) -> AppResult<()> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    if request.text.chars().count() > MAX_TEXT_LENGTH {
        return Err(AppError::PayloadTooLarge(format!(
            "Text must be {} characters or less",
            MAX_TEXT_LENGTH
        )));
    }

    if let Some(speed) = request.speed {
        if !(0.5..=2.0).contains(&speed) {
            return Err(AppError::BadRequest(
                "Speed must be between 0.5 and 2.0".to_string(),
            ));
        }
    }

    Ok(())
}
