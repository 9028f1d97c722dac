use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::language::{
        DetectionResult, LanguageDetectionApi, LanguageDetectionService, SupportedLanguage,
    },
    error::AppResult,
};

/// Request for POST /api/v1/language/detect
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectRequest {
    pub text: String,
    #[serde(default)]
    pub with_confidence: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchDetectRequest {
    pub texts: Vec<String>,
    #[serde(default)]
    pub with_confidence: bool,
}

/// Request for POST /api/v1/language/detect/confidence - confidence is implied
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfidenceDetectRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SupportedLanguagesResponse {
    pub languages: Vec<SupportedLanguage>,
    pub total_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchDetectResponse {
    pub results: Vec<DetectionResult>,
    pub total_count: usize,
}

pub struct LanguageController {
    language_service: Arc<LanguageDetectionService>,
}

impl LanguageController {
    pub fn new(language_service: Arc<LanguageDetectionService>) -> Self {
        Self { language_service }
    }

    /// GET /api/v1/language/supported - List detectable languages
    pub async fn supported(
        State(controller): State<Arc<LanguageController>>,
    ) -> Json<SupportedLanguagesResponse> {
        let languages = controller.language_service.supported_languages();
        let total_count = languages.len();
        Json(SupportedLanguagesResponse {
            languages,
            total_count,
        })
    }

    /// POST /api/v1/language/detect - Detect language of a single text
    pub async fn detect(
        State(controller): State<Arc<LanguageController>>,
        Json(request): Json<DetectRequest>,
    ) -> AppResult<Json<DetectionResult>> {
        let result = controller
            .language_service
            .detect(&request.text, request.with_confidence)?;
        Ok(Json(result))
    }

    /// POST /api/v1/language/detect/batch - Detect languages for multiple texts
    pub async fn detect_batch(
        State(controller): State<Arc<LanguageController>>,
        Json(request): Json<BatchDetectRequest>,
    ) -> AppResult<Json<BatchDetectResponse>> {
        let results = controller
            .language_service
            .detect_batch(&request.texts, request.with_confidence)?;
        let total_count = results.len();
        Ok(Json(BatchDetectResponse {
            results,
            total_count,
        }))
    }

    /// POST /api/v1/language/detect/confidence - Detect with confidence always on
    pub async fn detect_with_confidence(
        State(controller): State<Arc<LanguageController>>,
        Json(request): Json<ConfidenceDetectRequest>,
    ) -> AppResult<Json<DetectionResult>> {
        let result = controller.language_service.detect(&request.text, true)?;
        Ok(Json(result))
    }
}
