pub mod error;
pub mod registry;
pub mod service;

pub use error::LanguageServiceError;
pub use registry::{LanguageCode, SupportedLanguage};
pub use service::{LanguageDetectionApi, LanguageDetectionService};

use serde::{Deserialize, Serialize};

/// Result of a single detection call.
///
/// `confidence` is `None` when the caller did not ask for it; a computed score
/// of zero is `Some(0.0)`, so the two cases stay distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    pub text: String,
    pub language: LanguageCode,
    pub language_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}
