use super::error::LanguageServiceError;
use super::registry::{LanguageCode, SupportedLanguage};
use super::DetectionResult;
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};

/// Language detection over the closed set of supported languages.
///
/// The detector is built once, at construction, and restricted to the
/// registry's languages: a smaller candidate set is both faster and more
/// accurate than the full lingua universe. The service holds no other state
/// and can be shared freely across concurrent callers.
pub struct LanguageDetectionService {
    detector: LanguageDetector,
}

impl LanguageDetectionService {
    pub fn new() -> Self {
        let languages: Vec<Language> = LanguageCode::ALL
            .iter()
            .map(|code| code.to_lingua())
            .collect();

        tracing::info!(
            language_count = languages.len(),
            "Initializing language detector with supported languages"
        );

        let detector = LanguageDetectorBuilder::from_languages(&languages).build();

        Self { detector }
    }
}

impl Default for LanguageDetectionService {
    fn default() -> Self {
        Self::new()
    }
}

pub trait LanguageDetectionApi: Send + Sync {
    /// Detect the language of a single text.
    ///
    /// Fails with `Invalid` when the text is empty after trimming. When the
    /// detector finds no confident match among the supported languages the
    /// result falls back to English, with confidence 0.0 if requested.
    fn detect(
        &self,
        text: &str,
        with_confidence: bool,
    ) -> Result<DetectionResult, LanguageServiceError>;

    /// Detect languages for a batch of texts.
    ///
    /// Fails with `Invalid` only when the whole list is empty. A failure on an
    /// individual text never aborts the batch: that entry degrades to the
    /// English default and processing continues. The output has the same
    /// length and order as the input.
    fn detect_batch(
        &self,
        texts: &[String],
        with_confidence: bool,
    ) -> Result<Vec<DetectionResult>, LanguageServiceError>;

    /// All supported languages in registration order
    fn supported_languages(&self) -> Vec<SupportedLanguage>;

    /// Whether a language code is in the supported set
    fn is_supported(&self, code: &str) -> bool;
}

impl LanguageDetectionApi for LanguageDetectionService {
    fn detect(
        &self,
        text: &str,
        with_confidence: bool,
    ) -> Result<DetectionResult, LanguageServiceError> {
        if text.trim().is_empty() {
            return Err(LanguageServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        let (language, confidence) = match self.detector.detect_language_of(text) {
            Some(detected) => {
                let confidence = if with_confidence {
                    Some(self.confidence_for(text, detected))
                } else {
                    None
                };
                (LanguageCode::from_lingua(detected), confidence)
            }
            None => {
                // No confident match among the supported set: default to
                // English with zero confidence rather than returning nothing.
                let preview: String = text.chars().take(50).collect();
                tracing::warn!(
                    text_preview = %preview,
                    "No language detected, falling back to English"
                );
                let confidence = if with_confidence { Some(0.0) } else { None };
                (LanguageCode::English, confidence)
            }
        };

        Ok(DetectionResult {
            text: text.to_string(),
            language,
            language_name: language.display_name().to_string(),
            confidence,
        })
    }

    fn detect_batch(
        &self,
        texts: &[String],
        with_confidence: bool,
    ) -> Result<Vec<DetectionResult>, LanguageServiceError> {
        if texts.is_empty() {
            return Err(LanguageServiceError::Invalid(
                "Texts list cannot be empty".to_string(),
            ));
        }

        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            match self.detect(text, with_confidence) {
                Ok(result) => results.push(result),
                Err(err) => {
                    // An individual bad entry degrades to the English default
                    // instead of failing the whole batch.
                    let preview: String = text.chars().take(50).collect();
                    tracing::warn!(
                        error = %err,
                        text_preview = %preview,
                        "Detection failed for batch item, using default result"
                    );
                    results.push(DetectionResult {
                        text: text.clone(),
                        language: LanguageCode::English,
                        language_name: LanguageCode::English.display_name().to_string(),
                        confidence: if with_confidence { Some(0.0) } else { None },
                    });
                }
            }
        }

        Ok(results)
    }

    fn supported_languages(&self) -> Vec<SupportedLanguage> {
        LanguageCode::ALL.iter().map(|&code| code.into()).collect()
    }

    fn is_supported(&self, code: &str) -> bool {
        LanguageCode::from_code(code).is_some()
    }
}

impl LanguageDetectionService {
    /// Confidence score for the detected language, read from the detector's
    /// per-language confidence distribution. A missing entry should not happen
    /// for a language the detector just returned, but yields 0.0 rather than
    /// a panic.
    fn confidence_for(&self, text: &str, detected: Language) -> f64 {
        self.detector
            .compute_language_confidence_values(text)
            .into_iter()
            .find(|(language, _)| *language == detected)
            .map(|(_, value)| value)
            .unwrap_or(0.0)
    }
}
