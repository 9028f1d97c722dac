use crate::domain::tts::Voice;
use async_trait::async_trait;

/// Repository for TTS operations.
/// Abstracts the underlying synthesis provider (AWS Polly, etc.)
///
/// Implementations are responsible for:
/// - Reporting the provider's voice catalog in the domain shape
/// - Handling provider-specific text length limitations
/// - Splitting text into chunks if needed and merging the audio in order
/// - Provider-specific engine selection for the given voice
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// All voices the provider currently offers
    async fn list_voices(&self) -> Result<Vec<Voice>, String>;

    /// Synthesize text with the given catalog voice
    ///
    /// `speed` is a playback-rate multiplier (1.0 = normal) when the provider
    /// supports it. Returns merged audio ready for playback (MP3 format).
    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        speed: Option<f32>,
    ) -> Result<Vec<u8>, String>;
}
