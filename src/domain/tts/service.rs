use super::error::TtsServiceError;
use super::voice::{Voice, VoiceFilter};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const VOICES_CACHE_KEY: &str = "catalog";
const VOICES_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice_used: String,
    pub char_count: usize,
}

#[derive(Debug, Clone)]
pub struct VoiceSearch {
    pub total_count: usize,
    pub voices: Vec<Voice>,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    voices_cache: Option<Cache<String, Vec<Voice>>>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, cache_enabled: bool) -> Self {
        // The provider catalog changes rarely; avoid refetching it per request
        let voices_cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(1)
                    .time_to_live(VOICES_CACHE_TTL)
                    .build(),
            )
        } else {
            None
        };

        Self {
            tts_repo,
            voices_cache,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Full provider voice catalog
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsServiceError>;

    /// Catalog filtered by language/locale/gender, truncated to `limit`
    async fn search_voices(
        &self,
        filter: &VoiceFilter,
        limit: Option<usize>,
    ) -> Result<VoiceSearch, TtsServiceError>;

    /// Synthesize text with the named voice
    ///
    /// The voice must exist in the provider catalog. The repository handles
    /// provider text limits (splitting/merging) and engine selection.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: Option<f32>,
    ) -> Result<SynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn list_voices(&self) -> Result<Vec<Voice>, TtsServiceError> {
        if let Some(cache) = &self.voices_cache {
            if let Some(voices) = cache.get(VOICES_CACHE_KEY).await {
                tracing::debug!(voice_count = voices.len(), "Voice catalog cache hit");
                return Ok(voices);
            }
        }

        let voices = self
            .tts_repo
            .list_voices()
            .await
            .map_err(TtsServiceError::Dependency)?;

        tracing::info!(voice_count = voices.len(), "Voice catalog fetched");

        if let Some(cache) = &self.voices_cache {
            cache.insert(VOICES_CACHE_KEY.to_string(), voices.clone()).await;
        }

        Ok(voices)
    }

    async fn search_voices(
        &self,
        filter: &VoiceFilter,
        limit: Option<usize>,
    ) -> Result<VoiceSearch, TtsServiceError> {
        let all_voices = self.list_voices().await?;
        let total_count = all_voices.len();

        let mut voices: Vec<Voice> = all_voices
            .into_iter()
            .filter(|voice| filter.matches(voice))
            .collect();

        if let Some(limit) = limit {
            voices.truncate(limit);
        }

        Ok(VoiceSearch {
            total_count,
            voices,
        })
    }

    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: Option<f32>,
    ) -> Result<SynthesisResult, TtsServiceError> {
        let char_count = text.chars().count();

        tracing::info!(
            voice = voice_id,
            text_length = char_count,
            speed = ?speed,
            "TTS synthesis request"
        );

        // Resolve the requested voice against the catalog before calling the
        // provider, so an unknown voice is a caller error rather than an
        // opaque provider failure.
        let voices = self.list_voices().await?;
        let voice = voices
            .iter()
            .find(|voice| voice.id == voice_id)
            .ok_or_else(|| {
                TtsServiceError::Invalid(format!(
                    "Voice '{}' not found. Use /api/v1/tts/voices to list available voices.",
                    voice_id
                ))
            })?;

        let audio_data = self
            .tts_repo
            .synthesize(text, voice, speed)
            .await
            .map_err(TtsServiceError::Dependency)?;

        if audio_data.is_empty() {
            return Err(TtsServiceError::Dependency(
                "Provider returned no audio data".to_string(),
            ));
        }

        tracing::info!(
            voice = %voice.id,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisResult {
            audio_data,
            voice_used: voice.id.clone(),
            char_count,
        })
    }
}
