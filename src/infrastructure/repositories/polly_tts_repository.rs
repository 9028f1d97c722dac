use super::tts_repository::TtsRepository;
use crate::domain::tts::Voice;
use async_trait::async_trait;
use aws_sdk_polly::{
    types::{Engine, OutputFormat, TextType, VoiceId},
    Client as PollyClient,
};
use std::sync::Arc;

/// AWS Polly has a limit of 3000 characters per request
const MAX_CHUNK_SIZE: usize = 3000;

/// AWS Polly implementation of TTS repository
pub struct PollyTtsRepository {
    polly_client: Arc<PollyClient>,
}

impl PollyTtsRepository {
    pub fn new(polly_client: Arc<PollyClient>) -> Self {
        Self { polly_client }
    }

    /// Call AWS Polly to synthesize a single text chunk
    async fn call_polly(
        &self,
        text: &str,
        voice: &Voice,
        engine: &Engine,
        speed: Option<f32>,
    ) -> Result<Vec<u8>, String> {
        let voice_id = VoiceId::from(voice.id.as_str());

        tracing::info!(
            voice = %voice.id,
            engine = ?engine,
            output_format = "Mp3",
            text_length = text.len(),
            "Calling AWS Polly synthesize_speech"
        );

        let mut request = self
            .polly_client
            .synthesize_speech()
            .voice_id(voice_id)
            .output_format(OutputFormat::Mp3)
            .engine(engine.clone());

        // Playback speed maps to an SSML prosody rate percentage
        request = match speed {
            Some(speed) => {
                let rate = (speed * 100.0).round() as u32;
                let ssml = format!(
                    r#"<speak><prosody rate="{}%">{}</prosody></speak>"#,
                    rate,
                    escape_ssml(text)
                );
                request.text(ssml).text_type(TextType::Ssml)
            }
            None => request.text(text),
        };

        let result = request.send().await.map_err(|e| {
            tracing::error!(
                error = ?e,
                voice = %voice.id,
                engine = ?engine,
                text_length = text.len(),
                "AWS Polly synthesize_speech failed"
            );
            format!("AWS Polly error: {:?}", e)
        })?;

        let audio_stream = result.audio_stream.collect().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to collect audio stream from Polly response");
            format!("Failed to read audio stream: {}", e)
        })?;

        Ok(audio_stream.into_bytes().to_vec())
    }

    /// Synthesize text chunks and merge the audio results in order
    async fn synthesize_chunks(
        &self,
        chunks: &[String],
        voice: &Voice,
        engine: &Engine,
        speed: Option<f32>,
    ) -> Result<Vec<u8>, String> {
        let mut merged_audio = Vec::new();

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::info!(
                chunk_index = index,
                chunk_size = chunk.len(),
                "Synthesizing chunk"
            );

            let audio_data = self.call_polly(chunk, voice, engine, speed).await?;
            merged_audio.extend(audio_data);
        }

        Ok(merged_audio)
    }
}

#[async_trait]
impl TtsRepository for PollyTtsRepository {
    async fn list_voices(&self) -> Result<Vec<Voice>, String> {
        let mut voices = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let mut request = self.polly_client.describe_voices();
            if let Some(token) = &next_token {
                request = request.next_token(token);
            }

            let response = request.send().await.map_err(|e| {
                tracing::error!(error = ?e, "AWS Polly describe_voices failed");
                format!("AWS Polly error: {:?}", e)
            })?;

            for polly_voice in response.voices() {
                let Some(id) = polly_voice.id() else {
                    continue;
                };
                voices.push(Voice {
                    id: id.as_str().to_string(),
                    name: polly_voice.name().unwrap_or(id.as_str()).to_string(),
                    gender: polly_voice
                        .gender()
                        .map(|g| g.as_str().to_string())
                        .unwrap_or_default(),
                    locale: polly_voice
                        .language_code()
                        .map(|c| c.as_str().to_string())
                        .unwrap_or_default(),
                    language: polly_voice.language_name().unwrap_or_default().to_string(),
                    neural: polly_voice.supported_engines().contains(&Engine::Neural),
                });
            }

            next_token = response.next_token().map(str::to_string);
            if next_token.is_none() {
                break;
            }
        }

        tracing::debug!(voice_count = voices.len(), "Fetched Polly voice catalog");

        Ok(voices)
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        speed: Option<f32>,
    ) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let engine = if voice.neural {
            Engine::Neural
        } else {
            Engine::Standard
        };

        // Split text into chunks based on Polly's request size limit
        let chunks = split_into_chunks(text);
        tracing::info!(
            chunk_count = chunks.len(),
            text_length = text.len(),
            "Text split into chunks"
        );

        let audio_data = self.synthesize_chunks(&chunks, voice, &engine, speed).await?;

        tracing::info!(
            provider = "polly",
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            chunk_count = chunks.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}

/// Split text into chunks that respect sentence boundaries.
/// Each chunk is at most MAX_CHUNK_SIZE characters.
fn split_into_chunks(text: &str) -> Vec<String> {
    if text.len() <= MAX_CHUNK_SIZE {
        return vec![text.to_string()];
    }

    // Sentence-ending punctuation, Latin and CJK
    let sentence_end = regex::Regex::new(r"[.!?。！？]+\s*").unwrap();

    let mut segments: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for mat in sentence_end.find_iter(text) {
        segments.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        segments.push(&text[last_end..]);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for segment in segments {
        if !current.is_empty() && current.len() + segment.len() > MAX_CHUNK_SIZE {
            chunks.push(std::mem::take(&mut current).trim().to_string());
        }

        if segment.len() > MAX_CHUNK_SIZE {
            // A run without sentence boundaries: fall back to splitting on
            // characters
            let chars: Vec<char> = segment.chars().collect();
            for piece in chars.chunks(MAX_CHUNK_SIZE) {
                chunks.push(piece.iter().collect());
            }
        } else {
            current.push_str(segment);
        }
    }
    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks
}

fn escape_ssml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
