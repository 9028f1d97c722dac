use async_trait::async_trait;
use voicebox_backend::domain::tts::Voice;
use voicebox_backend::infrastructure::repositories::TtsRepository;

/// In-memory stand-in for the Polly repository with a fixed voice catalog
pub struct MockTtsRepository {
    voices: Vec<Voice>,
    fail_synthesis: bool,
}

impl MockTtsRepository {
    pub fn new() -> Self {
        Self {
            voices: default_catalog(),
            fail_synthesis: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            voices: default_catalog(),
            fail_synthesis: true,
        }
    }
}

#[async_trait]
impl TtsRepository for MockTtsRepository {
    async fn list_voices(&self) -> Result<Vec<Voice>, String> {
        Ok(self.voices.clone())
    }

    async fn synthesize(
        &self,
        text: &str,
        voice: &Voice,
        _speed: Option<f32>,
    ) -> Result<Vec<u8>, String> {
        if self.fail_synthesis {
            return Err("synthesis backend unavailable".to_string());
        }

        // Fake MP3 payload, sized by the input so callers can assert on it
        let mut audio = b"ID3".to_vec();
        audio.extend(voice.id.as_bytes());
        audio.extend(std::iter::repeat(0u8).take(text.len().min(64)));
        Ok(audio)
    }
}

fn voice(id: &str, gender: &str, locale: &str, language: &str, neural: bool) -> Voice {
    Voice {
        id: id.to_string(),
        name: id.to_string(),
        gender: gender.to_string(),
        locale: locale.to_string(),
        language: language.to_string(),
        neural,
    }
}

fn default_catalog() -> Vec<Voice> {
    vec![
        voice("Joanna", "Female", "en-US", "US English", true),
        voice("Matthew", "Male", "en-US", "US English", true),
        voice("Amy", "Female", "en-GB", "British English", true),
        voice("Lucia", "Female", "es-ES", "Castilian Spanish", true),
        voice("Celine", "Female", "fr-FR", "French", false),
        voice("Vicki", "Female", "de-DE", "German", true),
        voice("Zhiyu", "Female", "cmn-CN", "Chinese Mandarin", true),
        voice("Takumi", "Male", "ja-JP", "Japanese", true),
        voice("Seoyeon", "Female", "ko-KR", "Korean", true),
    ]
}
