use serde::{Deserialize, Serialize};

/// A synthesis voice as reported by the provider catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub gender: String,
    /// Provider locale, e.g. "en-US"
    pub locale: String,
    /// Human-readable language name, e.g. "US English"
    pub language: String,
    /// Whether the provider's neural engine supports this voice
    pub neural: bool,
}

/// Voice search filters. Empty fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoiceFilter {
    /// ISO language prefix of the locale: "en" matches "en-US" and "en-GB"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl VoiceFilter {
    pub fn matches(&self, voice: &Voice) -> bool {
        if let Some(language) = &self.language {
            let prefix = voice.locale.split('-').next().unwrap_or("");
            if !prefix.eq_ignore_ascii_case(language) {
                return false;
            }
        }
        if let Some(locale) = &self.locale {
            if !voice.locale.eq_ignore_ascii_case(locale) {
                return false;
            }
        }
        if let Some(gender) = &self.gender {
            if !voice.gender.eq_ignore_ascii_case(gender) {
                return false;
            }
        }
        true
    }
}
