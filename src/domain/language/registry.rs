use lingua::Language;
use serde::{Deserialize, Serialize};

/// ISO 639-1 language codes the detection service recognizes.
///
/// The set is closed: the detector is built from exactly these languages, so
/// every detection outcome maps back to one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageCode {
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "ms")]
    Malay,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
}

impl LanguageCode {
    /// All supported languages in registration order. The order is part of the
    /// API contract: `GET /language/supported` returns entries in this order.
    pub const ALL: [LanguageCode; 18] = [
        LanguageCode::Chinese,
        LanguageCode::English,
        LanguageCode::Spanish,
        LanguageCode::Portuguese,
        LanguageCode::Arabic,
        LanguageCode::Russian,
        LanguageCode::French,
        LanguageCode::German,
        LanguageCode::Thai,
        LanguageCode::Vietnamese,
        LanguageCode::Indonesian,
        LanguageCode::Malay,
        LanguageCode::Turkish,
        LanguageCode::Italian,
        LanguageCode::Dutch,
        LanguageCode::Polish,
        LanguageCode::Japanese,
        LanguageCode::Korean,
    ];

    /// Get the ISO 639-1 code as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "zh",
            LanguageCode::English => "en",
            LanguageCode::Spanish => "es",
            LanguageCode::Portuguese => "pt",
            LanguageCode::Arabic => "ar",
            LanguageCode::Russian => "ru",
            LanguageCode::French => "fr",
            LanguageCode::German => "de",
            LanguageCode::Thai => "th",
            LanguageCode::Vietnamese => "vi",
            LanguageCode::Indonesian => "id",
            LanguageCode::Malay => "ms",
            LanguageCode::Turkish => "tr",
            LanguageCode::Italian => "it",
            LanguageCode::Dutch => "nl",
            LanguageCode::Polish => "pl",
            LanguageCode::Japanese => "ja",
            LanguageCode::Korean => "ko",
        }
    }

    /// English display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "Chinese",
            LanguageCode::English => "English",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::Portuguese => "Portuguese",
            LanguageCode::Arabic => "Arabic",
            LanguageCode::Russian => "Russian",
            LanguageCode::French => "French",
            LanguageCode::German => "German",
            LanguageCode::Thai => "Thai",
            LanguageCode::Vietnamese => "Vietnamese",
            LanguageCode::Indonesian => "Indonesian",
            LanguageCode::Malay => "Malay",
            LanguageCode::Turkish => "Turkish",
            LanguageCode::Italian => "Italian",
            LanguageCode::Dutch => "Dutch",
            LanguageCode::Polish => "Polish",
            LanguageCode::Japanese => "Japanese",
            LanguageCode::Korean => "Korean",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageCode::Chinese => "中文",
            LanguageCode::English => "English",
            LanguageCode::Spanish => "Español",
            LanguageCode::Portuguese => "Português",
            LanguageCode::Arabic => "العربية",
            LanguageCode::Russian => "Русский",
            LanguageCode::French => "Français",
            LanguageCode::German => "Deutsch",
            LanguageCode::Thai => "ไทย",
            LanguageCode::Vietnamese => "Tiếng Việt",
            LanguageCode::Indonesian => "Bahasa Indonesia",
            LanguageCode::Malay => "Bahasa Melayu",
            LanguageCode::Turkish => "Türkçe",
            LanguageCode::Italian => "Italiano",
            LanguageCode::Dutch => "Nederlands",
            LanguageCode::Polish => "Polski",
            LanguageCode::Japanese => "日本語",
            LanguageCode::Korean => "한국어",
        }
    }

    /// Look up a language by its ISO 639-1 code.
    /// Returns None for unknown codes, including the empty string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(LanguageCode::Chinese),
            "en" => Some(LanguageCode::English),
            "es" => Some(LanguageCode::Spanish),
            "pt" => Some(LanguageCode::Portuguese),
            "ar" => Some(LanguageCode::Arabic),
            "ru" => Some(LanguageCode::Russian),
            "fr" => Some(LanguageCode::French),
            "de" => Some(LanguageCode::German),
            "th" => Some(LanguageCode::Thai),
            "vi" => Some(LanguageCode::Vietnamese),
            "id" => Some(LanguageCode::Indonesian),
            "ms" => Some(LanguageCode::Malay),
            "tr" => Some(LanguageCode::Turkish),
            "it" => Some(LanguageCode::Italian),
            "nl" => Some(LanguageCode::Dutch),
            "pl" => Some(LanguageCode::Polish),
            "ja" => Some(LanguageCode::Japanese),
            "ko" => Some(LanguageCode::Korean),
            _ => None,
        }
    }

    /// Convert lingua Language to LanguageCode.
    ///
    /// Total because Cargo.toml enables exactly our language features, so the
    /// lingua enum has no other variants.
    pub fn from_lingua(language: Language) -> Self {
        match language {
            Language::Chinese => LanguageCode::Chinese,
            Language::English => LanguageCode::English,
            Language::Spanish => LanguageCode::Spanish,
            Language::Portuguese => LanguageCode::Portuguese,
            Language::Arabic => LanguageCode::Arabic,
            Language::Russian => LanguageCode::Russian,
            Language::French => LanguageCode::French,
            Language::German => LanguageCode::German,
            Language::Thai => LanguageCode::Thai,
            Language::Vietnamese => LanguageCode::Vietnamese,
            Language::Indonesian => LanguageCode::Indonesian,
            Language::Malay => LanguageCode::Malay,
            Language::Turkish => LanguageCode::Turkish,
            Language::Italian => LanguageCode::Italian,
            Language::Dutch => LanguageCode::Dutch,
            Language::Polish => LanguageCode::Polish,
            Language::Japanese => LanguageCode::Japanese,
            Language::Korean => LanguageCode::Korean,
        }
    }

    /// Convert to the lingua Language enum
    pub fn to_lingua(self) -> Language {
        match self {
            LanguageCode::Chinese => Language::Chinese,
            LanguageCode::English => Language::English,
            LanguageCode::Spanish => Language::Spanish,
            LanguageCode::Portuguese => Language::Portuguese,
            LanguageCode::Arabic => Language::Arabic,
            LanguageCode::Russian => Language::Russian,
            LanguageCode::French => Language::French,
            LanguageCode::German => Language::German,
            LanguageCode::Thai => Language::Thai,
            LanguageCode::Vietnamese => Language::Vietnamese,
            LanguageCode::Indonesian => Language::Indonesian,
            LanguageCode::Malay => Language::Malay,
            LanguageCode::Turkish => Language::Turkish,
            LanguageCode::Italian => Language::Italian,
            LanguageCode::Dutch => Language::Dutch,
            LanguageCode::Polish => Language::Polish,
            LanguageCode::Japanese => Language::Japanese,
            LanguageCode::Korean => Language::Korean,
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry entry exposed through GET /language/supported
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

impl From<LanguageCode> for SupportedLanguage {
    fn from(language: LanguageCode) -> Self {
        Self {
            code: language.as_str().to_string(),
            name: language.display_name().to_string(),
            native_name: language.native_name().to_string(),
        }
    }
}
