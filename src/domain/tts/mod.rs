pub mod error;
pub mod service;
pub mod voice;

pub use error::TtsServiceError;
pub use service::{SynthesisResult, TtsService, TtsServiceApi, VoiceSearch};
pub use voice::{Voice, VoiceFilter};
