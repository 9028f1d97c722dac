use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum LanguageServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("detection failed: {0}")]
    Detection(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<LanguageServiceError> for AppError {
    fn from(err: LanguageServiceError) -> Self {
        match err {
            LanguageServiceError::Invalid(msg) => AppError::BadRequest(msg),
            LanguageServiceError::Detection(msg) => AppError::Internal(msg),
            LanguageServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
