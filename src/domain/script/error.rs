use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptServiceError {
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("script not found")]
    NotFound,
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ScriptServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Unauthorized(msg) => ScriptServiceError::MissingCredentials(msg),
            AppError::BadRequest(msg) => ScriptServiceError::Invalid(msg),
            AppError::NotFound(_) => ScriptServiceError::NotFound,
            _ => ScriptServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ScriptServiceError> for AppError {
    fn from(err: ScriptServiceError) -> Self {
        match err {
            ScriptServiceError::MissingCredentials(msg) => AppError::Unauthorized(msg),
            ScriptServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ScriptServiceError::NotFound => AppError::NotFound("Script not found".to_string()),
            ScriptServiceError::Dependency(msg) => AppError::ExternalService(msg),
            ScriptServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
