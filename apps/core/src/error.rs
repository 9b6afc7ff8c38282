use thiserror::Error;

/// Crate-wide error type.
///
/// Classification itself never fails; these cover configuration,
/// parsing and serialization at the edges of the crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Represents data validation errors (e.g., unknown category, malformed JSON).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unreadable `.env`, bad log filter).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(err: dotenv::Error) -> Self {
        AppError::Config(format!("Environment file error: {}", err))
    }
}
