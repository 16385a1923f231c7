use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("operation was cancelled")]
    Cancelled,

    #[error("store task failed: {0}")]
    Task(String),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid translations file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown language: {0} (expected \"de\" or \"en\")")]
pub struct LanguageParseError(pub String);

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, StoreError>;
