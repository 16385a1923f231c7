use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(#[from] i18n::StoreError),

    #[error("Editor error: {0}")]
    Editor(#[from] editor::EditorError),

    #[error("Invalid template override: {0}")]
    Template(#[from] trans::TemplateParseError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
