use i18n::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("select text for the link first")]
    NoLinkText,

    #[error("select text for the explanation first")]
    NoExplanationText,

    #[error("link URL is empty")]
    EmptyUrl,

    #[error("explanation text is empty")]
    EmptyExplanation,

    #[error("explanations cannot be added while editing explanations")]
    ExplainNamespace,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Content key of the localized message for this error, if the demo
    /// bundles one.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            EditorError::NoLinkText => Some("editor.select-link-text"),
            EditorError::NoExplanationText => Some("editor.select-explanation-text"),
            EditorError::Store(_) => Some("editor.save-failed"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
