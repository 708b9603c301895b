use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Artifact syntax error: {0}")]
    Syntax(#[from] artifact_parser::SyntaxError),
    /// The upstream text stream failed.
    #[error("Stream source error: {0}")]
    Source(#[source] BoxedError),
    #[error("Message decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

pub type ChatResult<T> = Result<T, ChatError>;
