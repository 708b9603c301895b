use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyntaxError {
    /// The tag name is empty or contains characters that cannot appear in a
    /// tag name.
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),
    /// The tag patterns failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;
