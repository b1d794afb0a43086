use thiserror::Error;

pub type EmbedResult<T> = Result<T, EmbedError>;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("unknown component `{0}`")]
    UnknownComponent(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
