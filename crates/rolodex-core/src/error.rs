use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),
    #[error("format must name at least one field")]
    EmptyFormat,
    #[error("catalog must contain at least one format")]
    EmptyCatalog,
    #[error("invalid format pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },
}
