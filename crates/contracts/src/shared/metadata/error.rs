use thiserror::Error;

/// Errors raised while interpreting descriptor data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("unknown status '{value}' for model {model}")]
    UnknownStatus { model: &'static str, value: String },

    #[error("invalid migration date '{0}'")]
    InvalidDate(String),
}
