use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{format} extraction failed: {message}")]
    ExtractionFailed { format: String, message: String },

    #[error("{format} file has no recoverable text layer")]
    NoTextLayer { format: String },

    #[error("No readable text runs found in binary content")]
    ExtractionEmpty,

    #[error("Document text is empty or too short to read (minimum {min_chars} characters)")]
    EmptyResult { min_chars: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExtractionError {
    pub fn failed(format: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::ExtractionFailed {
            format: format.into(),
            message: message.to_string(),
        }
    }

    pub fn no_text_layer(format: impl Into<String>) -> Self {
        Self::NoTextLayer {
            format: format.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
