//! Error handling for the placement matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, PlacementError>;

impl PlacementError {
    pub fn profile_not_found(id: u64) -> Self {
        PlacementError::NotFound(format!("profile {}", id))
    }

    pub fn posting_not_found(id: u64) -> Self {
        PlacementError::NotFound(format!("posting {}", id))
    }
}
