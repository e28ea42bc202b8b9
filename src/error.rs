//! Error handling for the skill gap analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillGapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Model artifact error: {0}")]
    ModelArtifact(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillGapError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillGapError {
    fn from(err: anyhow::Error) -> Self {
        SkillGapError::InvalidInput(err.to_string())
    }
}
