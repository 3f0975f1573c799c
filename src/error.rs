use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdinetError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    #[error("File not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<quick_xml::Error> for EdinetError {
    fn from(error: quick_xml::Error) -> Self {
        EdinetError::MalformedXml(error.to_string())
    }
}

#[cfg(feature = "archive")]
impl From<zip::result::ZipError> for EdinetError {
    fn from(error: zip::result::ZipError) -> Self {
        EdinetError::ArchiveError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EdinetError>;
