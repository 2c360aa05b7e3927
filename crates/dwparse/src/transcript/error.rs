//! Error types for transcript extraction and parsing.

use thiserror::Error;

/// Errors that can occur while turning an uploaded report into a
/// structured transcript record.
#[derive(Debug, Error, Clone)]
pub enum TranscriptError {
    /// Every extraction stage came up empty
    #[error("No valid data could be extracted from the PDF")]
    NoDataExtracted,

    /// The upstream byte-to-text extraction failed
    #[error("Failed to parse DegreeWorks PDF: {message}")]
    ExtractionFailed { message: String },

    /// Zero-byte upload, rejected before decoding
    #[error("Uploaded document is empty")]
    EmptyDocument,
}

impl TranscriptError {
    /// Returns true if the failure came from decoding the document itself
    /// rather than from the extraction stages.
    pub fn is_upstream(&self) -> bool {
        matches!(self, TranscriptError::ExtractionFailed { .. })
    }
}

impl From<pdf_extract::OutputError> for TranscriptError {
    fn from(err: pdf_extract::OutputError) -> Self {
        TranscriptError::ExtractionFailed {
            message: err.to_string(),
        }
    }
}
