//! Upstream boundary: PDF byte stream to flattened text.
//!
//! The extractor concatenates all text runs in document order with no
//! attempt to reconstruct visual layout, so downstream parsing must not
//! rely on column or row structure.

use super::error::TranscriptError;
use tracing::{debug, info};

/// Extracts the full text content of a PDF held in memory.
///
/// # Arguments
/// * `bytes` - Raw PDF byte stream
///
/// # Returns
/// * `Ok(String)` - Concatenated text of all pages
/// * `Err(TranscriptError::ExtractionFailed)` - If the byte stream cannot be decoded
pub fn extract_text(bytes: &[u8]) -> Result<String, TranscriptError> {
    if bytes.is_empty() {
        return Err(TranscriptError::EmptyDocument);
    }

    info!("Extracting text from PDF ({} bytes)", bytes.len());

    let text = pdf_extract::extract_text_from_mem(bytes)?;

    debug!("Extracted {} characters of flattened text", text.len());

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            extract_text(&[]),
            Err(TranscriptError::EmptyDocument)
        ));
    }

    #[test]
    fn test_garbage_bytes_fail_as_upstream_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(err.is_upstream());
        assert!(err
            .to_string()
            .starts_with("Failed to parse DegreeWorks PDF:"));
    }
}
