//! PDF text extraction.
//!
//! Extraction is a collaborator of the engine: the parser only needs a text
//! blob. [`TextExtractor`] is the seam, [`PdfTextExtractor`] the default
//! implementation backed by `pdf-extract`.

use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Turns an uploaded document into plain text.
pub trait TextExtractor: Send + Sync {
    /// Extracts the text of every page, concatenated in page order.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionFailed` if the document cannot be read.
    fn extract_text(&self, document: &[u8]) -> EngineResult<String>;
}

/// Extracts text from PDF bytes with `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, document: &[u8]) -> EngineResult<String> {
        // pdf-extract panics on some malformed inputs instead of erroring.
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(document))
            .map_err(|_| EngineError::ExtractionFailed {
                message: "extractor panicked on malformed document".to_string(),
            })?
            .map_err(|e| EngineError::ExtractionFailed {
                message: e.to_string(),
            })?;
        debug!(
            bytes = document.len(),
            chars = text.len(),
            "Extracted text from PDF"
        );
        Ok(text)
    }
}

/// Treats the uploaded bytes as UTF-8 text.
///
/// Useful for feeding already-extracted timesheet text through the same
/// pipeline, and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, document: &[u8]) -> EngineResult<String> {
        String::from_utf8(document.to_vec()).map_err(|e| EngineError::ExtractionFailed {
            message: format!("input is not valid UTF-8: {}", e),
        })
    }
}
