//! The rendered report artifact.

use std::io::Cursor;

/// Default suggested download file name for the report.
pub const REPORT_FILE_NAME: &str = "salary_deductions.pdf";

/// MIME type of the report.
pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// An in-memory PDF document ready for transmission.
///
/// The artifact is write-once: it is handed to the caller and not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    bytes: Vec<u8>,
    page_count: usize,
}

impl ReportArtifact {
    pub(crate) fn new(bytes: Vec<u8>, page_count: usize) -> Self {
        Self { bytes, page_count }
    }

    /// Returns the raw PDF bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the artifact, returning the raw PDF bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns a reader positioned at the start of the document.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.bytes.as_slice())
    }

    /// Returns the document size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the document has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the MIME type.
    pub fn mime_type(&self) -> &'static str {
        REPORT_MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_reader_starts_at_beginning() {
        let artifact = ReportArtifact::new(b"%PDF-1.5 body".to_vec(), 1);
        let mut reader = artifact.reader();
        assert_eq!(reader.position(), 0);

        let mut head = [0u8; 4];
        reader.read_exact(&mut head).unwrap();
        assert_eq!(&head, b"%PDF");
    }

    #[test]
    fn test_mime_type_and_length() {
        let artifact = ReportArtifact::new(vec![1, 2, 3], 1);
        assert_eq!(artifact.mime_type(), "application/pdf");
        assert_eq!(artifact.len(), 3);
        assert!(!artifact.is_empty());
    }
}
