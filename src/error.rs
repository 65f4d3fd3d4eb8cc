//! Error types for the timesheet deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a pipeline run. Per-line parse failures
//! are not errors; they are reported as [`crate::models::RejectedLine`]
//! values instead.

use thiserror::Error;

/// The main error type for the timesheet deduction engine.
///
/// # Example
///
/// ```
/// use timesheet_deductions::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/deductions.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/deductions.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// The text extraction collaborator failed.
    #[error("Failed to extract text from PDF: {message}")]
    ExtractionFailed {
        /// The message reported by the extractor.
        message: String,
    },

    /// No data line survived parsing.
    #[error(
        "No valid data found in the PDF ({total_lines} lines read, {rejected} rejected). \
         Please check the file format."
    )]
    EmptyDataset {
        /// Number of raw lines in the extracted text.
        total_lines: usize,
        /// Number of data lines that were rejected.
        rejected: usize,
    },

    /// A money calculation left the representable range.
    #[error("Amount out of range while computing {context}")]
    AmountOverflow {
        /// What was being computed, such as the employee name or total.
        context: String,
    },

    /// The PDF document could not be built.
    #[error("Error creating PDF: {message}")]
    RenderError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/deductions.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/deductions.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/deductions.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/deductions.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "day_labels".to_string(),
            message: "expected 7 labels, got 5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'day_labels': expected 7 labels, got 5"
        );
    }

    #[test]
    fn test_empty_dataset_displays_counts() {
        let error = EngineError::EmptyDataset {
            total_lines: 4,
            rejected: 2,
        };
        assert_eq!(
            error.to_string(),
            "No valid data found in the PDF (4 lines read, 2 rejected). \
             Please check the file format."
        );
    }

    #[test]
    fn test_amount_overflow_displays_context() {
        let error = EngineError::AmountOverflow {
            context: "total deduction".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Amount out of range while computing total deduction"
        );
    }

    #[test]
    fn test_render_error_displays_message() {
        let error = EngineError::RenderError {
            message: "stream encoding failed".to_string(),
        };
        assert_eq!(error.to_string(), "Error creating PDF: stream encoding failed");
    }

    #[test]
    fn test_extraction_failed_displays_message() {
        let error = EngineError::ExtractionFailed {
            message: "not a PDF".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to extract text from PDF: not a PDF"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_dataset() -> EngineResult<()> {
            Err(EngineError::EmptyDataset {
                total_lines: 1,
                rejected: 0,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_dataset()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
