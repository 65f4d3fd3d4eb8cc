//! Response types for the deduction API.
//!
//! This module defines the JSON response bodies, the error response
//! structure and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{DeductionSummary, Diagnostics};
use crate::report::ReportRow;

/// Response body of `POST /timesheets/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetPreviewResponse {
    /// Identifier for correlating logs with this request.
    pub correlation_id: Uuid,
    /// Dataset column headers.
    pub columns: Vec<String>,
    /// Dataset rows as display cells.
    pub rows: Vec<Vec<String>>,
    /// Line counts and rejected lines.
    pub diagnostics: Diagnostics,
    /// The start of the text extracted from the PDF.
    pub extracted_text_excerpt: String,
}

/// Response body of `POST /deductions/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionPreviewResponse {
    /// Identifier for correlating logs with this request.
    pub correlation_id: Uuid,
    /// The threshold that was applied.
    pub threshold_hours: u32,
    /// Report column headers.
    pub columns: Vec<String>,
    /// Formatted result rows, identical to the PDF body.
    pub rows: Vec<ReportRow>,
    /// Totals over all rows.
    pub summary: DeductionSummary,
    /// Line counts and rejected lines.
    pub diagnostics: Diagnostics,
    /// When the preview was computed.
    pub generated_at: DateTime<Utc>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query parameter error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_QUERY",
            message,
            "threshold_hours must be a non-negative whole number",
        )
    }

    /// Creates an empty upload error response.
    pub fn empty_upload() -> Self {
        Self::new("EMPTY_UPLOAD", "Request body must contain a PDF document")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::ExtractionFailed { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EXTRACTION_FAILED",
                    message,
                    "The uploaded file could not be read as a PDF",
                ),
            },
            EngineError::EmptyDataset { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "EMPTY_DATASET",
                    message,
                    "Expected a header line followed by lines of name, total salary, \
                     salary per hour, seven daily hours and total hours",
                ),
            },
            EngineError::AmountOverflow { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    message,
                    "Salary figures are too large to total",
                ),
            },
            EngineError::RenderError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RENDER_ERROR",
                    message,
                    "The deduction results were computed; the request can be retried",
                ),
            },
        }
    }
}
