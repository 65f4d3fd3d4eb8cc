//! HTTP API module for the timesheet deduction engine.
//!
//! This module provides REST endpoints that take an uploaded timesheet PDF,
//! preview its recovered table, preview deductions, or download the
//! rendered deduction report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ACCEPTED_ROWS_HEADER, REJECTED_LINES_HEADER, create_router};
pub use request::ThresholdQuery;
pub use response::{ApiError, DeductionPreviewResponse, TimesheetPreviewResponse};
pub use state::AppState;
