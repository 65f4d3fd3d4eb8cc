//! HTTP request handlers for the deduction API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler receives the uploaded PDF as the raw request body.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::DeductionSummary;
use crate::report::{REPORT_COLUMNS, REPORT_MIME_TYPE, format_rows};

use super::request::ThresholdQuery;
use super::response::{
    ApiError, ApiErrorResponse, DeductionPreviewResponse, TimesheetPreviewResponse,
};
use super::state::AppState;

/// Header carrying the number of accepted rows on report downloads.
pub const ACCEPTED_ROWS_HEADER: &str = "x-accepted-rows";
/// Header carrying the number of rejected lines on report downloads.
pub const REJECTED_LINES_HEADER: &str = "x-rejected-lines";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheets/preview", post(timesheet_preview_handler))
        .route("/deductions/preview", post(deduction_preview_handler))
        .route("/deductions/report", post(deduction_report_handler))
        .with_state(state)
}

/// Handler for POST /timesheets/preview.
///
/// Returns the recovered dataset and the parse diagnostics.
async fn timesheet_preview_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing timesheet preview");

    if body.is_empty() {
        return ApiErrorResponse::bad_request(ApiError::empty_upload()).into_response();
    }

    match state.pipeline().load_document(&body) {
        Ok(loaded) => {
            info!(
                correlation_id = %correlation_id,
                accepted = loaded.diagnostics.accepted,
                rejected = loaded.diagnostics.rejected.len(),
                "Timesheet preview completed"
            );
            let response = TimesheetPreviewResponse {
                correlation_id,
                columns: loaded.dataset.columns().to_vec(),
                rows: loaded.dataset.rows_as_cells(),
                diagnostics: loaded.diagnostics,
                extracted_text_excerpt: loaded.text_excerpt,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Timesheet preview failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /deductions/preview.
///
/// Returns the formatted deduction rows exactly as they appear in the PDF.
async fn deduction_preview_handler(
    State(state): State<AppState>,
    query: Result<Query<ThresholdQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing deduction preview");

    let threshold = match resolve_threshold(&state, query, correlation_id) {
        Ok(threshold) => threshold,
        Err(response) => return response,
    };
    if body.is_empty() {
        return ApiErrorResponse::bad_request(ApiError::empty_upload()).into_response();
    }

    let pipeline = state.pipeline();
    let loaded = match pipeline.load_document(&body) {
        Ok(loaded) => loaded,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deduction preview failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let start_time = Instant::now();
    let calculated = pipeline
        .calculate(&loaded.dataset, threshold)
        .and_then(|results| DeductionSummary::from_results(&results).map(|s| (results, s)));
    let (results, summary) = match calculated {
        Ok(calculated) => calculated,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deduction preview failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    info!(
        correlation_id = %correlation_id,
        threshold_hours = threshold,
        employees = summary.employees,
        total_deduction = %summary.total_deduction,
        duration_us = start_time.elapsed().as_micros(),
        "Deduction preview completed"
    );

    let response = DeductionPreviewResponse {
        correlation_id,
        threshold_hours: threshold,
        columns: REPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: format_rows(&results),
        summary,
        diagnostics: loaded.diagnostics,
        generated_at: Utc::now(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Handler for POST /deductions/report.
///
/// Returns the PDF report as a download.
async fn deduction_report_handler(
    State(state): State<AppState>,
    query: Result<Query<ThresholdQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing deduction report");

    let threshold = match resolve_threshold(&state, query, correlation_id) {
        Ok(threshold) => threshold,
        Err(response) => return response,
    };
    if body.is_empty() {
        return ApiErrorResponse::bad_request(ApiError::empty_upload()).into_response();
    }

    let pipeline = state.pipeline();
    let start_time = Instant::now();
    let evaluation = match pipeline.evaluate(&body, Some(threshold)) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deduction report failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match pipeline.render(&evaluation.results) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                threshold_hours = evaluation.threshold_hours,
                rows = evaluation.results.len(),
                pages = report.page_count(),
                bytes = report.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Deduction report rendered"
            );
            let disposition = format!(
                "attachment; filename=\"{}\"",
                pipeline.config().report_file_name()
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE.as_str(), REPORT_MIME_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION.as_str(), disposition),
                    (
                        ACCEPTED_ROWS_HEADER,
                        evaluation.diagnostics.accepted.to_string(),
                    ),
                    (
                        REJECTED_LINES_HEADER,
                        evaluation.diagnostics.rejected.len().to_string(),
                    ),
                ],
                report.into_bytes(),
            )
                .into_response()
        }
        Err(err) => {
            // Results are computed; only the PDF failed.
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                rows = evaluation.results.len(),
                "Deduction report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Picks the request's threshold, or the configured default when absent.
fn resolve_threshold(
    state: &AppState,
    query: Result<Query<ThresholdQuery>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<u32, Response> {
    match query {
        Ok(Query(query)) => Ok(state.pipeline().threshold_or_default(query.threshold_hours)),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "Invalid query string");
            Err(ApiErrorResponse::bad_request(ApiError::invalid_query(body_text)).into_response())
        }
    }
}
