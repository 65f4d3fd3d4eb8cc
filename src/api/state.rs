//! Application state for the deduction API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::pipeline::TimesheetPipeline;

/// Shared application state.
///
/// Holds only immutable resources: the configured pipeline. Every request
/// parses, calculates and renders from scratch.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<TimesheetPipeline>,
}

impl AppState {
    /// Creates a new application state with the given pipeline.
    pub fn new(pipeline: TimesheetPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Returns a reference to the pipeline.
    pub fn pipeline(&self) -> &TimesheetPipeline {
        &self.pipeline
    }
}
