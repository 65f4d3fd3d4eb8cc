//! Calculation logic for the timesheet deduction engine.
//!
//! This module applies the threshold-hours policy to a dataset, producing
//! one [`DeductionResult`](crate::models::DeductionResult) per row.

mod deduction;

pub use deduction::{DEFAULT_THRESHOLD_HOURS, calculate_deduction, calculate_deductions};
