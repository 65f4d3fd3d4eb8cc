//! Core data models for the timesheet deduction engine.
//!
//! This module contains all the domain models passed between pipeline stages.

mod dataset;
mod deduction_result;
mod employee_record;
mod rejection;

pub use dataset::{
    Dataset, NAME_COLUMN, SALARY_PER_HOUR_COLUMN, TOTAL_HOURS_COLUMN, TOTAL_SALARY_COLUMN,
};
pub use deduction_result::{DeductionResult, DeductionSummary};
pub use employee_record::{DAYS_PER_WEEK, EmployeeRecord, FIELDS_PER_LINE, MAX_AMOUNT};
pub use rejection::{Diagnostics, RejectReason, RejectedLine};
