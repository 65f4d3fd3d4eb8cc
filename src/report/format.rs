//! Display formatting of deduction results.
//!
//! A [`ReportRow`] is formatted once and then used verbatim by both the
//! on-screen preview and the PDF body.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::DeductionResult;

/// Column headers of the deduction report, in display order.
pub const REPORT_COLUMNS: [&str; 6] = [
    "Name",
    "Total Salary",
    "Worked Hours",
    "Threshold Hours",
    "Deduction",
    "Final Salary",
];

/// One formatted row of the deduction report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// The employee name.
    pub name: String,
    /// Total salary with two decimal places.
    pub total_salary: String,
    /// Worked hours as a whole number.
    pub worked_hours: String,
    /// Threshold hours as a whole number.
    pub threshold_hours: String,
    /// Deduction with two decimal places.
    pub deduction: String,
    /// Final salary with two decimal places.
    pub final_salary: String,
}

impl ReportRow {
    /// Returns the cells in [`REPORT_COLUMNS`] order.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.name,
            &self.total_salary,
            &self.worked_hours,
            &self.threshold_hours,
            &self.deduction,
            &self.final_salary,
        ]
    }
}

impl From<&DeductionResult> for ReportRow {
    fn from(result: &DeductionResult) -> Self {
        Self {
            name: result.name.clone(),
            total_salary: format_money(result.total_salary),
            worked_hours: result.worked_hours.to_string(),
            threshold_hours: result.threshold_hours.to_string(),
            deduction: format_money(result.deduction),
            final_salary: format_money(result.final_salary),
        }
    }
}

/// Formats every result, preserving order.
pub fn format_rows(results: &[DeductionResult]) -> Vec<ReportRow> {
    results.iter().map(ReportRow::from).collect()
}

/// Formats a money amount with exactly two decimal places.
///
/// Midpoints round away from zero.
///
/// # Examples
///
/// ```
/// use timesheet_deductions::report::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(2000, 0)), "2000.00");
/// assert_eq!(format_money(Decimal::new(12345, 3)), "12.35");
/// assert_eq!(format_money(Decimal::new(-190000, 2)), "-1900.00");
/// ```
pub fn format_money(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}
