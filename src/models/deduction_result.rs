//! Deduction result models.
//!
//! A [`DeductionResult`] is derived from one dataset row under a run-wide
//! threshold. Results are never persisted; they live for the duration of one
//! preview or render.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The computed deduction outcome for one employee.
///
/// # Example
///
/// ```
/// use timesheet_deductions::models::DeductionResult;
/// use rust_decimal::Decimal;
///
/// let result = DeductionResult {
///     name: "Alice".to_string(),
///     total_salary: Decimal::new(200000, 2),
///     worked_hours: 40,
///     threshold_hours: 45,
///     deduction: Decimal::new(12500, 2),
///     final_salary: Decimal::new(187500, 2),
/// };
/// assert!(result.has_deduction());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The employee name.
    pub name: String,
    /// Total salary before deduction.
    pub total_salary: Decimal,
    /// Hours worked, taken from the record's total hours.
    pub worked_hours: u32,
    /// The threshold applied to this run.
    pub threshold_hours: u32,
    /// Amount deducted for hours below the threshold.
    pub deduction: Decimal,
    /// Total salary minus the deduction. May be negative.
    pub final_salary: Decimal,
}

impl DeductionResult {
    /// Returns true if any amount was deducted.
    pub fn has_deduction(&self) -> bool {
        self.deduction > Decimal::ZERO
    }

    /// Returns the hours short of the threshold, or zero.
    pub fn shortfall_hours(&self) -> u32 {
        self.threshold_hours.saturating_sub(self.worked_hours)
    }
}

/// Aggregated totals over one run's results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    /// Number of employees in the run.
    pub employees: usize,
    /// Number of employees with a non-zero deduction.
    pub employees_with_deduction: usize,
    /// Sum of total salaries.
    pub total_salary: Decimal,
    /// Sum of deductions.
    pub total_deduction: Decimal,
    /// Sum of final salaries.
    pub total_final_salary: Decimal,
}

impl DeductionSummary {
    /// Totals a slice of results.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a total leaves the `Decimal` range.
    pub fn from_results(results: &[DeductionResult]) -> EngineResult<Self> {
        results.iter().try_fold(Self::default(), |mut summary, result| {
            summary.employees += 1;
            if result.has_deduction() {
                summary.employees_with_deduction += 1;
            }
            summary.total_salary = add(summary.total_salary, result.total_salary, "total salary")?;
            summary.total_deduction =
                add(summary.total_deduction, result.deduction, "total deduction")?;
            summary.total_final_salary = add(
                summary.total_final_salary,
                result.final_salary,
                "total final salary",
            )?;
            Ok(summary)
        })
    }
}

fn add(total: Decimal, value: Decimal, context: &str) -> EngineResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| EngineError::AmountOverflow {
            context: context.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_result(name: &str, worked: u32, deduction: &str, salary: &str) -> DeductionResult {
        DeductionResult {
            name: name.to_string(),
            total_salary: dec(salary),
            worked_hours: worked,
            threshold_hours: 40,
            deduction: dec(deduction),
            final_salary: dec(salary) - dec(deduction),
        }
    }

    #[test]
    fn test_shortfall_hours_below_threshold() {
        let result = create_result("Alice", 35, "125.00", "2000.00");
        assert_eq!(result.shortfall_hours(), 5);
        assert!(result.has_deduction());
    }

    #[test]
    fn test_shortfall_hours_above_threshold_is_zero() {
        let result = create_result("Alice", 50, "0", "2000.00");
        assert_eq!(result.shortfall_hours(), 0);
        assert!(!result.has_deduction());
    }

    #[test]
    fn test_summary_totals_results() {
        let results = vec![
            create_result("Alice", 35, "125.00", "2000.00"),
            create_result("Bob", 40, "0", "1500.00"),
        ];

        let summary = DeductionSummary::from_results(&results).unwrap();

        assert_eq!(summary.employees, 2);
        assert_eq!(summary.employees_with_deduction, 1);
        assert_eq!(summary.total_salary, dec("3500.00"));
        assert_eq!(summary.total_deduction, dec("125.00"));
        assert_eq!(summary.total_final_salary, dec("3375.00"));
    }

    #[test]
    fn test_summary_of_no_results_is_zero() {
        let summary = DeductionSummary::from_results(&[]).unwrap();
        assert_eq!(summary, DeductionSummary::default());
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        let large = Decimal::from_scientific("5e28").unwrap();
        let results: Vec<DeductionResult> = ["Ann", "Ben"]
            .iter()
            .map(|name| DeductionResult {
                name: name.to_string(),
                total_salary: large,
                worked_hours: 40,
                threshold_hours: 40,
                deduction: Decimal::ZERO,
                final_salary: large,
            })
            .collect();

        let summary = DeductionSummary::from_results(&results);
        assert!(matches!(
            summary,
            Err(EngineError::AmountOverflow { ref context }) if context == "total salary"
        ));
    }
}
