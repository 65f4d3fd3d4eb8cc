//! Threshold-hours deduction calculation.
//!
//! Employees who worked fewer hours than the run-wide threshold lose the
//! missing hours at their hourly rate. Employees at or above the threshold
//! keep their full salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Dataset, DeductionResult, EmployeeRecord};

/// Default threshold in hours when the caller supplies none.
pub const DEFAULT_THRESHOLD_HOURS: u32 = 40;

/// Calculates the deduction for every row of a dataset.
///
/// Returns one result per row in dataset order. This is a pure function of
/// its inputs.
///
/// # Errors
///
/// Returns `AmountOverflow` if a row's figures leave the `Decimal` range.
/// Parsed records are bounded by [`MAX_AMOUNT`](crate::models::MAX_AMOUNT),
/// which keeps every threshold in range.
///
/// # Examples
///
/// ```
/// use timesheet_deductions::calculation::calculate_deductions;
/// use timesheet_deductions::dataset::DatasetBuilder;
/// use timesheet_deductions::parser::parse_line;
/// use rust_decimal::Decimal;
///
/// let record = parse_line("Alice 2,000.00 25.00 8 8 8 8 8 0 0 40").unwrap();
/// let dataset = DatasetBuilder::default().build(vec![record], 2, 0).unwrap();
///
/// let results = calculate_deductions(&dataset, 45).unwrap();
/// assert_eq!(results[0].deduction, Decimal::new(12500, 2));
/// assert_eq!(results[0].final_salary, Decimal::new(187500, 2));
/// ```
pub fn calculate_deductions(
    dataset: &Dataset,
    threshold_hours: u32,
) -> EngineResult<Vec<DeductionResult>> {
    let results = dataset
        .records()
        .iter()
        .map(|record| calculate_deduction(record, threshold_hours))
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(
        rows = results.len(),
        threshold_hours,
        with_deduction = results.iter().filter(|r| r.has_deduction()).count(),
        "Calculated deductions"
    );

    Ok(results)
}

/// Calculates the deduction for a single record.
///
/// If `total_hours >= threshold_hours` the deduction is zero. Otherwise it
/// is `(threshold_hours - total_hours) * salary_per_hour`. The final salary
/// is not clamped and may be negative.
pub fn calculate_deduction(
    record: &EmployeeRecord,
    threshold_hours: u32,
) -> EngineResult<DeductionResult> {
    let worked_hours = record.total_hours;
    let overflow = || EngineError::AmountOverflow {
        context: format!("deduction for {}", record.name),
    };

    let deduction = if worked_hours >= threshold_hours {
        Decimal::ZERO
    } else {
        Decimal::from(threshold_hours - worked_hours)
            .checked_mul(record.salary_per_hour)
            .ok_or_else(overflow)?
    };
    let final_salary = record
        .total_salary
        .checked_sub(deduction)
        .ok_or_else(overflow)?;

    Ok(DeductionResult {
        name: record.name.clone(),
        total_salary: record.total_salary,
        worked_hours,
        threshold_hours,
        deduction,
        final_salary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetBuilder;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_record(name: &str, salary: &str, rate: &str, total_hours: u32) -> EmployeeRecord {
        EmployeeRecord {
            name: name.to_string(),
            total_salary: dec(salary),
            salary_per_hour: dec(rate),
            daily_hours: [0; 7],
            total_hours,
        }
    }

    #[test]
    fn test_at_threshold_no_deduction() {
        let record = create_record("Alice", "2000.00", "25.00", 40);
        let result = calculate_deduction(&record, 40).unwrap();

        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.final_salary, dec("2000.00"));
        assert_eq!(result.worked_hours, 40);
        assert_eq!(result.threshold_hours, 40);
    }

    #[test]
    fn test_below_threshold_deducts_missing_hours() {
        let record = create_record("Alice", "2000.00", "25.00", 40);
        let result = calculate_deduction(&record, 45).unwrap();

        assert_eq!(result.deduction, dec("125.00"));
        assert_eq!(result.final_salary, dec("1875.00"));
    }

    #[test]
    fn test_above_threshold_no_deduction() {
        let record = create_record("Bob", "1500.00", "10.00", 50);
        let result = calculate_deduction(&record, 40).unwrap();

        assert_eq!(result.deduction, Decimal::ZERO);
        assert_eq!(result.final_salary, dec("1500.00"));
    }

    #[test]
    fn test_zero_threshold_never_deducts() {
        let record = create_record("Bob", "1500.00", "10.00", 0);
        let result = calculate_deduction(&record, 0).unwrap();
        assert_eq!(result.deduction, Decimal::ZERO);
    }

    #[test]
    fn test_final_salary_not_clamped() {
        let record = create_record("Carol", "100.00", "50.00", 0);
        let result = calculate_deduction(&record, 40).unwrap();

        assert_eq!(result.deduction, dec("2000.00"));
        assert_eq!(result.final_salary, dec("-1900.00"));
    }

    #[test]
    fn test_fractional_rate() {
        let record = create_record("Dan", "1000.00", "12.345", 37);
        let result = calculate_deduction(&record, 40).unwrap();
        assert_eq!(result.deduction, dec("37.035"));
        assert_eq!(result.final_salary, dec("962.965"));
    }

    #[test]
    fn test_calculate_deductions_preserves_order() {
        let records = vec![
            create_record("Carol", "1000", "10", 30),
            create_record("Alice", "2000", "20", 45),
            create_record("Bob", "1500", "15", 39),
        ];
        let dataset = DatasetBuilder::default().build(records, 4, 0).unwrap();

        let results = calculate_deductions(&dataset, 40).unwrap();

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
        assert_eq!(results[0].deduction, dec("100"));
        assert_eq!(results[1].deduction, Decimal::ZERO);
        assert_eq!(results[2].deduction, dec("15"));
    }

    #[test]
    fn test_threshold_shared_across_rows() {
        let records = vec![
            create_record("Alice", "2000", "20", 10),
            create_record("Bob", "1500", "15", 20),
        ];
        let dataset = DatasetBuilder::default().build(records, 3, 0).unwrap();

        let results = calculate_deductions(&dataset, 25).unwrap();
        assert!(results.iter().all(|r| r.threshold_hours == 25));
    }

    #[test]
    fn test_rate_overflow_is_an_error() {
        let record = create_record("Zed", "1", "79228162514264337593543950335", 0);
        let result = calculate_deduction(&record, 40);

        assert!(matches!(
            result,
            Err(EngineError::AmountOverflow { ref context }) if context.contains("Zed")
        ));
    }

    #[test]
    fn test_largest_parsed_figures_stay_in_range() {
        let line = "Max 1e15 1e15 0 0 0 0 0 0 0 0";
        let record = crate::parser::parse_line(line).unwrap();

        let result = calculate_deduction(&record, u32::MAX).unwrap();
        assert_eq!(
            result.deduction,
            Decimal::from(u32::MAX) * crate::models::MAX_AMOUNT
        );
        assert!(result.final_salary < Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_deduction_policy_holds(
            salary_cents in 0i64..10_000_000,
            rate_cents in 0i64..100_000,
            worked in 0u32..200,
            threshold in 0u32..200,
        ) {
            let record = EmployeeRecord {
                name: "emp".to_string(),
                total_salary: Decimal::new(salary_cents, 2),
                salary_per_hour: Decimal::new(rate_cents, 2),
                daily_hours: [0; 7],
                total_hours: worked,
            };

            let result = calculate_deduction(&record, threshold).unwrap();

            prop_assert!(result.deduction >= Decimal::ZERO);
            if worked >= threshold {
                prop_assert_eq!(result.deduction, Decimal::ZERO);
            } else if rate_cents > 0 {
                prop_assert!(result.deduction > Decimal::ZERO);
            }
            prop_assert_eq!(result.final_salary, result.total_salary - result.deduction);
        }
    }
}
