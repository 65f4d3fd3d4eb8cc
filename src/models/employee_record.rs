//! Employee record model.
//!
//! An [`EmployeeRecord`] is one fully-validated data line of a timesheet
//! export: a name, two salary figures, one hour count per day of the week
//! and the reported weekly total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of day columns in a timesheet week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of whitespace-separated fields a data line must carry.
///
/// Name, total salary, salary per hour, one field per day and the total.
pub const FIELDS_PER_LINE: usize = 3 + DAYS_PER_WEEK + 1;

/// Largest accepted salary figure (10^15).
///
/// Keeps `hours * rate` and per-run totals well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// One employee's parsed row of salary and daily-hour data.
///
/// `total_hours` is taken verbatim from the source line. It is not checked
/// against the sum of `daily_hours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee name (first token of the line).
    pub name: String,
    /// Total salary for the period.
    pub total_salary: Decimal,
    /// Hourly rate used to price missing hours.
    pub salary_per_hour: Decimal,
    /// Hours worked on each day of the week, in column order.
    pub daily_hours: [u32; DAYS_PER_WEEK],
    /// Total hours reported for the week.
    pub total_hours: u32,
}

impl EmployeeRecord {
    /// Returns the sum of the per-day hour columns.
    ///
    /// This is informational; deduction uses `total_hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_deductions::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     name: "Alice".to_string(),
    ///     total_salary: Decimal::new(200000, 2),
    ///     salary_per_hour: Decimal::new(2500, 2),
    ///     daily_hours: [8, 8, 8, 8, 8, 0, 0],
    ///     total_hours: 40,
    /// };
    /// assert_eq!(record.daily_hours_sum(), 40);
    /// ```
    pub fn daily_hours_sum(&self) -> u32 {
        self.daily_hours.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(daily_hours: [u32; DAYS_PER_WEEK], total_hours: u32) -> EmployeeRecord {
        EmployeeRecord {
            name: "Alice".to_string(),
            total_salary: Decimal::new(200000, 2),
            salary_per_hour: Decimal::new(2500, 2),
            daily_hours,
            total_hours,
        }
    }

    #[test]
    fn test_fields_per_line_is_eleven() {
        assert_eq!(FIELDS_PER_LINE, 11);
    }

    #[test]
    fn test_daily_hours_sum_ignores_reported_total() {
        let record = create_test_record([1, 1, 1, 1, 1, 1, 1], 40);
        assert_eq!(record.daily_hours_sum(), 7);
        assert_eq!(record.total_hours, 40);
    }

    #[test]
    fn test_serialize_record_uses_string_decimals() {
        let record = create_test_record([8, 8, 8, 8, 8, 0, 0], 40);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Alice");
        assert_eq!(json["total_salary"], "2000.00");
        assert_eq!(json["salary_per_hour"], "25.00");
        assert_eq!(json["daily_hours"], serde_json::json!([8, 8, 8, 8, 8, 0, 0]));
        assert_eq!(json["total_hours"], 40);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "name": "Bob",
            "total_salary": "1500.50",
            "salary_per_hour": "12.25",
            "daily_hours": [0, 4, 4, 4, 4, 0, 0],
            "total_hours": 16
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Bob");
        assert_eq!(record.total_salary, Decimal::new(150050, 2));
        assert_eq!(record.salary_per_hour, Decimal::new(1225, 2));
        assert_eq!(record.total_hours, 16);
    }
}
