//! Single-line tokenization and field coercion.
//!
//! [`parse_line`] turns one trimmed data line into an [`EmployeeRecord`] or
//! reports the first field that failed. Bad lines are an expected, frequent
//! outcome, so they come back as a plain `Result` rather than an
//! [`EngineError`](crate::error::EngineError).

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{
    DAYS_PER_WEEK, EmployeeRecord, FIELDS_PER_LINE, MAX_AMOUNT, RejectReason,
    SALARY_PER_HOUR_COLUMN, TOTAL_HOURS_COLUMN, TOTAL_SALARY_COLUMN,
};

/// Parses one data line into a record.
///
/// Tokens are split on runs of whitespace. The first eleven tokens are
/// coerced in column order; any further tokens are ignored.
///
/// # Examples
///
/// ```
/// use timesheet_deductions::parser::parse_line;
/// use rust_decimal::Decimal;
///
/// let record = parse_line("Alice 2,000.00 25.00 8 8 8 8 8 0 0 40").unwrap();
/// assert_eq!(record.name, "Alice");
/// assert_eq!(record.total_salary, Decimal::new(200000, 2));
/// assert_eq!(record.daily_hours, [8, 8, 8, 8, 8, 0, 0]);
/// assert_eq!(record.total_hours, 40);
///
/// assert!(parse_line("Bob notanumber 10 1 1 1 1 1 1 1 7").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<EmployeeRecord, RejectReason> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < FIELDS_PER_LINE {
        return Err(RejectReason::TooFewFields {
            expected: FIELDS_PER_LINE,
            found: tokens.len(),
        });
    }

    let name = tokens[0].to_string();
    let total_salary = parse_amount(tokens[1], TOTAL_SALARY_COLUMN)?;
    let salary_per_hour = parse_amount(tokens[2], SALARY_PER_HOUR_COLUMN)?;

    let mut daily_hours = [0u32; DAYS_PER_WEEK];
    for (day, token) in tokens[3..3 + DAYS_PER_WEEK].iter().enumerate() {
        daily_hours[day] = parse_hours(token, &format!("Day {}", day + 1))?;
    }

    let total_hours = parse_hours(tokens[3 + DAYS_PER_WEEK], TOTAL_HOURS_COLUMN)?;

    Ok(EmployeeRecord {
        name,
        total_salary,
        salary_per_hour,
        daily_hours,
        total_hours,
    })
}

/// Parses a money token, stripping thousands separators first.
///
/// Accepts plain (`1875.50`) and scientific (`1.8755e3`) notation up to
/// [`MAX_AMOUNT`].
fn parse_amount(token: &str, field: &str) -> Result<Decimal, RejectReason> {
    let cleaned = token.replace(',', "");
    let value = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| RejectReason::InvalidDecimal {
            field: field.to_string(),
            value: token.to_string(),
        })?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(RejectReason::NegativeAmount {
            field: field.to_string(),
            value: token.to_string(),
        });
    }
    if value > MAX_AMOUNT {
        return Err(RejectReason::AmountTooLarge {
            field: field.to_string(),
            value: token.to_string(),
        });
    }

    Ok(value)
}

/// Parses an hour token as a non-negative whole number.
fn parse_hours(token: &str, field: &str) -> Result<u32, RejectReason> {
    u32::from_str(token).map_err(|_| RejectReason::InvalidInteger {
        field: field.to_string(),
        value: token.to_string(),
    })
}
