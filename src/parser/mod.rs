//! Record parsing for extracted timesheet text.
//!
//! This module recovers [`EmployeeRecord`](crate::models::EmployeeRecord)s
//! from loosely delimited text: one header line followed by whitespace
//! separated data lines of at least eleven fields each.

mod line;
mod records;

pub use line::parse_line;
pub use records::{ParsedRecords, parse_records};
