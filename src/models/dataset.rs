//! Dataset model.
//!
//! A [`Dataset`] is the ordered table of accepted records for one input
//! file, together with its column headers. It is produced by
//! [`DatasetBuilder`](crate::dataset::DatasetBuilder) and is immutable
//! afterwards.

use serde::Serialize;

use super::EmployeeRecord;

/// Header of the name column.
pub const NAME_COLUMN: &str = "Name";
/// Header of the total salary column.
pub const TOTAL_SALARY_COLUMN: &str = "Total Salary";
/// Header of the hourly rate column.
pub const SALARY_PER_HOUR_COLUMN: &str = "Salary per hour";
/// Header of the total hours column.
pub const TOTAL_HOURS_COLUMN: &str = "Total Hours";

/// The full ordered table of accepted records for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<EmployeeRecord>,
}

impl Dataset {
    /// Creates a dataset. Callers guarantee `records` is non-empty.
    pub(crate) fn new(columns: Vec<String>, records: Vec<EmployeeRecord>) -> Self {
        Self { columns, records }
    }

    /// Returns the column headers in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in source order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no rows.
    ///
    /// Datasets built through the builder are never empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns every row as display cells aligned with [`Dataset::columns`].
    pub fn rows_as_cells(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| {
                let mut cells = Vec::with_capacity(self.columns.len());
                cells.push(record.name.clone());
                cells.push(record.total_salary.to_string());
                cells.push(record.salary_per_hour.to_string());
                cells.extend(record.daily_hours.iter().map(u32::to_string));
                cells.push(record.total_hours.to_string());
                cells
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn columns() -> Vec<String> {
        let mut columns = vec![
            NAME_COLUMN.to_string(),
            TOTAL_SALARY_COLUMN.to_string(),
            SALARY_PER_HOUR_COLUMN.to_string(),
        ];
        columns.extend((1..=7).map(|d| format!("D{}", d)));
        columns.push(TOTAL_HOURS_COLUMN.to_string());
        columns
    }

    #[test]
    fn test_rows_as_cells_align_with_columns() {
        let dataset = Dataset::new(
            columns(),
            vec![EmployeeRecord {
                name: "Alice".to_string(),
                total_salary: Decimal::new(200000, 2),
                salary_per_hour: Decimal::new(2500, 2),
                daily_hours: [8, 8, 8, 8, 8, 0, 0],
                total_hours: 40,
            }],
        );

        let rows = dataset.rows_as_cells();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), dataset.columns().len());
        assert_eq!(rows[0][0], "Alice");
        assert_eq!(rows[0][1], "2000.00");
        assert_eq!(rows[0][2], "25.00");
        assert_eq!(rows[0][9], "0");
        assert_eq!(rows[0][10], "40");
    }

    #[test]
    fn test_len_and_is_empty() {
        let dataset = Dataset::new(columns(), vec![]);
        assert_eq!(dataset.len(), 0);
        assert!(dataset.is_empty());
    }
}
