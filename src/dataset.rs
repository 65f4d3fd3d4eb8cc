//! Dataset assembly.
//!
//! The [`DatasetBuilder`] owns the column schema. Day column labels are
//! supplied when the builder is constructed, usually from
//! [`DeductionConfig::day_labels`](crate::config::DeductionConfig).

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DAYS_PER_WEEK, Dataset, EmployeeRecord, NAME_COLUMN, SALARY_PER_HOUR_COLUMN,
    TOTAL_HOURS_COLUMN, TOTAL_SALARY_COLUMN,
};

/// Builds [`Dataset`]s with a fixed column schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetBuilder {
    day_labels: Vec<String>,
}

impl DatasetBuilder {
    /// Creates a builder with the given day column labels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless exactly seven labels are given.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_deductions::dataset::DatasetBuilder;
    ///
    /// let labels: Vec<String> = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    /// let builder = DatasetBuilder::new(labels).unwrap();
    /// assert_eq!(builder.columns()[3], "Mon");
    ///
    /// assert!(DatasetBuilder::new(vec!["Mon".to_string()]).is_err());
    /// ```
    pub fn new(day_labels: Vec<String>) -> EngineResult<Self> {
        if day_labels.len() != DAYS_PER_WEEK {
            return Err(EngineError::InvalidConfig {
                field: "day_labels".to_string(),
                message: format!(
                    "expected {} labels, got {}",
                    DAYS_PER_WEEK,
                    day_labels.len()
                ),
            });
        }
        Ok(Self { day_labels })
    }

    /// Returns the day column labels.
    pub fn day_labels(&self) -> &[String] {
        &self.day_labels
    }

    /// Returns the full column header list.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(DAYS_PER_WEEK + 4);
        columns.push(NAME_COLUMN.to_string());
        columns.push(TOTAL_SALARY_COLUMN.to_string());
        columns.push(SALARY_PER_HOUR_COLUMN.to_string());
        columns.extend(self.day_labels.iter().cloned());
        columns.push(TOTAL_HOURS_COLUMN.to_string());
        columns
    }

    /// Assembles records into a dataset, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` when `records` is empty. `total_lines` and
    /// `rejected` are carried into the error for the caller's message.
    pub fn build(
        &self,
        records: Vec<EmployeeRecord>,
        total_lines: usize,
        rejected: usize,
    ) -> EngineResult<Dataset> {
        if records.is_empty() {
            return Err(EngineError::EmptyDataset {
                total_lines,
                rejected,
            });
        }

        debug!(rows = records.len(), "Built dataset");
        Ok(Dataset::new(self.columns(), records))
    }
}

impl Default for DatasetBuilder {
    /// Labels the seven day columns `1/09/2024` through `7/09/2024`.
    fn default() -> Self {
        Self {
            day_labels: default_day_labels(),
        }
    }
}

/// The day labels used when no configuration overrides them.
pub fn default_day_labels() -> Vec<String> {
    (1..=DAYS_PER_WEEK).map(|day| format!("{}/09/2024", day)).collect()
}
