//! Configuration types for deduction runs.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from `deductions.yaml`. Every field has a default, so an
//! empty file is a valid configuration.

use serde::Deserialize;

use crate::calculation::DEFAULT_THRESHOLD_HOURS;
use crate::dataset::default_day_labels;
use crate::report::REPORT_FILE_NAME;

/// Settings shared by every run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeductionConfig {
    /// Threshold applied when a caller does not supply one.
    pub threshold_hours: u32,
    /// Labels of the seven day columns, in order.
    pub day_labels: Vec<String>,
    /// Suggested download name of the rendered report.
    pub report_file_name: String,
}

impl Default for DeductionConfig {
    fn default() -> Self {
        Self {
            threshold_hours: DEFAULT_THRESHOLD_HOURS,
            day_labels: default_day_labels(),
            report_file_name: REPORT_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeductionConfig::default();
        assert_eq!(config.threshold_hours, 40);
        assert_eq!(config.day_labels.len(), 7);
        assert_eq!(config.day_labels[0], "1/09/2024");
        assert_eq!(config.report_file_name, "salary_deductions.pdf");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: DeductionConfig = serde_yaml::from_str("threshold_hours: 38\n").unwrap();
        assert_eq!(config.threshold_hours, 38);
        assert_eq!(config.day_labels, default_day_labels());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<DeductionConfig, _> = serde_yaml::from_str("threshhold: 38\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result: Result<DeductionConfig, _> = serde_yaml::from_str("threshold_hours: -1\n");
        assert!(result.is_err());
    }
}
