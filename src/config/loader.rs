//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading deduction
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::dataset::DatasetBuilder;
use crate::error::{EngineError, EngineResult};
use crate::models::DAYS_PER_WEEK;

use super::types::DeductionConfig;

/// Name of the settings file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "deductions.yaml";

/// Loads and provides access to deduction settings.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── deductions.yaml   # threshold_hours, day_labels, report_file_name
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_deductions::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Default threshold: {} hours", loader.threshold_hours());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DeductionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `deductions.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML for [`DeductionConfig`] (`ConfigParseError`)
    /// - a value is unusable, such as the wrong number of day labels (`InvalidConfig`)
    ///
    /// An empty file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = if content.trim().is_empty() {
            DeductionConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?
        };

        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: DeductionConfig) -> EngineResult<Self> {
        if config.day_labels.len() != DAYS_PER_WEEK {
            return Err(EngineError::InvalidConfig {
                field: "day_labels".to_string(),
                message: format!(
                    "expected {} labels, got {}",
                    DAYS_PER_WEEK,
                    config.day_labels.len()
                ),
            });
        }
        if config.report_file_name.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "report_file_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &DeductionConfig {
        &self.config
    }

    /// Returns the default threshold in hours.
    pub fn threshold_hours(&self) -> u32 {
        self.config.threshold_hours
    }

    /// Returns the suggested report file name.
    pub fn report_file_name(&self) -> &str {
        &self.config.report_file_name
    }

    /// Creates a dataset builder with the configured day labels.
    pub fn dataset_builder(&self) -> EngineResult<DatasetBuilder> {
        DatasetBuilder::new(self.config.day_labels.clone())
    }
}
