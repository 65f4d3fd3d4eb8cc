//! Configuration loading and management for the timesheet deduction engine.
//!
//! This module loads run settings (default threshold, day column labels and
//! report file name) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_deductions::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Threshold: {} hours", config.threshold_hours());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::DeductionConfig;
