//! Timesheet Deduction Engine
//!
//! This crate reads weekly timesheet tables out of PDF documents, deducts pay
//! for every employee who worked fewer hours than a threshold, and renders the
//! results as a styled PDF report. The stages can be driven from the
//! [`pipeline`] module, the HTTP [`api`] or the command-line binary.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod report;
