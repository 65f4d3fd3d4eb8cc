//! Per-line rejection and diagnostics models.
//!
//! A data line that cannot be coerced into an
//! [`EmployeeRecord`](super::EmployeeRecord) is never fatal. It is carried
//! alongside the accepted records as a [`RejectedLine`] so a presentation
//! layer can show what was skipped and why.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single data line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    /// The line split into fewer fields than a record needs.
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields {
        /// Number of fields required.
        expected: usize,
        /// Number of fields present.
        found: usize,
    },

    /// A money field is not a decimal number.
    #[error("{field} '{value}' is not a valid decimal number")]
    InvalidDecimal {
        /// Column name of the field.
        field: String,
        /// The raw token.
        value: String,
    },

    /// A money field parsed but is below zero.
    #[error("{field} '{value}' must not be negative")]
    NegativeAmount {
        /// Column name of the field.
        field: String,
        /// The raw token.
        value: String,
    },

    /// A money field exceeds [`MAX_AMOUNT`](super::MAX_AMOUNT).
    #[error("{field} '{value}' is too large")]
    AmountTooLarge {
        /// Column name of the field.
        field: String,
        /// The raw token.
        value: String,
    },

    /// An hour field is not a non-negative whole number.
    #[error("{field} '{value}' is not a valid whole number of hours")]
    InvalidInteger {
        /// Column name of the field.
        field: String,
        /// The raw token.
        value: String,
    },
}

/// A data line that was skipped, with its original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedLine {
    /// The trimmed source line.
    pub line: String,
    /// Why the line was rejected.
    pub reason: RejectReason,
}

/// Informational counters produced while parsing one input file.
///
/// These never influence computed results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Number of raw lines in the extracted text, header included.
    pub total_lines: usize,
    /// Number of lines that became records.
    pub accepted: usize,
    /// Lines that were skipped, in source order.
    pub rejected: Vec<RejectedLine>,
}
