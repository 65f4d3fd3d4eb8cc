//! Batch parsing of extracted timesheet text.

use tracing::{debug, warn};

use crate::models::{Diagnostics, EmployeeRecord, RejectedLine};

use super::line::parse_line;

/// The outcome of parsing one extracted text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecords {
    /// Accepted records in source line order.
    pub records: Vec<EmployeeRecord>,
    /// Rejected data lines in source line order.
    pub rejected: Vec<RejectedLine>,
    /// Number of raw lines in the text, header included.
    pub total_lines: usize,
}

impl ParsedRecords {
    /// Returns the informational counters for this parse.
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            total_lines: self.total_lines,
            accepted: self.records.len(),
            rejected: self.rejected.clone(),
        }
    }
}

/// Parses every data line of an extracted timesheet.
///
/// The first line is always treated as a header and dropped, whatever it
/// contains. Remaining lines are trimmed and blank ones skipped. Each data
/// line either becomes a record or is collected as a [`RejectedLine`]; one
/// bad line never stops the batch.
///
/// An empty `records` vector is not an error here. The dataset builder
/// decides that.
///
/// # Examples
///
/// ```
/// use timesheet_deductions::parser::parse_records;
///
/// let text = "Name TotalSalary Rate D1 D2 D3 D4 D5 D6 D7 Total\n\
///             Alice 2,000.00 25.00 8 8 8 8 8 0 0 40\n\
///             Bob notanumber 10 1 1 1 1 1 1 1 7\n";
/// let parsed = parse_records(text);
///
/// assert_eq!(parsed.records.len(), 1);
/// assert_eq!(parsed.rejected.len(), 1);
/// assert_eq!(parsed.total_lines, 4);
/// ```
pub fn parse_records(raw_text: &str) -> ParsedRecords {
    let lines: Vec<&str> = raw_text.split('\n').collect();
    let total_lines = lines.len();

    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for line in lines.iter().skip(1).map(|l| l.trim()).filter(|l| !l.is_empty()) {
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(line = %line, reason = %reason, "Skipping invalid data line");
                rejected.push(RejectedLine {
                    line: line.to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        total_lines,
        accepted = records.len(),
        rejected = rejected.len(),
        "Parsed timesheet text"
    );

    ParsedRecords {
        records,
        rejected,
        total_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RejectReason;
    use proptest::prelude::*;

    const HEADER: &str = "Name TotalSalary Rate D1 D2 D3 D4 D5 D6 D7 Total";

    #[test]
    fn test_header_dropped_even_when_it_parses() {
        let text = "Zed 100 10 1 1 1 1 1 1 1 7\nAlice 2,000.00 25.00 8 8 8 8 8 0 0 40";
        let parsed = parse_records(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].name, "Alice");
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_header_line_never_rejected() {
        let parsed = parse_records(&format!("{}\nAlice 100 10 1 1 1 1 1 1 1 7", HEADER));
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped_silently() {
        let text = format!("{}\n\n   \n\t\nAlice 100 10 1 1 1 1 1 1 1 7\n\n", HEADER);
        let parsed = parse_records(&text);

        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.total_lines, 7);
    }

    #[test]
    fn test_bad_line_does_not_abort_batch() {
        let text = format!(
            "{}\nAlice 2,000.00 25.00 8 8 8 8 8 0 0 40\nBob notanumber 10 1 1 1 1 1 1 1 7\nCarol 1500 15 8 8 8 8 0 0 0 32",
            HEADER
        );
        let parsed = parse_records(&text);

        let names: Vec<&str> = parsed.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line, "Bob notanumber 10 1 1 1 1 1 1 1 7");
        assert!(matches!(
            parsed.rejected[0].reason,
            RejectReason::InvalidDecimal { .. }
        ));
    }

    #[test]
    fn test_rejected_line_is_trimmed_text() {
        let parsed = parse_records(&format!("{}\n   short line   ", HEADER));
        assert_eq!(parsed.rejected[0].line, "short line");
        assert_eq!(
            parsed.rejected[0].reason,
            RejectReason::TooFewFields {
                expected: 11,
                found: 2
            }
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = format!("{}\r\nAlice 100 10 1 1 1 1 1 1 1 7\r\n", HEADER);
        let parsed = parse_records(&text);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].total_hours, 7);
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let parsed = parse_records(&format!("{}\n\n\n", HEADER));
        assert!(parsed.records.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_empty_text_counts_one_line() {
        let parsed = parse_records("");
        assert_eq!(parsed.total_lines, 1);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_diagnostics_reflect_counts() {
        let text = format!("{}\nAlice 100 10 1 1 1 1 1 1 1 7\nbad", HEADER);
        let diagnostics = parse_records(&text).diagnostics();

        assert_eq!(diagnostics.total_lines, 3);
        assert_eq!(diagnostics.accepted, 1);
        assert_eq!(diagnostics.rejected.len(), 1);
    }

    fn valid_line(index: usize, hours: u32) -> String {
        format!("emp{} 1,000.00 10.00 {h} {h} {h} {h} {h} {h} {h} {}", index, hours * 7, h = hours)
    }

    proptest! {
        #[test]
        fn prop_accepted_records_keep_source_order(
            lines in prop::collection::vec((any::<bool>(), 0u32..24), 0..40)
        ) {
            let mut text = String::from(HEADER);
            let mut expected = Vec::new();
            for (index, (valid, hours)) in lines.iter().enumerate() {
                text.push('\n');
                if *valid {
                    text.push_str(&valid_line(index, *hours));
                    expected.push(format!("emp{}", index));
                } else {
                    text.push_str(&format!("emp{} broken", index));
                }
            }

            let parsed = parse_records(&text);
            let names: Vec<String> = parsed.records.iter().map(|r| r.name.clone()).collect();

            prop_assert_eq!(names, expected);
            prop_assert_eq!(parsed.records.len() + parsed.rejected.len(), lines.len());
        }
    }
}
