//! Report rendering for the timesheet deduction engine.
//!
//! Deduction results are formatted once into [`ReportRow`]s and drawn as a
//! single styled table into a US Letter PDF. The header row is bold on grey,
//! body rows are regular on beige, and every cell carries a 1pt black grid.

mod artifact;
mod format;
mod layout;
mod metrics;
mod render;
mod style;

pub use artifact::{REPORT_FILE_NAME, REPORT_MIME_TYPE, ReportArtifact};
pub use format::{REPORT_COLUMNS, ReportRow, format_money, format_rows};
pub use layout::{PageGeometry, TableLayout};
pub use metrics::text_width;
pub use render::{ReportRenderer, render_report, render_report_at};
pub use style::{CellStyle, Font, Rgb, TableStyle};
