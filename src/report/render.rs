//! PDF rendering of the deduction table.
//!
//! The document is assembled directly from `lopdf` objects: one font
//! dictionary per standard font, one content stream per page, and a page
//! tree sized to US Letter.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat, dictionary};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::DeductionResult;

use super::artifact::ReportArtifact;
use super::format::{REPORT_COLUMNS, ReportRow, format_rows};
use super::layout::{PageGeometry, TableLayout};
use super::metrics::text_width;
use super::style::{CellStyle, Font, Rgb, TableStyle};

/// Fraction of the font size kept between the bottom padding and the baseline.
const DESCENT_RATIO: f32 = 0.2;

/// Renders deduction results as a styled single-table PDF.
///
/// # Errors
///
/// Returns `RenderError` if the content streams or the document cannot be
/// serialized. `results` is only borrowed, so the caller can retry.
///
/// # Examples
///
/// ```
/// use timesheet_deductions::models::DeductionResult;
/// use timesheet_deductions::report::render_report;
/// use rust_decimal::Decimal;
///
/// let results = vec![DeductionResult {
///     name: "Alice".to_string(),
///     total_salary: Decimal::new(200000, 2),
///     worked_hours: 40,
///     threshold_hours: 45,
///     deduction: Decimal::new(12500, 2),
///     final_salary: Decimal::new(187500, 2),
/// }];
///
/// let artifact = render_report(&results).unwrap();
/// assert!(artifact.as_bytes().starts_with(b"%PDF"));
/// ```
pub fn render_report(results: &[DeductionResult]) -> EngineResult<ReportArtifact> {
    render_report_at(results, Utc::now())
}

/// Renders deduction results, stamping the document with `generated_at`.
pub fn render_report_at(
    results: &[DeductionResult],
    generated_at: DateTime<Utc>,
) -> EngineResult<ReportArtifact> {
    let rows = format_rows(results);
    ReportRenderer::new(TableStyle::default(), PageGeometry::LETTER).render(&rows, generated_at)
}

/// Draws formatted report rows into a PDF document.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    style: TableStyle,
    page: PageGeometry,
}

impl ReportRenderer {
    /// Creates a renderer with the given style and page geometry.
    pub fn new(style: TableStyle, page: PageGeometry) -> Self {
        Self { style, page }
    }

    /// Renders pre-formatted rows. Cell text is drawn exactly as given.
    pub fn render(
        &self,
        rows: &[ReportRow],
        generated_at: DateTime<Utc>,
    ) -> EngineResult<ReportArtifact> {
        let layout = TableLayout::compute(
            &REPORT_COLUMNS,
            rows.iter().map(ReportRow::cells),
            &self.style,
            &self.page,
        );
        if layout.width() > self.page.width {
            warn!(
                table_width = layout.width(),
                page_width = self.page.width,
                "Report table is wider than the page"
            );
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary(Font::Helvetica));
        let bold_id = doc.add_object(font_dictionary(Font::HelveticaBold));
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Helvetica.resource_name() => regular_id,
                Font::HelveticaBold.resource_name() => bold_id,
            },
        });

        let page_ranges = layout.paginate(rows.len(), &self.page);
        let mut kids: Vec<Object> = Vec::with_capacity(page_ranges.len());

        for (page_index, range) in page_ranges.iter().enumerate() {
            let mut operations = Vec::new();
            let mut boundaries = vec![self.page.frame_top()];

            if page_index == 0 {
                self.draw_row(
                    &mut operations,
                    &layout,
                    last(&boundaries),
                    layout.header_height,
                    &REPORT_COLUMNS,
                    &self.style.header,
                );
                boundaries.push(last(&boundaries) - layout.header_height);
            }
            for row in &rows[range.clone()] {
                self.draw_row(
                    &mut operations,
                    &layout,
                    last(&boundaries),
                    layout.row_height,
                    &row.cells(),
                    &self.style.body,
                );
                boundaries.push(last(&boundaries) - layout.row_height);
            }
            self.draw_grid(&mut operations, &layout, &boundaries);

            let content = Content { operations };
            let encoded = content.encode().map_err(|e| EngineError::RenderError {
                message: format!("failed to encode page {}: {}", page_index + 1, e),
            })?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(self.page.width),
                Object::Real(self.page.height),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(info_dictionary(generated_at));
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let bytes = save(&mut doc)?;
        debug!(rows = rows.len(), pages = page_count, bytes = bytes.len(), "Rendered report");

        Ok(ReportArtifact::new(bytes, page_count))
    }

    fn draw_row(
        &self,
        ops: &mut Vec<Operation>,
        layout: &TableLayout,
        top: f32,
        height: f32,
        cells: &[&str],
        cell_style: &CellStyle,
    ) {
        let bottom = top - height;
        let edges = layout.column_edges();

        set_fill(ops, cell_style.background);
        ops.push(Operation::new(
            "re",
            vec![
                real(layout.left),
                real(bottom),
                real(layout.width()),
                real(height),
            ],
        ));
        ops.push(Operation::new("f", vec![]));

        let baseline = bottom + cell_style.bottom_padding + DESCENT_RATIO * cell_style.font_size;
        for (index, cell) in cells.iter().enumerate() {
            let (left, right) = (edges[index], edges[index + 1]);
            let inner_left = left + cell_style.left_padding;
            let inner_width = right - left - cell_style.horizontal_padding();
            let width = text_width(cell, cell_style.font, cell_style.font_size);
            let x = inner_left + (inner_width - width) / 2.0;

            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new(
                "Tf",
                vec![
                    Object::Name(cell_style.font.resource_name().as_bytes().to_vec()),
                    real(cell_style.font_size),
                ],
            ));
            set_fill(ops, cell_style.text_color);
            ops.push(Operation::new("Td", vec![real(x), real(baseline)]));
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(cell), StringFormat::Literal)],
            ));
            ops.push(Operation::new("ET", vec![]));
        }
    }

    /// Strokes every horizontal row boundary and every column edge.
    fn draw_grid(&self, ops: &mut Vec<Operation>, layout: &TableLayout, boundaries: &[f32]) {
        if boundaries.len() < 2 {
            return;
        }
        let color = self.style.grid_color;
        ops.push(Operation::new("w", vec![real(self.style.grid_width)]));
        ops.push(Operation::new(
            "RG",
            vec![real(color.r), real(color.g), real(color.b)],
        ));

        let left = layout.left;
        let right = layout.left + layout.width();
        for &y in boundaries {
            line(ops, left, y, right, y);
        }

        let (top, bottom) = (boundaries[0], last(boundaries));
        for x in layout.column_edges() {
            line(ops, x, top, x, bottom);
        }
    }
}

fn font_dictionary(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn info_dictionary(generated_at: DateTime<Utc>) -> Dictionary {
    dictionary! {
        "Title" => Object::string_literal("Salary Deductions"),
        "Producer" => Object::string_literal(concat!("timesheet-deductions ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(generated_at.format("D:%Y%m%d%H%M%SZ").to_string()),
    }
}

fn save(doc: &mut Document) -> EngineResult<Vec<u8>> {
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(|e| EngineError::RenderError {
        message: format!("failed to write document: {}", e),
    })?;
    Ok(bytes)
}

fn last(boundaries: &[f32]) -> f32 {
    boundaries.last().copied().unwrap_or_default()
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn set_fill(ops: &mut Vec<Operation>, color: Rgb) {
    ops.push(Operation::new(
        "rg",
        vec![real(color.r), real(color.g), real(color.b)],
    ));
}

fn line(ops: &mut Vec<Operation>, x1: f32, y1: f32, x2: f32, y2: f32) {
    ops.push(Operation::new("m", vec![real(x1), real(y1)]));
    ops.push(Operation::new("l", vec![real(x2), real(y2)]));
    ops.push(Operation::new("S", vec![]));
}

/// Encodes text for a WinAnsi font. Characters outside Latin-1 become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}
