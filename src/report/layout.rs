//! Table geometry: column widths, row placement and page breaks.

use std::ops::Range;

use super::metrics::text_width;
use super::style::TableStyle;

/// Page size and printable frame, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width.
    pub width: f32,
    /// Page height.
    pub height: f32,
    /// Margin on every side.
    pub margin: f32,
    /// Extra inset of the content frame inside the margins.
    pub frame_padding: f32,
}

impl PageGeometry {
    /// US Letter with one-inch margins.
    pub const LETTER: PageGeometry = PageGeometry {
        width: 612.0,
        height: 792.0,
        margin: 72.0,
        frame_padding: 6.0,
    };

    /// Y coordinate of the top of the content frame.
    pub fn frame_top(&self) -> f32 {
        self.height - self.margin - self.frame_padding
    }

    /// Y coordinate of the bottom of the content frame.
    pub fn frame_bottom(&self) -> f32 {
        self.margin + self.frame_padding
    }

    /// Usable vertical space of the frame.
    pub fn frame_height(&self) -> f32 {
        self.frame_top() - self.frame_bottom()
    }
}

/// Computed geometry of the report table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Width of each column.
    pub column_widths: Vec<f32>,
    /// Height of the header row.
    pub header_height: f32,
    /// Height of each body row.
    pub row_height: f32,
    /// X coordinate of the table's left edge.
    pub left: f32,
}

impl TableLayout {
    /// Sizes every column to its widest cell and centers the table on the page.
    pub fn compute<'a, R>(header: &[&str], rows: R, style: &TableStyle, page: &PageGeometry) -> Self
    where
        R: IntoIterator<Item = [&'a str; 6]>,
    {
        let mut column_widths: Vec<f32> = header
            .iter()
            .map(|cell| {
                text_width(cell, style.header.font, style.header.font_size)
                    + style.header.horizontal_padding()
            })
            .collect();

        for row in rows {
            for (width, cell) in column_widths.iter_mut().zip(row) {
                let needed =
                    text_width(cell, style.body.font, style.body.font_size) + style.body.horizontal_padding();
                if needed > *width {
                    *width = needed;
                }
            }
        }

        let table_width: f32 = column_widths.iter().sum();
        let left = (page.width - table_width) / 2.0;

        Self {
            column_widths,
            header_height: style.header.row_height(),
            row_height: style.body.row_height(),
            left,
        }
    }

    /// Total table width.
    pub fn width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// X coordinate of the left edge of each column, followed by the right edge of the table.
    pub fn column_edges(&self) -> Vec<f32> {
        let mut edges = Vec::with_capacity(self.column_widths.len() + 1);
        let mut x = self.left;
        edges.push(x);
        for width in &self.column_widths {
            x += width;
            edges.push(x);
        }
        edges
    }

    /// Splits `row_count` body rows into pages.
    ///
    /// The header sits on the first page only. Every page holds at least one
    /// row, and a table with no body rows still yields one page for the header.
    pub fn paginate(&self, row_count: usize, page: &PageGeometry) -> Vec<Range<usize>> {
        let frame = page.frame_height();
        let first_capacity = rows_that_fit(frame - self.header_height, self.row_height);
        let later_capacity = rows_that_fit(frame, self.row_height);

        let mut pages = Vec::new();
        let mut start = 0;
        let mut capacity = first_capacity;
        loop {
            let end = (start + capacity).min(row_count);
            pages.push(start..end);
            if end >= row_count {
                break;
            }
            start = end;
            capacity = later_capacity;
        }
        pages
    }
}

fn rows_that_fit(space: f32, row_height: f32) -> usize {
    ((space / row_height).floor() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: [&str; 6] = ["Name", "Total Salary", "Worked Hours", "Threshold Hours", "Deduction", "Final Salary"];

    fn layout(rows: &[[&str; 6]]) -> TableLayout {
        TableLayout::compute(
            &HEADER,
            rows.iter().copied(),
            &TableStyle::default(),
            &PageGeometry::LETTER,
        )
    }

    #[test]
    fn test_letter_frame() {
        let page = PageGeometry::LETTER;
        assert_eq!(page.frame_top(), 714.0);
        assert_eq!(page.frame_bottom(), 78.0);
        assert_eq!(page.frame_height(), 636.0);
    }

    #[test]
    fn test_columns_fit_header_text() {
        let layout = layout(&[]);
        let style = TableStyle::default();
        let name_width = text_width("Name", style.header.font, style.header.font_size) + 12.0;
        assert_eq!(layout.column_widths[0], name_width);
        assert_eq!(layout.column_widths.len(), 6);
    }

    #[test]
    fn test_long_body_cell_widens_column() {
        let short = layout(&[["Al", "1.00", "1", "1", "0.00", "1.00"]]);
        let long = layout(&[[
            "Bartholomew-Featherstonehaugh",
            "1.00",
            "1",
            "1",
            "0.00",
            "1.00",
        ]]);
        assert!(long.column_widths[0] > short.column_widths[0]);
        assert_eq!(long.column_widths[1], short.column_widths[1]);
    }

    #[test]
    fn test_table_is_centered() {
        let layout = layout(&[]);
        let right_gap = PageGeometry::LETTER.width - (layout.left + layout.width());
        assert!((layout.left - right_gap).abs() < 0.001);
    }

    #[test]
    fn test_column_edges() {
        let layout = layout(&[]);
        let edges = layout.column_edges();
        assert_eq!(edges.len(), 7);
        assert_eq!(edges[0], layout.left);
        assert!((edges[6] - (layout.left + layout.width())).abs() < 0.001);
    }

    #[test]
    fn test_single_page_when_rows_fit() {
        let layout = layout(&[]);
        let pages = layout.paginate(10, &PageGeometry::LETTER);
        assert_eq!(pages, vec![0..10]);
    }

    #[test]
    fn test_empty_table_has_one_page() {
        let layout = layout(&[]);
        assert_eq!(layout.paginate(0, &PageGeometry::LETTER), vec![0..0]);
    }

    #[test]
    fn test_overflow_rows_continue_on_next_page() {
        let layout = layout(&[]);
        // (636 - 27) / 24 = 25 rows on the first page, 636 / 24 = 26 after.
        let pages = layout.paginate(60, &PageGeometry::LETTER);
        assert_eq!(pages, vec![0..25, 25..51, 51..60]);
    }
}
