//! Table styling for the deduction report.

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Rgb {
    /// Builds a color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black.
    pub const BLACK: Rgb = Rgb::from_u8(0, 0, 0);
    /// Mid grey used behind header cells.
    pub const GREY: Rgb = Rgb::from_u8(128, 128, 128);
    /// Near-white used for header text.
    pub const WHITESMOKE: Rgb = Rgb::from_u8(245, 245, 245);
    /// Beige used behind body cells.
    pub const BEIGE: Rgb = Rgb::from_u8(245, 245, 220);
}

/// One of the two standard fonts the report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Helvetica.
    Helvetica,
    /// Helvetica-Bold.
    HelveticaBold,
}

impl Font {
    /// The PDF base font name.
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The name under which the font is registered in page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }
}

/// Styling shared by every cell of one row kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    /// Text font.
    pub font: Font,
    /// Text size in points.
    pub font_size: f32,
    /// Line height in points.
    pub leading: f32,
    /// Cell fill.
    pub background: Rgb,
    /// Text fill.
    pub text_color: Rgb,
    /// Space above the text.
    pub top_padding: f32,
    /// Space below the text.
    pub bottom_padding: f32,
    /// Space left of the text.
    pub left_padding: f32,
    /// Space right of the text.
    pub right_padding: f32,
}

impl CellStyle {
    /// Total height of a single-line row in this style.
    pub fn row_height(&self) -> f32 {
        self.leading + self.top_padding + self.bottom_padding
    }

    /// Horizontal padding on both sides combined.
    pub fn horizontal_padding(&self) -> f32 {
        self.left_padding + self.right_padding
    }
}

/// Complete styling for the report table.
///
/// Text in every cell is centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    /// Style of the header row.
    pub header: CellStyle,
    /// Style of every body row.
    pub body: CellStyle,
    /// Grid line width.
    pub grid_width: f32,
    /// Grid line color.
    pub grid_color: Rgb,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header: CellStyle {
                font: Font::HelveticaBold,
                font_size: 12.0,
                leading: 12.0,
                background: Rgb::GREY,
                text_color: Rgb::WHITESMOKE,
                top_padding: 3.0,
                bottom_padding: 12.0,
                left_padding: 6.0,
                right_padding: 6.0,
            },
            body: CellStyle {
                font: Font::Helvetica,
                font_size: 10.0,
                leading: 12.0,
                background: Rgb::BEIGE,
                text_color: Rgb::BLACK,
                top_padding: 6.0,
                bottom_padding: 6.0,
                left_padding: 6.0,
                right_padding: 6.0,
            },
            grid_width: 1.0,
            grid_color: Rgb::BLACK,
        }
    }
}
