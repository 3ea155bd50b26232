use crate::error::RenderError;
use crate::utils;
use folio_types::{Color, Position};

/// Horizontal alignment of text inside a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A trait for PDF drawing backends, abstracting the page-writing primitives.
///
/// Coordinates are millimetres with the origin at the top-left corner of the
/// page. Font sizes are in points. The backend owns a cursor that `cell` and
/// `multi_cell` start from and advance, and a stroke state (draw colour and
/// line width) that applies to every subsequent `line`.
pub trait DrawingBackend {
    /// Starts a new page. Drawing before the first page is an error.
    fn add_page(&mut self) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    fn set_font(&mut self, family: &str, size: f32);

    fn font_size(&self) -> f32;

    fn set_xy(&mut self, x: f32, y: f32);

    fn xy(&self) -> Position;

    /// Writes one line of text in a `width` × `height` cell at the cursor and
    /// moves the cursor right by `width`.
    fn cell(&mut self, width: f32, height: f32, text: &[u8], align: Align)
    -> Result<(), RenderError>;

    /// Writes text wrapped to `width`, one cell of `line_height` per line.
    /// The cursor ends below the last line, at the starting x.
    fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &[u8],
        align: Align,
    ) -> Result<(), RenderError>;

    fn draw_color(&self) -> Color;

    fn set_draw_color(&mut self, color: Color);

    fn line_width(&self) -> f32;

    fn set_line_width(&mut self, width: f32);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    /// Translates UTF-8 text into the byte encoding of the backend's fonts.
    fn translate_text(&self, text: &str) -> Vec<u8> {
        utils::to_win_ansi(text)
    }
}
