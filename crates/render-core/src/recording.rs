use crate::error::RenderError;
use crate::traits::{Align, DrawingBackend};
use crate::utils;
use folio_types::{Color, Position};

/// A single primitive call received by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    AddPage,
    SetFont { family: String, size: f32 },
    SetXy { x: f32, y: f32 },
    Cell {
        width: f32,
        height: f32,
        text: String,
        align: Align,
    },
    MultiCell {
        width: f32,
        line_height: f32,
        text: String,
        align: Align,
    },
    SetDrawColor(Color),
    SetLineWidth(f32),
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl DrawCall {
    /// True for calls that put marks on the page.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            DrawCall::Cell { .. } | DrawCall::MultiCell { .. } | DrawCall::Line { .. }
        )
    }
}

/// A backend that keeps every call in memory instead of producing a file.
///
/// It tracks the same cursor and stroke state a real backend would, so code
/// under test observes identical state transitions. Text is stored decoded
/// back from the WinAnsi bytes the backend received.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    calls: Vec<DrawCall>,
    pages: usize,
    font_size: f32,
    cursor: Position,
    draw_color: Color,
    line_width: f32,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            pages: 0,
            font_size: 12.0,
            cursor: Position::zero(),
            draw_color: Color::BLACK,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}

impl RecordingBackend {
    pub const DEFAULT_LINE_WIDTH: f32 = 0.2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }

    /// Calls that put marks on the page, in order.
    pub fn drawing_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(|c| c.is_drawing())
    }

    fn ensure_page(&self) -> Result<(), RenderError> {
        if self.pages == 0 {
            return Err(RenderError::Other("No page has been added".into()));
        }
        Ok(())
    }
}

impl DrawingBackend for RecordingBackend {
    fn add_page(&mut self) -> Result<(), RenderError> {
        self.pages += 1;
        self.cursor = Position::zero();
        self.calls.push(DrawCall::AddPage);
        log::trace!("Recording page {} ({} calls so far)", self.pages, self.calls.len());
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    fn set_font(&mut self, family: &str, size: f32) {
        self.font_size = size;
        self.calls.push(DrawCall::SetFont {
            family: family.to_string(),
            size,
        });
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_xy(&mut self, x: f32, y: f32) {
        self.cursor = Position::new(x, y);
        self.calls.push(DrawCall::SetXy { x, y });
    }

    fn xy(&self) -> Position {
        self.cursor
    }

    fn cell(
        &mut self,
        width: f32,
        height: f32,
        text: &[u8],
        align: Align,
    ) -> Result<(), RenderError> {
        self.ensure_page()?;
        self.calls.push(DrawCall::Cell {
            width,
            height,
            text: utils::from_win_ansi(text),
            align,
        });
        self.cursor.x += width;
        Ok(())
    }

    fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &[u8],
        align: Align,
    ) -> Result<(), RenderError> {
        self.ensure_page()?;
        let text = utils::from_win_ansi(text);
        let lines = text.split('\n').count().max(1);
        self.calls.push(DrawCall::MultiCell {
            width,
            line_height,
            text,
            align,
        });
        self.cursor.y += line_height * lines as f32;
        Ok(())
    }

    fn draw_color(&self) -> Color {
        self.draw_color
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
        self.calls.push(DrawCall::SetDrawColor(color));
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.calls.push(DrawCall::SetLineWidth(width));
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.ensure_page()?;
        log::trace!("Recording line ({}, {}) -> ({}, {})", x1, y1, x2, y2);
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_before_first_page_fails() {
        let mut backend = RecordingBackend::new();
        assert!(backend.cell(10.0, 5.0, b"x", Align::Left).is_err());
        assert!(backend.line(0.0, 0.0, 1.0, 1.0).is_err());
        assert!(backend.drawing_calls().next().is_none());
    }

    #[test]
    fn cursor_follows_cells() {
        let mut backend = RecordingBackend::new();
        backend.add_page().unwrap();
        backend.set_xy(10.0, 20.0);
        backend.cell(30.0, 7.0, b"a", Align::Left).unwrap();
        assert_eq!(backend.xy(), Position::new(40.0, 20.0));

        backend.set_xy(10.0, 20.0);
        backend.multi_cell(30.0, 5.0, b"one\ntwo", Align::Left).unwrap();
        assert_eq!(backend.xy(), Position::new(10.0, 30.0));
    }

    #[test]
    fn text_is_recorded_decoded() {
        let mut backend = RecordingBackend::new();
        backend.add_page().unwrap();
        let bytes = backend.translate_text("Preço");
        backend.cell(10.0, 5.0, &bytes, Align::Left).unwrap();
        assert_eq!(
            backend.calls().last(),
            Some(&DrawCall::Cell {
                width: 10.0,
                height: 5.0,
                text: "Preço".to_string(),
                align: Align::Left,
            })
        );
    }

    #[test]
    fn records_pages_with_trace_logging() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();

        let mut backend = RecordingBackend::new();
        backend.add_page().unwrap();
        backend.line(0.0, 0.0, 10.0, 0.0).unwrap();
        backend.add_page().unwrap();
        assert_eq!(backend.page_count(), 2);
        assert_eq!(
            backend.calls().iter().filter(|c| **c == DrawCall::AddPage).count(),
            2
        );
    }
}
