use crate::helpers;
use crate::writer::StreamingPdfWriter;
use folio_render_core::utils::{flip_y, mm_to_pt, PT_PER_MM};
use folio_render_core::{Align, DrawingBackend, RenderError};
use folio_types::{Color, PageFormat, Position, Size};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, Stream, StringFormat};
use std::io::{Seek, Write};

const FONT_RESOURCE: &str = "F1";
const CELL_MARGIN_MM: f32 = 1.0;
/// Right page margin a multi-cell without a width extends to.
const RIGHT_MARGIN_MM: f32 = 10.0;

/// Operations of the page being drawn, plus the graphics state already
/// emitted into them.
struct PageContext {
    content: Content,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl PageContext {
    fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            stroke_color: None,
            line_width: None,
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

/// A [`DrawingBackend`] that streams a PDF document to `W` using `lopdf`.
///
/// Text uses the built-in Helvetica with WinAnsiEncoding. Each page is written
/// out when the next one is started or when the document is finished.
pub struct LopdfBackend<W: Write + Seek> {
    writer: StreamingPdfWriter<W>,
    page_size: Size,
    page: Option<PageContext>,
    pages_started: usize,
    font_size: f32,
    cursor: Position,
    draw_color: Color,
    line_width: f32,
}

impl<W: Write + Seek> LopdfBackend<W> {
    pub const DEFAULT_LINE_WIDTH: f32 = 0.2;

    pub fn new(writer: W, format: PageFormat) -> Result<Self, RenderError> {
        let mut font_dict = Dictionary::new();
        font_dict.set(
            FONT_RESOURCE,
            Object::Dictionary(dictionary! {
                "Type" => "Font", "Subtype" => "Type1", "BaseFont" => "Helvetica", "Encoding" => "WinAnsiEncoding",
            }),
        );

        Ok(Self {
            writer: StreamingPdfWriter::new(writer, "1.4", font_dict)?,
            page_size: format.size_mm(),
            page: None,
            pages_started: 0,
            font_size: 12.0,
            cursor: Position::zero(),
            draw_color: Color::BLACK,
            line_width: Self::DEFAULT_LINE_WIDTH,
        })
    }

    /// Writes the remaining page, page tree and trailer, and hands the writer back.
    /// A document without pages gets one blank page.
    pub fn finish(mut self) -> Result<W, RenderError> {
        if self.pages_started == 0 {
            self.add_page()?;
        }
        self.close_page()?;
        log::debug!("Finishing PDF with {} page(s)", self.writer.page_count());
        Ok(self.writer.finish()?)
    }

    fn close_page(&mut self) -> Result<(), RenderError> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let stream = Stream::new(dictionary! {}, page.content.encode()?);
        let content_id = self.writer.write_object(Object::Stream(stream))?;

        let width = mm_to_pt(self.page_size.width);
        let height = mm_to_pt(self.page_size.height);
        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.writer.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.writer.resources_id,
        };
        let page_id = self.writer.write_object(page_dict.into())?;
        self.writer.push_page_id(page_id);
        Ok(())
    }

    fn page_mut(&mut self) -> Result<&mut PageContext, RenderError> {
        self.page
            .as_mut()
            .ok_or_else(|| RenderError::Other("No page has been added".into()))
    }

    fn show_text(&mut self, x: f32, baseline: f32, text: &[u8]) -> Result<(), RenderError> {
        let font_size = self.font_size;
        let page_height = mm_to_pt(self.page_size.height);
        let page = self.page_mut()?;
        page.push("BT", vec![]);
        page.push(
            "Tf",
            vec![Object::Name(FONT_RESOURCE.as_bytes().to_vec()), font_size.into()],
        );
        page.push(
            "Td",
            vec![mm_to_pt(x).into(), flip_y(mm_to_pt(baseline), page_height).into()],
        );
        page.push("Tj", vec![Object::String(text.to_vec(), StringFormat::Literal)]);
        page.push("ET", vec![]);
        Ok(())
    }

    fn sync_stroke_state(&mut self) -> Result<(), RenderError> {
        let color = self.draw_color;
        let width = self.line_width;
        let page = self.page_mut()?;
        if page.stroke_color != Some(color) {
            let [r, g, b] = color.to_unit_rgb();
            page.push("RG", vec![r.into(), g.into(), b.into()]);
            page.stroke_color = Some(color);
        }
        if page.line_width != Some(width) {
            page.push("w", vec![mm_to_pt(width).into()]);
            page.line_width = Some(width);
        }
        Ok(())
    }
}

impl<W: Write + Seek> DrawingBackend for LopdfBackend<W> {
    fn add_page(&mut self) -> Result<(), RenderError> {
        self.close_page()?;
        self.page = Some(PageContext::new());
        self.pages_started += 1;
        self.cursor = Position::zero();
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages_started
    }

    fn set_font(&mut self, family: &str, size: f32) {
        if !family.eq_ignore_ascii_case("helvetica") && !family.eq_ignore_ascii_case("arial") {
            log::warn!("Font family '{}' is not available, using Helvetica", family);
        }
        self.font_size = size;
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_xy(&mut self, x: f32, y: f32) {
        self.cursor = Position::new(x, y);
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
        self.page_mut()?;
        if !text.is_empty() {
            let text_width = helpers::text_width_mm(text, self.font_size);
            let dx = match align {
                Align::Left => CELL_MARGIN_MM,
                Align::Center => (width - text_width) / 2.0,
                Align::Right => width - CELL_MARGIN_MM - text_width,
            };
            let font_size_mm = self.font_size / PT_PER_MM;
            let baseline = self.cursor.y + 0.5 * height + 0.3 * font_size_mm;
            self.show_text(self.cursor.x + dx, baseline, text)?;
        }
        self.cursor.x += width;
        Ok(())
    }

    /// A non-positive `width` extends the cell to the right page margin.
    fn multi_cell(
        &mut self,
        width: f32,
        line_height: f32,
        text: &[u8],
        align: Align,
    ) -> Result<(), RenderError> {
        self.page_mut()?;
        let start_x = self.cursor.x;
        let width = if width > 0.0 {
            width
        } else {
            self.page_size.width - RIGHT_MARGIN_MM - start_x
        };

        let lines = helpers::wrap_lines(text, width - 2.0 * CELL_MARGIN_MM, self.font_size);
        for line in lines {
            self.cell(width, line_height, &line, align)?;
            self.cursor.x = start_x;
            self.cursor.y += line_height;
        }
        Ok(())
    }

    fn draw_color(&self) -> Color {
        self.draw_color
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn line_width(&self) -> f32 {
        self.line_width
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.sync_stroke_state()?;
        let page_height = mm_to_pt(self.page_size.height);
        let page = self.page_mut()?;
        page.push(
            "m",
            vec![mm_to_pt(x1).into(), flip_y(mm_to_pt(y1), page_height).into()],
        );
        page.push(
            "l",
            vec![mm_to_pt(x2).into(), flip_y(mm_to_pt(y2), page_height).into()],
        );
        page.push("S", vec![]);
        Ok(())
    }
}
