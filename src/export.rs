use crate::config::ViewerConfig;
use crate::mapping::PageMapping;
use crate::page::Page;
use crate::walker::{walk, Leaf, LeafVisit};
use crate::zoom::ZoomFactor;
use folio_render_core::{Align, DrawingBackend, RenderError, StrokeScope};

/// Line height of a text label as a fraction of its font size.
const LABEL_LINE_HEIGHT: f32 = 0.4;
/// Cell height of styled text as a fraction of its font size.
const STYLED_CELL_HEIGHT: f32 = 0.5;

/// Reproduces pages on a [`DrawingBackend`], one output page per page.
pub struct PdfExporter<'a> {
    config: &'a ViewerConfig,
    zoom: ZoomFactor,
    mapping: PageMapping,
}

impl<'a> PdfExporter<'a> {
    /// `zoom` is the viewer's current factor; text labels are sized from it.
    pub fn new(config: &'a ViewerConfig, zoom: ZoomFactor) -> Self {
        Self {
            config,
            zoom,
            mapping: PageMapping::from_config(config),
        }
    }

    pub fn render<B: DrawingBackend + ?Sized>(
        &self,
        pages: &[Page],
        backend: &mut B,
    ) -> Result<(), RenderError> {
        for (index, page) in pages.iter().enumerate() {
            backend.add_page()?;
            log::debug!("Exporting page {} of {}", index + 1, pages.len());
            walk(page.content(), &mut |visit| self.draw_leaf(backend, &visit))?;
        }
        Ok(())
    }

    fn draw_leaf<B: DrawingBackend + ?Sized>(
        &self,
        backend: &mut B,
        visit: &LeafVisit<'_>,
    ) -> Result<(), RenderError> {
        let area = self.mapping.to_page(visit.bounds);
        log::trace!(
            "{} at ({:.2}, {:.2}) size {:.2}x{:.2} mm",
            visit.leaf.name(),
            area.x,
            area.y,
            area.width,
            area.height
        );

        match visit.leaf {
            Leaf::TextLabel(label) => {
                let font_size = self.zoom.scale_font(self.config.base_font_size);
                backend.set_font(&self.config.font_family, font_size);
                backend.set_xy(area.x, area.y);
                let text = backend.translate_text(&label.text);
                backend.multi_cell(area.width, font_size * LABEL_LINE_HEIGHT, &text, Align::Left)
            }
            Leaf::StyledText(styled) => {
                let font_size = styled.font_size;
                backend.set_font(&self.config.font_family, font_size);
                backend.set_xy(area.x, area.y);
                let text = backend.translate_text(&styled.text);
                backend.cell(area.width, font_size * STYLED_CELL_HEIGHT, &text, Align::Left)
            }
            Leaf::Separator(_) => {
                let middle_y = area.y + area.height / 2.0;
                let mut stroke = StrokeScope::new(
                    backend,
                    self.config.separator_color,
                    self.config.separator_width_mm,
                );
                stroke.line(area.x, middle_y, area.right(), middle_y)
            }
        }
    }
}
