use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::export::PdfExporter;
use crate::node::VisualNode;
use crate::page::Page;
use crate::zoom::ZoomFactor;
use folio_render_core::{DrawingBackend, RenderError};
use folio_render_lopdf::LopdfBackend;
use folio_types::Size;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// A paginated document shown at a zoom factor and exportable to PDF.
///
/// The viewer is owned by the caller. Pages are appended in order and cannot
/// be removed or reordered. Zoom changes are applied to every existing page
/// in place.
#[derive(Debug, Clone)]
pub struct DocViewer {
    config: ViewerConfig,
    pages: Vec<Page>,
    zoom: ZoomFactor,
    refreshes: u64,
}

impl Default for DocViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocViewer {
    pub fn new() -> Self {
        Self::with_config(ViewerConfig::default())
    }

    pub fn with_config(config: ViewerConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            zoom: ZoomFactor::ONE,
            refreshes: 0,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Paper size of every page at the current zoom, in screen units.
    pub fn paper_size(&self) -> Size {
        self.zoom.scale_size(self.config.page_format.screen_size())
    }

    /// Number of times the view has been invalidated by a page or zoom change.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Appends a page built from `content`, sized and scaled for the current zoom.
    pub fn add_page(&mut self, content: VisualNode) {
        let page = Page::new(
            content,
            self.zoom,
            self.config.page_format.screen_size(),
            self.config.base_font_size,
        );
        self.pages.push(page);
        self.refresh();
        log::debug!("Added page {} at zoom {}", self.pages.len(), self.zoom);
    }

    pub fn zoom(&self) -> f32 {
        self.zoom.get()
    }

    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom
    }

    /// Sets the zoom factor, clamped to at least 0.1, and re-applies it to
    /// every page's paper and text.
    pub fn set_zoom(&mut self, factor: f32) {
        self.zoom = ZoomFactor::new(factor);
        let base_size = self.config.page_format.screen_size();
        for page in &mut self.pages {
            page.apply_zoom(self.zoom, base_size, self.config.base_font_size);
        }
        self.refresh();
        log::debug!("Zoom set to {} across {} page(s)", self.zoom, self.pages.len());
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_zoom(self.zoom.step(self.config.zoom_step).get());
        self.zoom()
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_zoom(self.zoom.step(-self.config.zoom_step).get());
        self.zoom()
    }

    pub fn zoom_label(&self) -> String {
        self.zoom.label()
    }

    /// Draws every page onto `backend`, one output page per page.
    pub fn export_with<B: DrawingBackend + ?Sized>(&self, backend: &mut B) -> Result<(), RenderError> {
        PdfExporter::new(&self.config, self.zoom).render(&self.pages, backend)
    }

    /// Writes the document as PDF to `writer` and returns the writer.
    ///
    /// Write failures are reported as [`ViewerError::Io`] wherever they occur.
    pub fn export_to_writer<W: Write + Seek>(&self, writer: W) -> Result<W, ViewerError> {
        let write = || -> Result<W, RenderError> {
            let mut backend = LopdfBackend::new(writer, self.config.page_format)?;
            self.export_with(&mut backend)?;
            backend.finish()
        };
        write().map_err(|err| match err {
            RenderError::Io(io) => ViewerError::Io(io),
            other => ViewerError::Render(other),
        })
    }

    /// Writes the document as a PDF file at `path`.
    ///
    /// Fails if the file cannot be created or written. A partially written
    /// file is left as is.
    pub fn export_to_pdf(&self, path: impl AsRef<Path>) -> Result<(), ViewerError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.export_to_writer(BufWriter::new(file))?;
        log::info!(
            "Exported {} page(s) to {}",
            self.pages.len().max(1),
            path.display()
        );
        Ok(())
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
