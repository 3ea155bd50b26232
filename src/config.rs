use folio_types::{Color, PageFormat};
use serde::{Deserialize, Serialize};

/// Font size in points of text at zoom 1.0.
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Smallest zoom factor the viewer accepts.
pub const MIN_ZOOM: f32 = 0.1;

/// In-process settings for the viewer and its PDF export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Page format for both the on-screen paper and the exported PDF.
    ///
    /// Defaults to A4.
    pub page_format: PageFormat,
    /// Offset in millimetres added to every exported x and y coordinate.
    pub margin_mm: f32,
    /// Text size at zoom 1.0, in points.
    pub base_font_size: f32,
    /// Amount the zoom-in and zoom-out controls change the factor by.
    pub zoom_step: f32,
    /// Vertical gap between pages in the preview, in screen units.
    pub page_spacing: f32,
    /// Font family requested from the PDF backend.
    pub font_family: String,
    pub separator_color: Color,
    /// Separator stroke width in millimetres.
    pub separator_width_mm: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            margin_mm: 10.0,
            base_font_size: BASE_FONT_SIZE,
            zoom_step: 0.1,
            page_spacing: 8.0,
            font_family: "Helvetica".to_string(),
            separator_color: Color::gray(180),
            separator_width_mm: 0.2,
        }
    }
}

impl ViewerConfig {
    pub fn with_page_format(mut self, page_format: PageFormat) -> Self {
        self.page_format = page_format;
        self
    }
}
