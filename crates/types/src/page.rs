use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// A standard portrait page format.
///
/// Each format has two sizes: the *screen* size, which is the page size in
/// screen units at zoom 1.0 (one unit per PostScript point), and the
/// *physical* size in millimetres used by the PDF output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
    Legal,
}

impl PageFormat {
    pub fn screen_size(self) -> Size {
        match self {
            PageFormat::A4 => Size::new(595.0, 842.0),
            PageFormat::Letter => Size::new(612.0, 792.0),
            PageFormat::Legal => Size::new(612.0, 1008.0),
        }
    }

    pub fn size_mm(self) -> Size {
        match self {
            PageFormat::A4 => Size::new(210.0, 297.0),
            PageFormat::Letter => Size::new(215.9, 279.4),
            PageFormat::Legal => Size::new(215.9, 355.6),
        }
    }

    /// Millimetres per screen unit, derived from the page widths.
    pub fn export_ratio(self) -> f32 {
        self.size_mm().width / self.screen_size().width
    }

    pub fn name(self) -> &'static str {
        match self {
            PageFormat::A4 => "A4",
            PageFormat::Letter => "Letter",
            PageFormat::Legal => "Legal",
        }
    }
}
