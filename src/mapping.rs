use crate::config::ViewerConfig;
use folio_types::{PageFormat, Rect};

/// Converts screen-space bounds into page coordinates in millimetres.
///
/// Positions and sizes are multiplied by the export ratio of the page format;
/// positions then get the page margin added. The ratio does not depend on
/// zoom: zoom has already been applied to the screen-space values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMapping {
    ratio: f32,
    margin: f32,
}

impl PageMapping {
    pub fn new(format: PageFormat, margin_mm: f32) -> Self {
        Self {
            ratio: format.export_ratio(),
            margin: margin_mm,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.page_format, config.margin_mm)
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn to_page(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x * self.ratio + self.margin,
            bounds.y * self.ratio + self.margin,
            bounds.width * self.ratio,
            bounds.height * self.ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_ratio_then_margin() {
        let mapping = PageMapping::new(PageFormat::A4, 10.0);
        let page = mapping.to_page(Rect::new(50.0, 50.0, 200.0, 20.0));
        let ratio = 210.0_f32 / 595.0;
        assert!((page.x - (50.0 * ratio + 10.0)).abs() < 1e-4);
        assert!((page.y - 27.647).abs() < 1e-3);
        assert!((page.width - 200.0 * ratio).abs() < 1e-4);
        assert!((page.height - 20.0 * ratio).abs() < 1e-4);
    }

    #[test]
    fn origin_maps_to_margin() {
        let mapping = PageMapping::new(PageFormat::Letter, 10.0);
        let page = mapping.to_page(Rect::default());
        assert_eq!((page.x, page.y, page.width, page.height), (10.0, 10.0, 0.0, 0.0));
    }
}
