//! Zoom-aware sizing: the clamped zoom factor and the sizes derived from it.

use crate::config::MIN_ZOOM;
use folio_types::Size;
use std::fmt;

/// A zoom factor of at least [`MIN_ZOOM`]. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    pub const ONE: ZoomFactor = ZoomFactor(1.0);

    /// Clamps `factor` to the minimum. NaN clamps to the minimum as well.
    pub fn new(factor: f32) -> Self {
        Self(factor.max(MIN_ZOOM))
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// The factor moved by `delta`, clamped again.
    pub fn step(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    pub fn scale_size(self, base: Size) -> Size {
        base * self.0
    }

    pub fn scale_font(self, base_font_size: f32) -> f32 {
        base_font_size * self.0
    }

    /// Rounded percentage, e.g. `"90%"`.
    pub fn label(self) -> String {
        format!("{:.0}%", self.0 * 100.0)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<f32> for ZoomFactor {
    fn from(factor: f32) -> Self {
        Self::new(factor)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_minimum() {
        assert_eq!(ZoomFactor::new(0.05).get(), MIN_ZOOM);
        assert_eq!(ZoomFactor::new(-3.0).get(), MIN_ZOOM);
        assert_eq!(ZoomFactor::new(f32::NAN).get(), MIN_ZOOM);
        assert_eq!(ZoomFactor::new(7.5).get(), 7.5);
    }

    #[test]
    fn clamp_is_idempotent() {
        for f in [-1.0, 0.0, 0.1, 0.5, 1.0, 3.0] {
            let once = ZoomFactor::new(f);
            assert_eq!(ZoomFactor::new(once.get()), once);
        }
    }

    #[test]
    fn labels_round_to_whole_percent() {
        assert_eq!(ZoomFactor::ONE.label(), "100%");
        assert_eq!(ZoomFactor::ONE.step(-0.1).label(), "90%");
        assert_eq!(ZoomFactor::new(1.25).to_string(), "125%");
    }

    #[test]
    fn scales_sizes_and_fonts() {
        let zoom = ZoomFactor::new(2.0);
        assert_eq!(zoom.scale_size(Size::new(595.0, 842.0)), Size::new(1190.0, 1684.0));
        assert_eq!(zoom.scale_font(14.0), 28.0);
    }
}
