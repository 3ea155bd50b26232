use crate::traits::DrawingBackend;
use folio_types::Color;
use std::ops::{Deref, DerefMut};

/// Temporarily overrides the backend's draw colour and line width.
///
/// The previous stroke state is put back when the scope is dropped, whether
/// the drawing inside it succeeded or returned early with an error.
pub struct StrokeScope<'a, B: DrawingBackend + ?Sized> {
    backend: &'a mut B,
    saved_color: Color,
    saved_width: f32,
}

impl<'a, B: DrawingBackend + ?Sized> StrokeScope<'a, B> {
    pub fn new(backend: &'a mut B, color: Color, width: f32) -> Self {
        let saved_color = backend.draw_color();
        let saved_width = backend.line_width();
        backend.set_draw_color(color);
        backend.set_line_width(width);
        Self {
            backend,
            saved_color,
            saved_width,
        }
    }
}

impl<B: DrawingBackend + ?Sized> Deref for StrokeScope<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: DrawingBackend + ?Sized> DerefMut for StrokeScope<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: DrawingBackend + ?Sized> Drop for StrokeScope<'_, B> {
    fn drop(&mut self) {
        self.backend.set_draw_color(self.saved_color);
        self.backend.set_line_width(self.saved_width);
    }
}
