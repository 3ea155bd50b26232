use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// A point in a two-dimensional coordinate space. Whether the units are
/// screen units or millimetres depends on the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Position {
    type Output = Position;

    fn mul(self, factor: f32) -> Position {
        Position {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Mul<f32> for Size {
    type Output = Size;

    fn mul(self, factor: f32) -> Size {
        Size {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Position, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the same rectangle moved by `offset`.
    pub fn translate(self, offset: Position) -> Rect {
        Rect {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_addition_accumulates() {
        let mut p = Position::new(10.0, 5.0);
        p += Position::new(2.5, 2.5);
        assert_eq!(p + Position::new(1.0, 1.0), Position::new(13.5, 8.5));
    }

    #[test]
    fn size_scales_uniformly() {
        assert_eq!(Size::new(595.0, 842.0) * 2.0, Size::new(1190.0, 1684.0));
    }

    #[test]
    fn rect_translate_keeps_size() {
        let r = Rect::new(1.0, 2.0, 30.0, 40.0).translate(Position::new(10.0, 10.0));
        assert_eq!(r.origin(), Position::new(11.0, 12.0));
        assert_eq!(r.size(), Size::new(30.0, 40.0));
        assert_eq!(r.right(), 41.0);
        assert_eq!(r.bottom(), 52.0);
    }

    #[test]
    fn position_deserializes_from_json() {
        let p: Position = serde_json::from_str(r#"{"x": 50, "y": 12.5}"#).unwrap();
        assert_eq!(p, Position::new(50.0, 12.5));
    }
}
