pub mod color;
pub mod geometry;
pub mod page;

pub use color::Color;
pub use geometry::{Position, Rect, Size};
pub use page::PageFormat;
