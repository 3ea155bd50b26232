//! Core rendering abstractions for PDF export.
//!
//! This crate provides the seam between the document walker and a concrete
//! PDF writer:
//! - `DrawingBackend` trait for the cursor/cell/line primitives the exporter drives
//! - `StrokeScope` for draw colour and line width that must not leak
//! - `RecordingBackend`, which keeps every primitive call in memory
//! - Error types and WinAnsi text translation

mod error;
mod recording;
mod scope;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawCall, RecordingBackend};
pub use scope::StrokeScope;
pub use traits::{Align, DrawingBackend};
