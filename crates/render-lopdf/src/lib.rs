//! Streaming PDF backend using lopdf.
//!
//! This crate implements `DrawingBackend` on top of the lopdf object model.
//! Pages are encoded and written as soon as they are complete, so memory use
//! stays flat regardless of document length.

pub mod helpers;
mod renderer;
mod writer;

pub use renderer::LopdfBackend;
pub use writer::StreamingPdfWriter;
