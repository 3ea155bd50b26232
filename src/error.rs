//! Defines the error types for viewer and export operations.

use folio_render_core::RenderError;
use thiserror::Error;

/// The main error enum for all high-level operations.
///
/// Adding pages and zooming cannot fail; these errors come from exporting and
/// from loading document files.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document error: {0}")]
    Document(String),
}
