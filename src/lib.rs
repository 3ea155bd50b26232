//! Zoomable document viewer with PDF export.
//!
//! Pages are trees of [`VisualNode`]s held by a [`DocViewer`]. The viewer can
//! be previewed as a [`DisplayList`] and exported to PDF through any
//! [`DrawingBackend`], with [`LopdfBackend`] writing real PDF files.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod mapping;
pub mod node;
pub mod page;
pub mod preview;
pub mod session;
pub mod viewer;
pub mod walker;
pub mod zoom;

pub use config::{BASE_FONT_SIZE, MIN_ZOOM, ViewerConfig};
pub use document::DocumentSource;
pub use error::ViewerError;
pub use export::PdfExporter;
pub use mapping::PageMapping;
pub use node::{Container, Frame, NodeKind, Separator, StyledText, TextLabel, ThemeWrapper, VisualNode};
pub use page::{Page, Paper};
pub use preview::{DisplayList, PreviewContent, PreviewItem, PreviewPage};
pub use session::{ActionOutcome, DEFAULT_EXPORT_FILE_NAME, PreviewSession, ToolbarAction};
pub use viewer::DocViewer;
pub use walker::{Leaf, LeafVisit, collect_leaves, walk};
pub use zoom::ZoomFactor;

pub use folio_render_core::{Align, DrawCall, DrawingBackend, RecordingBackend, RenderError};
pub use folio_render_lopdf::LopdfBackend;
pub use folio_types::{Color, PageFormat, Position, Rect, Size};
