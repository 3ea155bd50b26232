//! Loading page trees from JSON document files.

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::node::VisualNode;
use crate::viewer::DocViewer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A document on disk: `{"pages": [node, ...]}`, one content tree per page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSource {
    #[serde(default)]
    pub pages: Vec<VisualNode>,
}

impl DocumentSource {
    pub fn from_json_str(json: &str) -> Result<Self, ViewerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ViewerError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            ViewerError::Document(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let source = serde_json::from_str::<Self>(&json).map_err(|e| {
            ViewerError::Document(format!("Invalid document {}: {}", path.display(), e))
        })?;
        log::debug!("Loaded {} page(s) from {}", source.pages.len(), path.display());
        Ok(source)
    }

    /// Appends every page to `viewer` at its current zoom.
    pub fn add_to(self, viewer: &mut DocViewer) {
        for page in self.pages {
            viewer.add_page(page);
        }
    }

    pub fn into_viewer(self, config: ViewerConfig) -> DocViewer {
        let mut viewer = DocViewer::with_config(config);
        self.add_to(&mut viewer);
        viewer
    }
}
