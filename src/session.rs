//! The preview window's toolbar, without a window.

use crate::error::ViewerError;
use crate::preview::DisplayList;
use crate::viewer::DocViewer;
use std::path::PathBuf;

/// File name offered when the user exports without choosing one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "report.pdf";

#[derive(Debug, Clone, PartialEq)]
pub enum ToolbarAction {
    ZoomIn,
    ZoomOut,
    /// Export to the given path, or to [`DEFAULT_EXPORT_FILE_NAME`] if `None`.
    ExportPdf(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Zoomed { label: String },
    Exported { path: PathBuf },
}

/// Owns a viewer and dispatches toolbar actions to it.
#[derive(Debug)]
pub struct PreviewSession {
    viewer: DocViewer,
    zoom_label: String,
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new(DocViewer::new())
    }
}

impl PreviewSession {
    pub fn new(viewer: DocViewer) -> Self {
        let zoom_label = viewer.zoom_label();
        Self { viewer, zoom_label }
    }

    pub fn viewer(&self) -> &DocViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut DocViewer {
        &mut self.viewer
    }

    pub fn into_viewer(self) -> DocViewer {
        self.viewer
    }

    /// The text shown next to the zoom buttons.
    pub fn zoom_label(&self) -> &str {
        &self.zoom_label
    }

    pub fn display_list(&self) -> DisplayList {
        DisplayList::build(&self.viewer)
    }

    pub fn dispatch(&mut self, action: ToolbarAction) -> Result<ActionOutcome, ViewerError> {
        log::debug!("Toolbar action {:?}", action);
        match action {
            ToolbarAction::ZoomIn => {
                self.viewer.zoom_in();
                Ok(self.zoomed())
            }
            ToolbarAction::ZoomOut => {
                self.viewer.zoom_out();
                Ok(self.zoomed())
            }
            ToolbarAction::ExportPdf(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
                self.viewer.export_to_pdf(&path)?;
                Ok(ActionOutcome::Exported { path })
            }
        }
    }

    fn zoomed(&mut self) -> ActionOutcome {
        self.zoom_label = self.viewer.zoom_label();
        ActionOutcome::Zoomed {
            label: self.zoom_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::VisualNode;

    #[test]
    fn zoom_buttons_update_label() {
        let mut session = PreviewSession::new(DocViewer::new());
        assert_eq!(session.zoom_label(), "100%");

        let outcome = session.dispatch(ToolbarAction::ZoomOut).unwrap();
        assert_eq!(outcome, ActionOutcome::Zoomed { label: "90%".into() });
        session.dispatch(ToolbarAction::ZoomIn).unwrap();
        session.dispatch(ToolbarAction::ZoomIn).unwrap();
        assert_eq!(session.zoom_label(), "110%");
        assert!((session.viewer().zoom() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn export_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let mut session = PreviewSession::new(DocViewer::new());
        session.viewer_mut().add_page(VisualNode::label("hello"));

        let outcome = session
            .dispatch(ToolbarAction::ExportPdf(Some(path.clone())))
            .unwrap();
        assert_eq!(outcome, ActionOutcome::Exported { path: path.clone() });
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn failed_export_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");
        let mut session = PreviewSession::new(DocViewer::new());
        let result = session.dispatch(ToolbarAction::ExportPdf(Some(path)));
        assert!(matches!(result, Err(ViewerError::Io(_))));
    }
}
