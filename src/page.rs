use crate::node::VisualNode;
use crate::zoom::ZoomFactor;
use folio_types::{Color, Size};

/// The paper rectangle drawn behind a page's content on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    pub min_size: Size,
    pub size: Size,
    pub color: Color,
}

impl Paper {
    fn sized(size: Size) -> Self {
        Self {
            min_size: size,
            size,
            color: Color::WHITE,
        }
    }

    fn resize(&mut self, size: Size) {
        self.min_size = size;
        self.size = size;
    }
}

/// One page of the document: its paper and its content tree.
///
/// The content root is always a theme wrapper around the tree the caller
/// added, so the zoom-derived text scale applies to the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    paper: Paper,
    content: VisualNode,
}

impl Page {
    pub(crate) fn new(
        mut body: VisualNode,
        zoom: ZoomFactor,
        base_size: Size,
        base_font_size: f32,
    ) -> Self {
        body.rescale_text(zoom.scale_font(base_font_size));
        Self {
            paper: Paper::sized(zoom.scale_size(base_size)),
            content: VisualNode::theme_wrapper(zoom.get(), body),
        }
    }

    pub(crate) fn apply_zoom(&mut self, zoom: ZoomFactor, base_size: Size, base_font_size: f32) {
        self.paper.resize(zoom.scale_size(base_size));
        if let VisualNode::ThemeWrapper(wrapper) = &mut self.content {
            wrapper.scale = zoom.get();
        }
        let rescaled = self.content.rescale_text(zoom.scale_font(base_font_size));
        log::trace!("Rescaled {} text node(s) to zoom {}", rescaled, zoom);
    }

    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    /// The page's content root (the theme wrapper).
    pub fn content(&self) -> &VisualNode {
        &self.content
    }

    /// The tree the caller added, without the theme wrapper.
    pub fn body(&self) -> &VisualNode {
        match &self.content {
            VisualNode::ThemeWrapper(wrapper) => &wrapper.child,
            other => other,
        }
    }

    pub fn theme_scale(&self) -> f32 {
        match &self.content {
            VisualNode::ThemeWrapper(wrapper) => wrapper.scale,
            _ => 1.0,
        }
    }
}
