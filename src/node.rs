//! The visual node tree a page is built from.
//!
//! A content tree is a closed set of node kinds. Containers and theme
//! wrappers own their children, so every tree is finite and acyclic by
//! construction.

use crate::config::BASE_FONT_SIZE;
use folio_types::{Position, Size};
use serde::{Deserialize, Serialize};

fn default_visible() -> bool {
    true
}

fn default_font_size() -> f32 {
    BASE_FONT_SIZE
}

fn default_scale() -> f32 {
    1.0
}

/// Placement shared by every node: position relative to the parent, size,
/// and visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            position: Position::zero(),
            size: Size::zero(),
            visible: true,
        }
    }
}

/// An ordered group of child nodes. Children are positioned relative to the
/// container and painted in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Container {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(default)]
    pub children: Vec<VisualNode>,
}

/// Plain text whose size follows the viewer's zoom.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextLabel {
    #[serde(flatten)]
    pub frame: Frame,
    pub text: String,
}

/// Text carrying its own font size in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledText {
    #[serde(flatten)]
    pub frame: Frame,
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

/// A horizontal rule drawn across the middle of its frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Separator {
    #[serde(flatten)]
    pub frame: Frame,
}

/// A transparent wrapper applying a size multiplier to the theme of its
/// subtree. It never offsets its child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeWrapper {
    #[serde(flatten)]
    pub frame: Frame,
    #[serde(default = "default_scale")]
    pub scale: f32,
    pub child: Box<VisualNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum VisualNode {
    Container(Container),
    TextLabel(TextLabel),
    StyledText(StyledText),
    Separator(Separator),
    ThemeWrapper(ThemeWrapper),
}

/// The kind of a [`VisualNode`], without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    TextLabel,
    StyledText,
    Separator,
    ThemeWrapper,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::TextLabel => "TextLabel",
            NodeKind::StyledText => "StyledText",
            NodeKind::Separator => "Separator",
            NodeKind::ThemeWrapper => "ThemeWrapper",
        }
    }
}

impl VisualNode {
    pub fn label(text: impl Into<String>) -> Self {
        VisualNode::TextLabel(TextLabel {
            frame: Frame::default(),
            text: text.into(),
        })
    }

    pub fn styled_text(text: impl Into<String>, font_size: f32) -> Self {
        VisualNode::StyledText(StyledText {
            frame: Frame::default(),
            text: text.into(),
            font_size,
        })
    }

    pub fn separator() -> Self {
        VisualNode::Separator(Separator::default())
    }

    pub fn container(children: Vec<VisualNode>) -> Self {
        VisualNode::Container(Container {
            frame: Frame::default(),
            children,
        })
    }

    /// A container that stacks `children` top to bottom, `gap` apart.
    ///
    /// Each child is moved to x = 0 and stretched to `width`; heights are kept.
    /// The container is sized to fit its children.
    pub fn vbox(width: f32, gap: f32, mut children: Vec<VisualNode>) -> Self {
        let mut y = 0.0;
        for (i, child) in children.iter_mut().enumerate() {
            if i > 0 {
                y += gap;
            }
            let frame = child.frame_mut();
            frame.position = Position::new(0.0, y);
            frame.size.width = width;
            y += frame.size.height;
        }
        VisualNode::Container(Container {
            frame: Frame {
                size: Size::new(width, y),
                ..Frame::default()
            },
            children,
        })
    }

    pub fn theme_wrapper(scale: f32, child: VisualNode) -> Self {
        VisualNode::ThemeWrapper(ThemeWrapper {
            frame: Frame::default(),
            scale,
            child: Box::new(child),
        })
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.frame_mut().position = Position::new(x, y);
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.frame_mut().size = Size::new(width, height);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.frame_mut().visible = false;
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            VisualNode::Container(_) => NodeKind::Container,
            VisualNode::TextLabel(_) => NodeKind::TextLabel,
            VisualNode::StyledText(_) => NodeKind::StyledText,
            VisualNode::Separator(_) => NodeKind::Separator,
            VisualNode::ThemeWrapper(_) => NodeKind::ThemeWrapper,
        }
    }

    pub fn frame(&self) -> &Frame {
        match self {
            VisualNode::Container(n) => &n.frame,
            VisualNode::TextLabel(n) => &n.frame,
            VisualNode::StyledText(n) => &n.frame,
            VisualNode::Separator(n) => &n.frame,
            VisualNode::ThemeWrapper(n) => &n.frame,
        }
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        match self {
            VisualNode::Container(n) => &mut n.frame,
            VisualNode::TextLabel(n) => &mut n.frame,
            VisualNode::StyledText(n) => &mut n.frame,
            VisualNode::Separator(n) => &mut n.frame,
            VisualNode::ThemeWrapper(n) => &mut n.frame,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.frame().visible
    }

    /// Direct children: a container's list, a wrapper's single child, or nothing.
    pub fn children(&self) -> &[VisualNode] {
        match self {
            VisualNode::Container(c) => &c.children,
            VisualNode::ThemeWrapper(w) => std::slice::from_ref(w.child.as_ref()),
            VisualNode::TextLabel(_) | VisualNode::StyledText(_) | VisualNode::Separator(_) => &[],
        }
    }

    /// Sets the font size of every styled-text node in this subtree, visible
    /// or not, and returns how many nodes were changed.
    pub fn rescale_text(&mut self, font_size: f32) -> usize {
        match self {
            VisualNode::StyledText(t) => {
                t.font_size = font_size;
                1
            }
            VisualNode::Container(c) => c
                .children
                .iter_mut()
                .map(|child| child.rescale_text(font_size))
                .sum(),
            VisualNode::ThemeWrapper(w) => w.child.rescale_text(font_size),
            VisualNode::TextLabel(_) | VisualNode::Separator(_) => 0,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(VisualNode::node_count).sum::<usize>()
    }
}

impl From<Container> for VisualNode {
    fn from(node: Container) -> Self {
        VisualNode::Container(node)
    }
}

impl From<TextLabel> for VisualNode {
    fn from(node: TextLabel) -> Self {
        VisualNode::TextLabel(node)
    }
}

impl From<StyledText> for VisualNode {
    fn from(node: StyledText) -> Self {
        VisualNode::StyledText(node)
    }
}

impl From<Separator> for VisualNode {
    fn from(node: Separator) -> Self {
        VisualNode::Separator(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_frame() {
        let node = VisualNode::styled_text("Total: 100", 14.0)
            .at(50.0, 50.0)
            .sized(200.0, 20.0);
        assert_eq!(node.kind(), NodeKind::StyledText);
        assert_eq!(node.frame().position, Position::new(50.0, 50.0));
        assert_eq!(node.frame().size, Size::new(200.0, 20.0));
        assert!(node.is_visible());
        assert!(!node.hidden().is_visible());
    }

    #[test]
    fn vbox_stacks_children() {
        let node = VisualNode::vbox(
            300.0,
            4.0,
            vec![
                VisualNode::label("a").sized(10.0, 20.0),
                VisualNode::separator().sized(0.0, 8.0),
                VisualNode::label("b").at(99.0, 99.0).sized(10.0, 20.0),
            ],
        );
        let ys: Vec<f32> = node.children().iter().map(|c| c.frame().position.y).collect();
        assert_eq!(ys, vec![0.0, 24.0, 36.0]);
        assert!(node.children().iter().all(|c| c.frame().position.x == 0.0));
        assert!(node.children().iter().all(|c| c.frame().size.width == 300.0));
        assert_eq!(node.frame().size, Size::new(300.0, 56.0));
    }

    #[test]
    fn rescale_reaches_nested_and_hidden_text() {
        let mut tree = VisualNode::container(vec![
            VisualNode::styled_text("a", 10.0),
            VisualNode::container(vec![VisualNode::styled_text("b", 12.0).hidden()]).hidden(),
            VisualNode::theme_wrapper(1.0, VisualNode::styled_text("c", 9.0)),
            VisualNode::label("not resized"),
        ]);
        assert_eq!(tree.rescale_text(28.0), 3);

        fn sizes(node: &VisualNode, out: &mut Vec<f32>) {
            if let VisualNode::StyledText(t) = node {
                out.push(t.font_size);
            }
            for child in node.children() {
                sizes(child, out);
            }
        }
        let mut out = Vec::new();
        sizes(&tree, &mut out);
        assert_eq!(out, vec![28.0, 28.0, 28.0]);
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{
            "type": "container",
            "position": {"x": 10, "y": 20},
            "children": [
                {"type": "styledText", "text": "Total", "fontSize": 16},
                {"type": "textLabel", "text": "hi", "visible": false},
                {"type": "separator", "size": {"width": 100, "height": 8}}
            ]
        }"#;
        let node: VisualNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.node_count(), 4);
        assert_eq!(node.frame().position, Position::new(10.0, 20.0));
        match &node.children()[0] {
            VisualNode::StyledText(t) => assert_eq!(t.font_size, 16.0),
            other => panic!("unexpected node {:?}", other.kind()),
        }
        assert!(!node.children()[1].is_visible());
        assert_eq!(node.children()[2].frame().size, Size::new(100.0, 8.0));
    }

    #[test]
    fn styled_text_defaults_to_base_font_size() {
        let node: VisualNode = serde_json::from_str(r#"{"type": "styledText", "text": "x"}"#).unwrap();
        match node {
            VisualNode::StyledText(t) => assert_eq!(t.font_size, BASE_FONT_SIZE),
            other => panic!("unexpected node {:?}", other.kind()),
        }
    }
}
