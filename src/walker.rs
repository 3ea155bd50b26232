//! Depth-first traversal of a content tree.
//!
//! The walker is the single source of paint order: the preview and the PDF
//! exporter both consume the visits it produces, so what is shown on screen
//! is what gets exported.
//!
//! Rules:
//! - an invisible node and its whole subtree are skipped;
//! - a theme wrapper adds no offset and passes its scale down to its child;
//! - a container adds its own position to the offset of its children, which
//!   are visited in stored order;
//! - text labels, styled text and separators are leaves and are the only
//!   nodes reported to the visitor.

use crate::node::{Separator, StyledText, TextLabel, VisualNode};
use folio_types::{Position, Rect};
use std::convert::Infallible;

/// A leaf node reached by the walker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leaf<'a> {
    TextLabel(&'a TextLabel),
    StyledText(&'a StyledText),
    Separator(&'a Separator),
}

impl<'a> Leaf<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            Leaf::TextLabel(_) => "TextLabel",
            Leaf::StyledText(_) => "StyledText",
            Leaf::Separator(_) => "Separator",
        }
    }

    /// The leaf's text, borrowed from the tree.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Leaf::TextLabel(l) => Some(l.text.as_str()),
            Leaf::StyledText(t) => Some(t.text.as_str()),
            Leaf::Separator(_) => None,
        }
    }
}

/// One visible leaf with its bounds in the coordinate space of the tree root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeafVisit<'a> {
    pub leaf: Leaf<'a>,
    /// Absolute bounds: the leaf's own position plus the positions of all
    /// ancestor containers.
    pub bounds: Rect,
    /// Scale of the innermost enclosing theme wrapper, if any.
    pub theme_scale: Option<f32>,
    /// Number of containers between the root and this leaf.
    pub depth: usize,
}

/// Walks `root`, calling `visit` for every visible leaf in paint order.
///
/// The first error returned by `visit` stops the walk and is returned.
pub fn walk<'a, E, F>(root: &'a VisualNode, visit: &mut F) -> Result<(), E>
where
    F: FnMut(LeafVisit<'a>) -> Result<(), E>,
{
    walk_node(root, Position::zero(), None, 0, visit)
}

fn walk_node<'a, E, F>(
    node: &'a VisualNode,
    offset: Position,
    theme_scale: Option<f32>,
    depth: usize,
    visit: &mut F,
) -> Result<(), E>
where
    F: FnMut(LeafVisit<'a>) -> Result<(), E>,
{
    if !node.is_visible() {
        return Ok(());
    }

    let leaf = match node {
        VisualNode::ThemeWrapper(wrapper) => {
            return walk_node(&wrapper.child, offset, Some(wrapper.scale), depth, visit);
        }
        VisualNode::Container(container) => {
            let origin = offset + container.frame.position;
            for child in &container.children {
                walk_node(child, origin, theme_scale, depth + 1, visit)?;
            }
            return Ok(());
        }
        VisualNode::TextLabel(label) => Leaf::TextLabel(label),
        VisualNode::StyledText(text) => Leaf::StyledText(text),
        VisualNode::Separator(separator) => Leaf::Separator(separator),
    };

    let frame = node.frame();
    visit(LeafVisit {
        leaf,
        bounds: Rect::from_parts(offset + frame.position, frame.size),
        theme_scale,
        depth,
    })
}

/// Collects every visible leaf of `root` in paint order.
pub fn collect_leaves(root: &VisualNode) -> Vec<LeafVisit<'_>> {
    let mut visits = Vec::new();
    let result: Result<(), Infallible> = walk(root, &mut |visit| {
        visits.push(visit);
        Ok(())
    });
    match result {
        Ok(()) => visits,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_root_is_visited_at_its_own_position() {
        let root = VisualNode::label("hi").at(3.0, 4.0).sized(10.0, 5.0);
        let visits = collect_leaves(&root);
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].bounds, Rect::new(3.0, 4.0, 10.0, 5.0));
        assert_eq!(visits[0].depth, 0);
        assert_eq!(visits[0].theme_scale, None);
    }

    #[test]
    fn containers_accumulate_offsets() {
        let root = VisualNode::container(vec![
            VisualNode::container(vec![VisualNode::separator().at(1.0, 2.0).sized(50.0, 4.0)])
                .at(100.0, 200.0),
        ])
        .at(10.0, 20.0);
        let visits = collect_leaves(&root);
        assert_eq!(visits[0].bounds.origin(), Position::new(111.0, 222.0));
        assert_eq!(visits[0].depth, 2);
    }

    #[test]
    fn wrapper_position_is_ignored_and_scale_propagates() {
        let root = VisualNode::theme_wrapper(
            2.0,
            VisualNode::container(vec![VisualNode::label("x").at(5.0, 5.0)]).at(10.0, 10.0),
        )
        .at(999.0, 999.0);
        let visits = collect_leaves(&root);
        assert_eq!(visits[0].bounds.origin(), Position::new(15.0, 15.0));
        assert_eq!(visits[0].theme_scale, Some(2.0));
    }

    #[test]
    fn innermost_wrapper_scale_wins() {
        let root = VisualNode::theme_wrapper(
            2.0,
            VisualNode::container(vec![
                VisualNode::label("outer"),
                VisualNode::theme_wrapper(0.5, VisualNode::label("inner")),
            ]),
        );
        let scales: Vec<_> = collect_leaves(&root).iter().map(|v| v.theme_scale).collect();
        assert_eq!(scales, vec![Some(2.0), Some(0.5)]);
    }

    #[test]
    fn hidden_subtrees_are_skipped() {
        let root = VisualNode::container(vec![
            VisualNode::label("a"),
            VisualNode::container(vec![VisualNode::label("hidden child")]).hidden(),
            VisualNode::theme_wrapper(1.0, VisualNode::label("also hidden")).hidden(),
            VisualNode::separator().hidden(),
            VisualNode::styled_text("b", 14.0),
        ]);
        let texts: Vec<_> = collect_leaves(&root).iter().filter_map(|v| v.leaf.text()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn visitor_error_stops_the_walk() {
        let root = VisualNode::container(vec![
            VisualNode::label("1"),
            VisualNode::label("2"),
            VisualNode::label("3"),
        ]);
        let mut seen = 0;
        let result = walk(&root, &mut |visit: LeafVisit<'_>| {
            seen += 1;
            if visit.leaf.text() == Some("2") {
                return Err("stop");
            }
            Ok(())
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(seen, 2);
    }

    #[test]
    fn leaf_text_outlives_the_visits() {
        let root = VisualNode::container(vec![VisualNode::label("kept")]);
        let text = {
            let visits = collect_leaves(&root);
            visits[0].leaf.text()
        };
        assert_eq!(text, Some("kept"));
    }
}
