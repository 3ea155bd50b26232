//! Headless on-screen preview.
//!
//! A [`DisplayList`] is what the preview window would paint: the pages
//! stacked vertically with their visible leaves in paint order, in screen
//! units. It is produced by the same walker the PDF exporter uses.

use crate::node::NodeKind;
use crate::viewer::DocViewer;
use crate::walker::{collect_leaves, Leaf};
use folio_types::{Color, Position, Rect, Size};
use svg::Document;
use svg::node::Text as TextNode;
use svg::node::element::{Line, Rectangle, Text};

const BACKGROUND: Color = Color::rgb(45, 45, 48);

/// What a preview item paints.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    Label { text: String, font_size: f32 },
    StyledText { text: String, font_size: f32 },
    Separator { color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    /// Bounds in display-list space (page origin already applied).
    pub bounds: Rect,
    pub content: PreviewContent,
}

impl PreviewItem {
    pub fn kind(&self) -> NodeKind {
        match self.content {
            PreviewContent::Label { .. } => NodeKind::TextLabel,
            PreviewContent::StyledText { .. } => NodeKind::StyledText,
            PreviewContent::Separator { .. } => NodeKind::Separator,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            PreviewContent::Label { text, .. } | PreviewContent::StyledText { text, .. } => {
                Some(text)
            }
            PreviewContent::Separator { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage {
    /// The paper rectangle in display-list space.
    pub paper: Rect,
    pub paper_color: Color,
    pub items: Vec<PreviewItem>,
}

/// The painted form of a whole viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    pub size: Size,
    pub pages: Vec<PreviewPage>,
}

impl DisplayList {
    pub fn build(viewer: &DocViewer) -> Self {
        let config = viewer.config();
        let mut pages = Vec::with_capacity(viewer.page_count());
        let mut cursor_y = 0.0;
        let mut width: f32 = 0.0;

        for page in viewer.pages() {
            let paper = page.paper();
            let origin = Position::new(0.0, cursor_y);
            let items = collect_leaves(page.content())
                .into_iter()
                .map(|visit| {
                    let content = match visit.leaf {
                        Leaf::TextLabel(label) => PreviewContent::Label {
                            text: label.text.clone(),
                            font_size: config.base_font_size * visit.theme_scale.unwrap_or(1.0),
                        },
                        Leaf::StyledText(styled) => PreviewContent::StyledText {
                            text: styled.text.clone(),
                            font_size: styled.font_size,
                        },
                        Leaf::Separator(_) => PreviewContent::Separator {
                            color: config.separator_color,
                        },
                    };
                    PreviewItem {
                        bounds: visit.bounds.translate(origin),
                        content,
                    }
                })
                .collect();

            pages.push(PreviewPage {
                paper: Rect::from_parts(origin, paper.size),
                paper_color: paper.color,
                items,
            });
            width = width.max(paper.size.width);
            cursor_y += paper.size.height + config.page_spacing;
        }

        let height = if pages.is_empty() {
            0.0
        } else {
            cursor_y - config.page_spacing
        };
        log::debug!("Built display list with {} page(s)", pages.len());
        Self {
            size: Size::new(width, height),
            pages,
        }
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(|p| p.items.len()).sum()
    }

    /// Every item of every page, in paint order.
    pub fn items(&self) -> impl Iterator<Item = &PreviewItem> {
        self.pages.iter().flat_map(|p| p.items.iter())
    }

    pub fn to_svg_document(&self) -> Document {
        let mut document = Document::new()
            .set("width", self.size.width)
            .set("height", self.size.height)
            .set("viewBox", (0.0, 0.0, self.size.width, self.size.height))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", BACKGROUND.to_hex()),
            );

        for page in &self.pages {
            document = document.add(
                Rectangle::new()
                    .set("x", page.paper.x)
                    .set("y", page.paper.y)
                    .set("width", page.paper.width)
                    .set("height", page.paper.height)
                    .set("fill", page.paper_color.to_hex()),
            );
            for item in &page.items {
                let b = item.bounds;
                document = match &item.content {
                    PreviewContent::Label { text, font_size }
                    | PreviewContent::StyledText { text, font_size } => document.add(
                        Text::new()
                            .set("x", b.x)
                            .set("y", b.y + font_size)
                            .set("font-family", "Helvetica, Arial, sans-serif")
                            .set("font-size", *font_size)
                            .add(TextNode::new(escape_xml(text))),
                    ),
                    PreviewContent::Separator { color } => {
                        let middle_y = b.y + b.height / 2.0;
                        document.add(
                            Line::new()
                                .set("x1", b.x)
                                .set("y1", middle_y)
                                .set("x2", b.right())
                                .set("y2", middle_y)
                                .set("stroke", color.to_hex())
                                .set("stroke-width", 1),
                        )
                    }
                };
            }
        }
        document
    }

    pub fn to_svg(&self) -> String {
        self.to_svg_document().to_string()
    }
}

/// Escapes the XML special characters of text content.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
