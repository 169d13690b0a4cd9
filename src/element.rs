//! Layout tree produced by widget rendering
//!
//! An [`Element`] is an immutable value: builders and decorators take
//! elements by value and return new ones, so there is no shared builder
//! state. Painting is left to ratatui through [`Element::to_line`] or the
//! [`Widget`] impl.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// Glyph painted for [`Element::Separator`]
pub const SEPARATOR: &str = "│";

/// A node in the layout tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Styled text leaf
    Text { content: String, style: Style },
    /// Vertical divider between horizontal siblings
    Separator,
    /// Children laid out left to right
    HBox(Vec<Element>),
}

/// Plain text leaf
pub fn text(content: impl Into<String>) -> Element {
    Element::Text {
        content: content.into(),
        style: Style::default(),
    }
}

/// Divider leaf
pub fn separator() -> Element {
    Element::Separator
}

/// Horizontal sequence
pub fn hbox(children: impl IntoIterator<Item = Element>) -> Element {
    Element::HBox(children.into_iter().collect())
}

pub fn bold(element: Element) -> Element {
    element.add_modifier(Modifier::BOLD)
}

pub fn dim(element: Element) -> Element {
    element.add_modifier(Modifier::DIM)
}

/// Reverse video
pub fn inverted(element: Element) -> Element {
    element.add_modifier(Modifier::REVERSED)
}

pub fn underlined(element: Element) -> Element {
    element.add_modifier(Modifier::UNDERLINED)
}

impl Element {
    /// Patch `style` onto every text leaf of this tree
    pub fn patch_style(self, style: Style) -> Self {
        match self {
            Element::Text {
                content,
                style: own,
            } => Element::Text {
                content,
                style: own.patch(style),
            },
            Element::Separator => Element::Separator,
            Element::HBox(children) => {
                Element::HBox(children.into_iter().map(|c| c.patch_style(style)).collect())
            }
        }
    }

    pub fn add_modifier(self, modifier: Modifier) -> Self {
        self.patch_style(Style::default().add_modifier(modifier))
    }

    /// Whether the tree paints nothing
    pub fn is_empty(&self) -> bool {
        match self {
            Element::Text { content, .. } => content.is_empty(),
            Element::Separator => false,
            Element::HBox(children) => children.iter().all(Element::is_empty),
        }
    }

    /// Width in terminal columns
    pub fn width(&self) -> usize {
        match self {
            Element::Text { content, .. } => content.width(),
            Element::Separator => SEPARATOR.width(),
            Element::HBox(children) => children.iter().map(Element::width).sum(),
        }
    }

    /// Concatenated text of every leaf, separators included
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_spans(&mut |span| out.push_str(&span.content));
        out
    }

    /// Flatten into a single ratatui line
    pub fn to_line(&self) -> Line<'static> {
        let mut spans = Vec::new();
        self.collect_spans(&mut |span| spans.push(span));
        Line::from(spans)
    }

    fn collect_spans(&self, sink: &mut impl FnMut(Span<'static>)) {
        match self {
            Element::Text { content, style } => sink(Span::styled(content.clone(), *style)),
            Element::Separator => sink(Span::raw(SEPARATOR)),
            Element::HBox(children) => {
                for child in children {
                    child.collect_spans(sink);
                }
            }
        }
    }
}

impl Widget for &Element {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.to_line().render(area, buf);
    }
}
