//! Text field component
//!
//! Single-line editable text with a cursor. The cursor counts characters,
//! not bytes, and always satisfies `cursor <= content.chars().count()`.
//!
//! Key map:
//! - printable characters insert at the cursor
//! - Backspace / Delete remove before / under the cursor
//! - ←/→ move one character, Home/End jump to the ends
//! - Enter fires `on_enter` without touching the content

use super::Callback;
use crate::element::{dim, hbox, inverted, text, underlined, Element};
use crate::event::Event;
use crate::traits::Component;

/// Text field component
#[derive(Debug, Default)]
pub struct TextField {
    content: String,
    placeholder: String,
    /// Cursor position in characters
    cursor: usize,
    focused: bool,

    /// Invoked after any change to the content
    pub on_change: Callback,
    /// Invoked on Enter
    pub on_enter: Callback,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Start with `content`, cursor at the end
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    pub fn with_on_change(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_change = Callback::new(f);
        self
    }

    pub fn with_on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_enter = Callback::new(f);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Host-side replacement of the content (cursor moves to the end,
    /// `on_change` does not fire)
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.len();
    }

    /// Host-side reset to the empty state
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Byte offset of the character at `char_index` (or the end)
    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn insert(&mut self, c: char) -> bool {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
        tracing::trace!(cursor = self.cursor, "text field insert");
        self.on_change.call();
        true
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        tracing::trace!(cursor = self.cursor, "text field backspace");
        self.on_change.call();
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.content.remove(at);
        tracing::trace!(cursor = self.cursor, "text field delete");
        self.on_change.call();
        true
    }

    fn move_cursor_to(&mut self, position: usize) -> bool {
        if position == self.cursor {
            return false;
        }
        self.cursor = position;
        true
    }

    fn commit(&mut self) -> bool {
        tracing::debug!(len = self.len(), "text field commit");
        self.on_enter.call();
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for TextField {
    fn render(&self) -> Element {
        if self.content.is_empty() {
            let placeholder = dim(text(self.placeholder.as_str()));
            return if self.focused {
                inverted(placeholder)
            } else {
                placeholder
            };
        }

        if !self.focused {
            return text(self.content.as_str());
        }

        // Cursor cell: the character under the cursor, or a blank past the end
        let start = self.byte_index(self.cursor);
        let (before, rest) = self.content.split_at(start);
        let mut chars = rest.chars();
        let at = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after = chars.as_str();

        hbox([text(before), underlined(text(at)), text(after)])
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Character(c) if !c.is_control() => self.insert(c),
            Event::Backspace => self.delete_backward(),
            Event::Delete => self.delete_forward(),
            Event::ArrowLeft => self.move_cursor_to(self.cursor.saturating_sub(1)),
            Event::ArrowRight => self.move_cursor_to((self.cursor + 1).min(self.len())),
            Event::Home => self.move_cursor_to(0),
            Event::End => self.move_cursor_to(self.len()),
            Event::Return => self.commit(),
            _ => false,
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("type:edit  ←→:cursor  Enter:submit")
    }
}
