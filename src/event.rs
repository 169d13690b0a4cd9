//! Input event vocabulary
//!
//! A closed set of events widgets understand. Raw terminal keys are mapped
//! into this vocabulary by [`Event::from_key`]; anything without a mapping
//! never reaches a widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single input event delivered to a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// One typed character
    Character(char),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Commit / enter
    Return,
    Escape,
    Tab,
    /// Shift+Tab
    BackTab,
    Home,
    End,
}

impl Event {
    /// Map a terminal key event into the widget vocabulary
    ///
    /// Returns `None` for key releases, for characters chorded with Ctrl or
    /// Alt (those are host shortcuts), and for keys with no widget meaning.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let event = match key.code {
            KeyCode::Char(c) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return None;
                }
                Event::Character(c)
            }
            KeyCode::Left => Event::ArrowLeft,
            KeyCode::Right => Event::ArrowRight,
            KeyCode::Up => Event::ArrowUp,
            KeyCode::Down => Event::ArrowDown,
            KeyCode::Backspace => Event::Backspace,
            KeyCode::Delete => Event::Delete,
            KeyCode::Enter => Event::Return,
            KeyCode::Esc => Event::Escape,
            KeyCode::Tab => Event::Tab,
            KeyCode::BackTab => Event::BackTab,
            KeyCode::Home => Event::Home,
            KeyCode::End => Event::End,
            _ => return None,
        };

        Some(event)
    }

    /// Whether this is a printable character event
    pub fn is_printable(&self) -> bool {
        matches!(self, Event::Character(c) if !c.is_control())
    }
}

impl From<char> for Event {
    fn from(c: char) -> Self {
        Event::Character(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_maps_plain_keys() {
        let key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(Event::from_key(key), Some(Event::ArrowLeft));

        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(Event::from_key(key), Some(Event::Return));

        let key = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(Event::from_key(key), Some(Event::Character('X')));
    }

    #[test]
    fn test_ignores_chorded_chars() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Event::from_key(key), None);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(Event::from_key(key), None);
    }

    #[test]
    fn test_ignores_release_and_unmapped() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Event::from_key(release), None);

        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(Event::from_key(key), None);
    }

    #[test]
    fn test_printable() {
        assert!(Event::Character('a').is_printable());
        assert!(Event::Character('é').is_printable());
        assert!(!Event::Character('\u{7}').is_printable());
        assert!(!Event::Return.is_printable());
    }
}
