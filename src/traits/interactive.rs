//! Interactive trait for feeding raw terminal keys to components
//!
//! Hosts read `crossterm` key events. This trait maps them into the
//! [`Event`] vocabulary and reports whether the focused widget took them.

use super::Component;
use crate::event::Event;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the host whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Create from a boolean (true = handled)
    pub fn from_bool(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }

    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        Self::from_bool(handled)
    }
}

impl From<Handled> for bool {
    fn from(handled: Handled) -> Self {
        handled.was_handled()
    }
}

/// Key handling for components
///
/// # Event Flow
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Host (global handlers: Ctrl+C, Tab)
///    │
///    │ if not handled
///    ▼
/// Event::from_key ── None ──▶ Handled::No
///    │
///    ▼
/// Focused component (Component::handle_event)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// Host (fallback handlers)
/// ```
pub trait Interactive: Component {
    /// Handle a raw key event
    ///
    /// Returns `Handled::Yes` if the component consumed the event,
    /// `Handled::No` if it should bubble up to the host.
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match Event::from_key(key) {
            Some(event) => self.handle_event(event).into(),
            None => Handled::No,
        }
    }
}

// Blanket implementation: every component gets key handling for free
impl<T: Component + ?Sized> Interactive for T {}
