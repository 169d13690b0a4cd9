//! Core component trait - the foundation of the widget system
//!
//! Every widget implements `Component`. The trait covers the two call
//! surfaces a host uses (`render` and `handle_event`) plus the focus flag
//! that an external focus manager toggles.

use crate::element::Element;
use crate::event::Event;

/// Base trait for all widgets
///
/// # Contract
///
/// - `render` is a pure function of state and focus. Calling it twice
///   without an intervening `handle_event` yields equal trees.
/// - `handle_event` is the only mutator. It returns `true` iff the widget
///   recognized the event and performed a transition. Unrecognized events
///   return `false` and leave every field untouched.
/// - Callbacks fire synchronously before `handle_event` returns. A callback
///   must not deliver events back into the same widget; queue them instead.
///
/// # Example
///
/// ```
/// use knobs::{Component, Event, TextField};
///
/// let mut field = TextField::new().with_placeholder("name");
/// field.set_focused(true);
/// field.handle_event(Event::Character('x'));
/// assert_eq!(field.render().plain_text(), "x ");
/// ```
pub trait Component {
    /// Build the layout tree for the current state
    fn render(&self) -> Element;

    /// Deliver one event
    ///
    /// Returns `true` if the event was consumed, `false` if it should be
    /// offered to other handlers.
    fn handle_event(&mut self, event: Event) -> bool;

    /// Whether this widget is the current target of input
    fn focused(&self) -> bool;

    /// Called by the focus manager; widgets never toggle this themselves
    fn set_focused(&mut self, focused: bool);

    /// Hint text for a status bar when this widget is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
