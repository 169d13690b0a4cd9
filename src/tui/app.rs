// TUI application state
//
// The demo host: owns one selector and one text field, decides which one is
// focused, routes keys to it, and reacts to widget callbacks.
//
// Callbacks never touch the App directly. They push a `Notice` into a shared
// queue that the App drains after the widget's handle_event has returned, so
// no event is ever delivered re-entrantly from inside a callback.

use crate::config::Config;
use crate::logging::LogBuffer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use knobs::{Component, Handled, Interactive, Selector, TextField};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Maximum number of submitted lines kept for display
const MAX_SUBMITTED: usize = 100;

/// Which widget receives input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    #[default]
    Selector,
    TextField,
}

impl FocusTarget {
    /// Cycle to next focusable widget (Tab behavior)
    pub fn next(self) -> Self {
        match self {
            Self::Selector => Self::TextField,
            Self::TextField => Self::Selector,
        }
    }

    /// Cycle to previous focusable widget (Shift+Tab behavior)
    pub fn prev(self) -> Self {
        // Two targets: previous and next coincide
        self.next()
    }
}

/// Something a widget callback reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SelectionChanged,
    TextChanged,
    Submitted,
}

type NoticeQueue = Rc<RefCell<VecDeque<Notice>>>;

fn notify(queue: &NoticeQueue, notice: Notice) -> impl FnMut() + 'static {
    let queue = Rc::clone(queue);
    move || queue.borrow_mut().push_back(notice)
}

/// Main application state for the TUI
pub struct App {
    pub selector: Selector,
    pub text_field: TextField,

    /// Widget currently receiving input
    pub focus: FocusTarget,

    /// Lines submitted from the text field, oldest first
    pub submitted: VecDeque<String>,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    notices: NoticeQueue,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer) -> Self {
        let notices = NoticeQueue::default();

        let selector = Selector::new(config.selector.options.iter().cloned())
            .with_selected(config.selector.selected)
            .with_on_change(notify(&notices, Notice::SelectionChanged));

        let text_field = TextField::new()
            .with_placeholder(config.text_field.placeholder.as_str())
            .with_on_change(notify(&notices, Notice::TextChanged))
            .with_on_enter(notify(&notices, Notice::Submitted));

        let mut app = Self {
            selector,
            text_field,
            focus: FocusTarget::default(),
            submitted: VecDeque::new(),
            log_buffer,
            should_quit: false,
            notices,
        };
        app.set_focus(FocusTarget::default());
        app
    }

    pub fn focused(&self) -> &dyn Component {
        match self.focus {
            FocusTarget::Selector => &self.selector,
            FocusTarget::TextField => &self.text_field,
        }
    }

    pub fn focused_mut(&mut self) -> &mut dyn Component {
        match self.focus {
            FocusTarget::Selector => &mut self.selector,
            FocusTarget::TextField => &mut self.text_field,
        }
    }

    /// Move focus, keeping every widget's flag consistent
    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
        self.selector.set_focused(target == FocusTarget::Selector);
        self.text_field.set_focused(target == FocusTarget::TextField);
        tracing::debug!(?target, "focus moved");
    }

    /// Handle keyboard input
    /// Layered dispatch: Global → Focused widget → Fallback
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.kind == KeyEventKind::Release {
            return Handled::No;
        }

        // Layer 1: Global keys that no widget may swallow
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Handled::Yes;
        }

        // Layer 2: Focused widget
        let handled = self.focused_mut().handle_key(key);
        self.drain_notices();
        if handled.was_handled() {
            return handled;
        }

        // Layer 3: Fallback navigation
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.set_focus(self.focus.next()),
            KeyCode::BackTab | KeyCode::Up => self.set_focus(self.focus.prev()),
            KeyCode::Esc => self.should_quit = true,
            _ => return Handled::No,
        }
        Handled::Yes
    }

    /// React to callbacks queued during the last event
    fn drain_notices(&mut self) {
        loop {
            // Release the borrow before reacting
            let Some(notice) = self.notices.borrow_mut().pop_front() else {
                break;
            };

            match notice {
                Notice::SelectionChanged => {
                    tracing::info!(
                        selected = self.selector.selected(),
                        label = self.selector.selected_label().unwrap_or_default(),
                        "selection changed"
                    );
                }
                Notice::TextChanged => {
                    tracing::debug!(len = self.text_field.len(), "text changed");
                }
                Notice::Submitted => self.submit(),
            }
        }
    }

    fn submit(&mut self) {
        let line = self.text_field.content().to_string();
        if line.is_empty() {
            tracing::debug!("ignoring empty submit");
            return;
        }

        tracing::info!(text = line.as_str(), "submitted");
        if self.submitted.len() >= MAX_SUBMITTED {
            self.submitted.pop_front();
        }
        self.submitted.push_back(line);
        self.text_field.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_with_selector_focused() {
        let app = app();
        assert_eq!(app.focus, FocusTarget::Selector);
        assert!(app.selector.focused());
        assert!(!app.text_field.focused());
        assert_eq!(app.focused().focus_hint(), app.selector.focus_hint());
    }

    #[test]
    fn test_tab_moves_focus_flags() {
        let mut app = app();

        assert_eq!(app.handle_key(key(KeyCode::Tab)), Handled::Yes);
        assert_eq!(app.focus, FocusTarget::TextField);
        assert!(!app.selector.focused());
        assert!(app.text_field.focused());

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.focus, FocusTarget::Selector);
    }

    #[test]
    fn test_keys_reach_only_the_focused_widget() {
        let mut app = app();

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selector.selected(), 1);

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
        type_str(&mut app, "hl");

        assert_eq!(app.selector.selected(), 1);
        assert_eq!(app.text_field.content(), "hl");
    }

    #[test]
    fn test_enter_submits_and_clears() {
        let mut app = app();
        app.set_focus(FocusTarget::TextField);

        type_str(&mut app, "hello");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Handled::Yes);

        assert_eq!(app.submitted, VecDeque::from(["hello".to_string()]));
        assert!(app.text_field.is_empty());
        assert_eq!(app.text_field.cursor(), 0);
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut app = app();
        app.set_focus(FocusTarget::TextField);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.submitted.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut interrupted = app();
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_quit);

        let mut escaped = app();
        escaped.set_focus(FocusTarget::TextField);
        escaped.handle_key(key(KeyCode::Esc));
        assert!(escaped.should_quit);
    }

    #[test]
    fn test_unhandled_key_bubbles() {
        let mut app = app();
        assert_eq!(app.handle_key(key(KeyCode::F(2))), Handled::No);
        assert!(!app.should_quit);
    }
}
