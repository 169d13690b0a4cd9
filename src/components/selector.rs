//! Selector component
//!
//! A horizontal single-choice picker. Owns an ordered list of labels and
//! the index of the selected one:
//! - ←/h moves to the previous label, →/l to the next
//! - Movement clamps at both ends (no wrap-around)
//! - `on_change` fires after every index change

use super::Callback;
use crate::element::{bold, dim, hbox, inverted, separator, text, Element};
use crate::event::Event;
use crate::traits::Component;

/// Selector component
///
/// Invariant: `selected < options.len()` whenever `options` is non-empty.
/// With no options the index stays at 0 and every navigation is a no-op.
#[derive(Debug, Default)]
pub struct Selector {
    options: Vec<String>,
    selected: usize,
    focused: bool,

    /// Invoked after each successful index change
    pub on_change: Callback,
}

impl Selector {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: 0,
            focused: false,
            on_change: Callback::Noop,
        }
    }

    /// Start at `index` (clamped to the last option)
    pub fn with_selected(mut self, index: usize) -> Self {
        self.set_selected(index);
        self
    }

    pub fn with_on_change(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_change = Callback::new(f);
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Label at the selected index, `None` when there are no options
    pub fn selected_label(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Host-side selection (clamped, does not fire `on_change`)
    pub fn set_selected(&mut self, index: usize) {
        self.selected = index.min(self.options.len().saturating_sub(1));
    }

    fn select_previous(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        tracing::debug!(selected = self.selected, "selector moved to previous");
        self.on_change.call();
        true
    }

    fn select_next(&mut self) -> bool {
        if self.selected + 1 >= self.options.len() {
            return false;
        }
        self.selected += 1;
        tracing::debug!(selected = self.selected, "selector moved to next");
        self.on_change.call();
        true
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for Selector {
    fn render(&self) -> Element {
        let highlight = if self.focused { inverted } else { bold };

        let mut children = Vec::with_capacity(self.options.len() * 2);
        for (i, option) in self.options.iter().enumerate() {
            if i != 0 {
                children.push(separator());
            }
            let style = if i == self.selected { highlight } else { dim };
            children.push(style(text(option.as_str())));
        }
        hbox(children)
    }

    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::ArrowLeft | Event::Character('h') => self.select_previous(),
            Event::ArrowRight | Event::Character('l') => self.select_next(),
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
        Some("←→/hl:select")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use ratatui::style::Modifier;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting(selector: Selector) -> (Selector, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let selector = selector.with_on_change(move || counter.set(counter.get() + 1));
        (selector, count)
    }

    fn modifiers(element: &Element) -> Vec<Modifier> {
        let Element::HBox(children) = element else {
            panic!("selector renders an hbox");
        };
        children
            .iter()
            .filter_map(|child| match child {
                Element::Text { style, .. } => Some(style.add_modifier),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_next_then_previous_fires_on_change() {
        let (mut selector, count) = counting(Selector::new(["A", "B", "C"]));

        assert!(selector.handle_event(Event::ArrowRight));
        assert_eq!(selector.selected(), 1);
        assert_eq!(count.get(), 1);

        assert!(selector.handle_event(Event::ArrowLeft));
        assert_eq!(selector.selected(), 0);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_mnemonic_keys() {
        let mut selector = Selector::new(["A", "B", "C"]);

        assert!(selector.handle_event(Event::Character('l')));
        assert!(selector.handle_event(Event::Character('l')));
        assert_eq!(selector.selected_label(), Some("C"));

        assert!(selector.handle_event(Event::Character('h')));
        assert_eq!(selector.selected_label(), Some("B"));
    }

    #[test]
    fn test_clamps_at_first() {
        let (mut selector, count) = counting(Selector::new(["A", "B", "C"]));

        for _ in 0..3 {
            assert!(!selector.handle_event(Event::ArrowLeft));
            assert_eq!(selector.selected(), 0);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_clamps_at_last() {
        let (mut selector, count) = counting(Selector::new(["A", "B", "C"]).with_selected(2));

        for _ in 0..3 {
            assert!(!selector.handle_event(Event::Character('l')));
            assert_eq!(selector.selected(), 2);
        }
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_empty_options_are_inert() {
        let (mut selector, count) = counting(Selector::new(Vec::<String>::new()));

        assert!(!selector.handle_event(Event::ArrowLeft));
        assert!(!selector.handle_event(Event::ArrowRight));
        assert_eq!(selector.selected(), 0);
        assert_eq!(selector.selected_label(), None);
        assert_eq!(count.get(), 0);
        assert_eq!(selector.render(), Element::HBox(Vec::new()));
    }

    #[test]
    fn test_unrecognized_events_change_nothing() {
        let (mut selector, count) = counting(Selector::new(["A", "B"]));

        for event in [
            Event::ArrowUp,
            Event::Return,
            Event::Backspace,
            Event::Tab,
            Event::Character('x'),
        ] {
            assert!(!selector.handle_event(event));
        }
        assert_eq!(selector.selected(), 0);
        assert_eq!(selector.options(), ["A", "B"]);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_with_selected_clamps() {
        let selector = Selector::new(["A", "B"]).with_selected(9);
        assert_eq!(selector.selected(), 1);
    }

    #[test]
    fn test_render_separators_between_labels() {
        let selector = Selector::new(["A", "B", "C"]);
        let rendered = selector.render();

        let Element::HBox(children) = &rendered else {
            panic!("selector renders an hbox");
        };
        assert_eq!(children.len(), 5);
        assert_eq!(children[1], Element::Separator);
        assert_eq!(children[3], Element::Separator);
        assert_eq!(rendered.plain_text(), "A│B│C");
    }

    #[test]
    fn test_render_styles_follow_focus() {
        let mut selector = Selector::new(["A", "B", "C"]).with_selected(1);

        let unfocused = modifiers(&selector.render());
        assert_eq!(
            unfocused,
            vec![Modifier::DIM, Modifier::BOLD, Modifier::DIM]
        );

        selector.set_focused(true);
        let focused = modifiers(&selector.render());
        assert_eq!(
            focused,
            vec![Modifier::DIM, Modifier::REVERSED, Modifier::DIM]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut selector = Selector::new(["A", "B", "C"]);
        selector.set_focused(true);
        selector.handle_event(Event::ArrowRight);

        assert_eq!(selector.render(), selector.render());
    }

    fn selector_event() -> impl Strategy<Value = Event> {
        prop_oneof![
            Just(Event::ArrowLeft),
            Just(Event::ArrowRight),
            Just(Event::Character('h')),
            Just(Event::Character('l')),
            Just(Event::Return),
            Just(Event::Tab),
            any::<char>().prop_map(Event::Character),
        ]
    }

    proptest! {
        #[test]
        fn test_index_stays_in_bounds(
            labels in prop::collection::vec("[a-z]{1,6}", 1..8),
            events in prop::collection::vec(selector_event(), 0..200),
        ) {
            let (mut selector, count) = counting(Selector::new(labels));
            let mut expected_changes = 0;

            for event in events {
                let before = selector.selected();
                let consumed = selector.handle_event(event);

                prop_assert!(selector.selected() < selector.options().len());
                prop_assert_eq!(consumed, selector.selected() != before, "event {:?}", event);
                if consumed {
                    expected_changes += 1;
                }
            }
            prop_assert_eq!(count.get(), expected_changes);
        }
    }
}
