//! Focus-aware interactive widgets for terminal UIs
//!
//! Widgets hold their own interactive state, render it into an immutable
//! [`Element`] tree, and consume [`Event`]s to mutate that state and notify
//! observers through [`Callback`]s.
//!
//! # Architecture
//!
//! ```text
//!            Event                         render()
//!   host ────────────▶ handle_event ──▶ state ──────────▶ Element
//!                          │                                 │
//!                          ▼                                 ▼
//!                  on_change / on_enter          ratatui (paints cells)
//! ```
//!
//! Events flow in and produce a state mutation plus an optional callback.
//! Render reads state and produces output; it never mutates.
//!
//! # Example
//!
//! ```
//! use knobs::{Component, Event, Selector};
//!
//! let mut selector = Selector::new(["Low", "Medium", "High"]);
//! assert!(selector.handle_event(Event::ArrowRight));
//! assert_eq!(selector.selected_label(), Some("Medium"));
//! ```

pub mod components;
pub mod element;
pub mod event;
pub mod traits;

pub use components::{Callback, Selector, TextField};
pub use element::Element;
pub use event::Event;
pub use traits::{Component, Handled, Interactive};
