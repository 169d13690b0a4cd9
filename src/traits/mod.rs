//! Component trait system
//!
//! This module defines the contract every widget implements. A host holds
//! widgets (often as `&mut dyn Component`), decides which one is focused,
//! delivers events to it, and paints whatever `render` returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Host                                │
//! │     (owns the terminal, routes focus, drains callbacks)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!        ┌──────────┐                    ┌───────────┐
//!        │ Selector │                    │ TextField │
//!        └──────────┘                    └───────────┘
//!              │                               │
//!              └───────────────┬───────────────┘
//!                              │
//!                     Implements traits:
//!                  Component (+ Interactive)
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - render + event handling + focus flag
//! - [`Interactive`] - raw terminal keys, blanket-implemented for every component

mod component;
mod interactive;

pub use component::Component;
pub use interactive::{Handled, Interactive};
