//! State-change notification handlers

use std::fmt;

/// A handler a widget invokes after a state change
///
/// Defaults to [`Callback::Noop`], so widgets call it unconditionally and
/// hosts only set the handlers they care about.
#[derive(Default)]
pub enum Callback {
    #[default]
    Noop,
    Handler(Box<dyn FnMut()>),
}

impl Callback {
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Self::Handler(Box::new(f))
    }

    /// Run the handler (no-op for `Noop`)
    pub fn call(&mut self) {
        if let Self::Handler(f) = self {
            f();
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("Callback::Noop"),
            Self::Handler(_) => f.write_str("Callback::Handler(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_noop_by_default() {
        let mut callback = Callback::default();
        assert!(callback.is_noop());
        callback.call();
    }

    #[test]
    fn test_handler_runs_each_call() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let mut callback = Callback::new(move || counter.set(counter.get() + 1));

        callback.call();
        callback.call();

        assert_eq!(count.get(), 2);
        assert!(!callback.is_noop());
    }
}
