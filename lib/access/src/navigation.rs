//! Navigation executor seam.
//!
//! The gate only decides; a [`Navigator`] carries the decision out. The
//! browser build replaces the current location, tests record the targets.

use std::cell::RefCell;
use std::rc::Rc;

use crate::gate::NavigationDecision;

/// Applies redirects decided by the gate or by session teardown.
pub trait Navigator {
    /// Replaces the current location with `path`.
    fn redirect(&self, path: &str);

    /// Applies a navigation decision. `Allow` does nothing.
    fn apply(&self, decision: NavigationDecision) {
        if let NavigationDecision::RedirectTo(path) = decision {
            self.redirect(path);
        }
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

/// Navigator that records redirect targets instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no recorded redirects.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every redirect target, oldest first.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    /// Returns the most recent redirect target.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.redirects.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_redirect_records_target() {
        let navigator = RecordingNavigator::new();
        navigator.apply(NavigationDecision::RedirectTo("/login"));
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[test]
    fn apply_allow_does_nothing() {
        let navigator = RecordingNavigator::new();
        navigator.apply(NavigationDecision::Allow);
        assert!(navigator.redirects().is_empty());
        assert_eq!(navigator.last(), None);
    }
}
