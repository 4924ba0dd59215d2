//! Browser navigation seam

use std::cell::RefCell;

use web_sys::Window;

/// Performs a full navigation to an href
pub trait Navigate {
    fn navigate(&self, href: &str);
}

/// Navigates by assigning `window.location.href`
#[derive(Debug, Clone)]
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigate for LocationNavigator {
    fn navigate(&self, href: &str) {
        if let Err(e) = self.window.location().set_href(href) {
            web_sys::console::error_1(&format!("navigation to '{href}' failed: {e:?}").into());
        }
    }
}

/// Collects hrefs instead of navigating
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, href: &str) {
        self.visited.borrow_mut().push(href.to_string());
    }
}
