//! Link classification for exit transitions

/// Whether a click on a link with this `href` is left to the browser.
///
/// In-page anchors (`#...`) and anything containing `http` count as native.
/// The substring test is deliberately coarse and also matches relative paths
/// such as `/http-docs`; existing pages rely on that, so it stays as is.
#[must_use]
pub fn is_native_navigation(href: &str) -> bool {
    href.starts_with('#') || href.contains("http")
}

/// A navigation deferred until the exit animation has played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    destination: String,
}

impl TransitionRequest {
    /// Builds a request for an intercepted link, or `None` when the browser
    /// should handle the click itself
    #[must_use]
    pub fn from_href(href: &str) -> Option<Self> {
        (!is_native_navigation(href)).then(|| Self {
            destination: href.to_string(),
        })
    }

    /// The href exactly as written on the link
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}
