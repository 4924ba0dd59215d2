//! Error types for effect setup
//!
//! Missing page elements are not errors: controllers degrade to no-ops.
//! `FxError` covers the failures that are real setup problems.

use wasm_bindgen::JsValue;

/// Errors that can occur while wiring effects onto a page
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FxError {
    /// No global `window` (not running in a browser)
    #[error("window is not available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("document is not available")]
    DocumentNotAvailable,

    /// The browser rejected a CSS selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// `addEventListener` threw
    #[error("failed to register '{event}' listener: {reason}")]
    ListenerFailed { event: String, reason: String },

    /// Configuration parsed but holds unusable values
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// The animation engine could not be reached
    #[error("animation engine error: {0}")]
    Engine(String),
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type alias for effect setup
pub type Result<T> = std::result::Result<T, FxError>;
