//! Effect configuration
//!
//! Every field has a default matching the stock page markup, so an empty
//! JSON object (or no configuration at all) is valid. A page can override
//! values either by passing an object to `startWithConfig` or by embedding
//! a JSON block:
//!
//! ```html
//! <script type="application/json" id="page-fx-config">
//!   { "exit_seconds": 0.8, "hovered_class": "is-hovering" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::error::{FxError, Result};

/// Element id of the optional in-page JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "page-fx-config";

/// Selectors, class names and timings used by the controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// The single element that follows the pointer
    pub cursor_selector: String,
    /// Elements that put the cursor into its hovered state
    pub hoverable_selector: String,
    /// Attribute whose value becomes the cursor text while hovered
    pub hover_label_attribute: String,
    /// Class toggled on the cursor while hovering
    pub hovered_class: String,
    /// Links considered for exit transitions
    pub link_selector: String,
    /// Full-screen overlay slid in during the exit transition
    pub overlay_selector: String,
    /// Main content region rotated out during the exit transition
    pub main_selector: String,
    pub cursor_follow_seconds: f64,
    pub exit_seconds: f64,
    pub overlay_seconds: f64,
    /// How far the overlay slide starts before the exit rotation ends
    pub overlay_overlap_seconds: f64,
    pub tilt_max_degrees: f64,
    pub tilt_perspective: f64,
    pub tilt_seconds: f64,
    pub tilt_reset_seconds: f64,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            cursor_selector: ".cursor".to_string(),
            hoverable_selector: "a, button, .card, [data-hover]".to_string(),
            hover_label_attribute: "data-hover".to_string(),
            hovered_class: "hovered".to_string(),
            link_selector: r#"a[href]:not([target="_blank"])"#.to_string(),
            overlay_selector: ".page-transition".to_string(),
            main_selector: "main".to_string(),
            cursor_follow_seconds: 0.1,
            exit_seconds: 0.6,
            overlay_seconds: 0.4,
            overlay_overlap_seconds: 0.2,
            tilt_max_degrees: 10.0,
            tilt_perspective: 1000.0,
            tilt_seconds: 0.4,
            tilt_reset_seconds: 0.5,
        }
    }
}

impl FxConfig {
    /// Parses a JSON document, filling missing keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `FxError::ConfigParse` on malformed JSON or mistyped values,
    /// and `FxError::InvalidConfig` if the parsed values fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FxError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Converts a JavaScript object. `undefined` and `null` yield defaults.
    ///
    /// # Errors
    ///
    /// Returns `FxError::ConfigParse` if the value does not deserialize,
    /// and `FxError::InvalidConfig` if it fails validation.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| FxError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the `#page-fx-config` JSON block, or defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the block exists but is not valid configuration.
    pub fn from_document(document: &Document) -> Result<Self> {
        document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
            .filter(|text| !text.trim().is_empty())
            .map_or_else(|| Ok(Self::default()), |text| Self::from_json(&text))
    }

    /// First available source: `value` unless it is `undefined` or `null`,
    /// then the page's `#page-fx-config` block, then defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen source is not valid configuration.
    pub fn resolve(value: JsValue, document: &Document) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            Self::from_document(document)
        } else {
            Self::from_js(value)
        }
    }

    /// Checks selectors are non-empty and timings are usable.
    ///
    /// # Errors
    ///
    /// Returns `FxError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let selectors = [
            ("cursor_selector", &self.cursor_selector),
            ("hoverable_selector", &self.hoverable_selector),
            ("hover_label_attribute", &self.hover_label_attribute),
            ("hovered_class", &self.hovered_class),
            ("link_selector", &self.link_selector),
            ("overlay_selector", &self.overlay_selector),
            ("main_selector", &self.main_selector),
        ];

        if let Some((name, _)) = selectors.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FxError::InvalidConfig(format!("{name} must not be empty")));
        }

        let timings = [
            ("cursor_follow_seconds", self.cursor_follow_seconds),
            ("exit_seconds", self.exit_seconds),
            ("overlay_seconds", self.overlay_seconds),
            ("overlay_overlap_seconds", self.overlay_overlap_seconds),
            ("tilt_max_degrees", self.tilt_max_degrees),
            ("tilt_perspective", self.tilt_perspective),
            ("tilt_seconds", self.tilt_seconds),
            ("tilt_reset_seconds", self.tilt_reset_seconds),
        ];

        timings
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map_or(Ok(()), |(name, value)| {
                Err(FxError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )))
            })
    }
}
