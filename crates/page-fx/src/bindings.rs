//! The JavaScript surface
//!
//! `start`, `startWithConfig` and `initTilt` wire the effects onto the live
//! page. The last two hand listener ownership back to JavaScript as an
//! [`FxHandle`].

use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::boot::{boot_page, browser, tilt_page};
use crate::config::FxConfig;
use crate::controllers::Listeners;
use crate::error::{FxError, Result};

/// Listener ownership handed to JavaScript
#[wasm_bindgen]
pub struct FxHandle {
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl FxHandle {
    /// Listeners still registered
    #[wasm_bindgen(getter, js_name = listenerCount)]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, Listeners::len)
    }

    /// Removes every listener. Calling it again does nothing.
    pub fn dispose(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            listeners.dispose();
        }
    }
}

impl From<Listeners> for FxHandle {
    fn from(listeners: Listeners) -> Self {
        Self {
            listeners: Some(listeners),
        }
    }
}

/// Boots with the page's `#page-fx-config` block, once the DOM is parsed.
/// The listeners stay registered for the page's lifetime.
///
/// # Errors
///
/// Returns an error outside a browser context, or if booting immediately
/// (DOM already parsed) fails.
#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (_, document) = browser()?;

    if is_loading(&document) {
        let callback = Closure::once_into_js(|| {
            if let Err(e) = boot_from_page() {
                web_sys::console::error_1(&format!("page-fx: {e}").into());
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref::<Function>())
            .map_err(|e| FxError::ListenerFailed {
                event: "DOMContentLoaded".to_string(),
                reason: format!("{e:?}"),
            })?;
        return Ok(());
    }

    boot_from_page().map_err(JsValue::from)
}

/// Boots immediately. Without a configuration object the page's
/// `#page-fx-config` block applies, then the defaults.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or booting fails.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> std::result::Result<FxHandle, JsValue> {
    console_error_panic_hook::set_once();
    let (_, document) = browser()?;
    let config = FxConfig::resolve(config, &document)?;
    Ok(boot_page(&config)?.into())
}

/// Opts the elements matching `selector` into the tilt effect
///
/// # Errors
///
/// Returns an error on an invalid selector or configuration.
#[wasm_bindgen(js_name = initTilt)]
pub fn init_tilt_js(selector: &str, config: JsValue) -> std::result::Result<FxHandle, JsValue> {
    let (_, document) = browser()?;
    let config = FxConfig::resolve(config, &document)?;
    Ok(tilt_page(selector, &config)?.into())
}

fn boot_from_page() -> Result<()> {
    let (_, document) = browser()?;
    let config = FxConfig::from_document(&document)?;
    boot_page(&config)?.forget();
    Ok(())
}

fn is_loading(document: &Document) -> bool {
    Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading")
}
