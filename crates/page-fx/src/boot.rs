//! Page boot
//!
//! `boot` is the testable entry point: it takes the document, the engine and
//! the navigator explicitly. `boot_page` and `tilt_page` resolve those from
//! the live browser; the JavaScript exports in `bindings` build on them.

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::FxConfig;
use crate::controllers::{Listeners, init_cursor, init_page_transitions, init_tilt, query_all};
use crate::error::{FxError, Result};
use crate::motion::{Animator, Engine};
use crate::navigation::{LocationNavigator, Navigate};

/// The global window and its document
///
/// # Errors
///
/// Returns an error outside a browser context.
pub fn browser() -> Result<(Window, Document)> {
    let window = web_sys::window().ok_or(FxError::WindowNotAvailable)?;
    let document = window.document().ok_or(FxError::DocumentNotAvailable)?;
    Ok((window, document))
}

/// Wires the default effects (cursor and page transitions) onto `document`.
///
/// Tilt is not included; see [`init_tilt`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a selector is rejected
/// or a listener cannot be registered.
pub fn boot<A, N>(
    document: &Document,
    animator: Rc<A>,
    navigator: Rc<N>,
    config: &FxConfig,
) -> Result<Listeners>
where
    A: Animator<Element> + 'static,
    N: Navigate + 'static,
{
    config.validate()?;

    let mut listeners = init_cursor(document, Rc::clone(&animator), config)?;
    listeners.extend(init_page_transitions(document, animator, navigator, config)?);

    web_sys::console::debug_1(
        &format!(
            "page-fx: {} listeners ({} clicks, {} hovers)",
            listeners.len(),
            listeners.count("click"),
            listeners.count("mouseenter"),
        )
        .into(),
    );

    Ok(listeners)
}

/// [`boot`] against the live page with the detected engine
///
/// # Errors
///
/// Returns an error outside a browser context or if [`boot`] fails.
pub fn boot_page(config: &FxConfig) -> Result<Listeners> {
    let (window, document) = browser()?;
    let engine = Rc::new(Engine::detect(&window));
    let navigator = Rc::new(LocationNavigator::new(window));
    boot(&document, engine, navigator, config)
}

/// Instruments every element matching `selector` with the tilt effect
///
/// # Errors
///
/// Returns an error outside a browser context, on an invalid selector or
/// configuration, or if a listener cannot be registered.
pub fn tilt_page(selector: &str, config: &FxConfig) -> Result<Listeners> {
    config.validate()?;
    let (window, document) = browser()?;
    let elements = query_all(&document, selector)?;
    init_tilt(elements, Rc::new(Engine::detect(&window)), config)
}
