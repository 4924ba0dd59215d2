//! Event listener ownership
//!
//! A [`ListenerHandle`] owns the `wasm_bindgen` closure behind one
//! `addEventListener` call and removes the listener when dropped.
//! Controllers return their handles as a [`Listeners`] set so callers (and
//! tests) can tear everything down again.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget};

use crate::error::{FxError, Result};

type EventClosure = Closure<dyn FnMut(Event)>;

/// One registered DOM listener
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    callback: EventClosure,
}

impl ListenerHandle {
    /// Registers `handler` for `event` on `target`
    ///
    /// # Errors
    ///
    /// Returns `FxError::ListenerFailed` if `addEventListener` throws.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| FxError::ListenerFailed {
                event: event.to_string(),
                reason: format!("{e:?}"),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A set of listeners removed together
#[derive(Default)]
pub struct Listeners {
    handles: Vec<ListenerHandle>,
}

impl Listeners {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn push(&mut self, handle: ListenerHandle) {
        self.handles.push(handle);
    }

    pub fn extend(&mut self, other: Self) {
        self.handles.extend(other.handles);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Number of listeners registered for `event`
    #[must_use]
    pub fn count(&self, event: &str) -> usize {
        self.handles.iter().filter(|h| h.event == event).count()
    }

    /// Removes every listener now
    pub fn dispose(self) {
        drop(self);
    }

    /// Keeps every listener registered for the rest of the page's life
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

/// First element matching `selector`, if any
///
/// # Errors
///
/// Returns `FxError::InvalidSelector` if the browser rejects the selector.
pub fn query_one(document: &Document, selector: &str) -> Result<Option<Element>> {
    document
        .query_selector(selector)
        .map_err(|e| invalid_selector(selector, &e))
}

/// Every element matching `selector`, in document order
///
/// # Errors
///
/// Returns `FxError::InvalidSelector` if the browser rejects the selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| invalid_selector(selector, &e))?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn invalid_selector(selector: &str, e: &JsValue) -> FxError {
    FxError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{e:?}"),
    }
}
