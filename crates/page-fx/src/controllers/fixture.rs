//! Shared DOM fixtures for the browser tests
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, MouseEvent, MouseEventInit};

use super::listeners::ListenerHandle;

/// Markup mounted under `<div id="fx-fixture">`, removed on drop
pub struct Fixture {
    pub document: Document,
    pub root: Element,
}

impl Fixture {
    pub fn mount(html: &str) -> Self {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("should have document");

        if let Some(stale) = document.get_element_by_id("fx-fixture") {
            stale.remove();
        }

        let root = document.create_element("div").expect("create root");
        root.set_id("fx-fixture");
        root.set_inner_html(html);
        document
            .body()
            .expect("should have body")
            .append_child(&root)
            .expect("append fixture");

        Self { document, root }
    }

    pub fn find(&self, selector: &str) -> Element {
        self.root
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("fixture has no {selector}"))
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn mouse_event(kind: &str, client_x: i32, client_y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_client_x(client_x);
    init.set_client_y(client_y);
    init.set_bubbles(true);
    init.set_cancelable(true);
    MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("create MouseEvent")
}

pub fn dispatch(target: &Element, kind: &str) -> MouseEvent {
    let event = mouse_event(kind, 0, 0);
    target.dispatch_event(&event).expect("dispatch");
    event
}

/// Records whether each click reaching `root` was already default-prevented,
/// then prevents it so the test page never navigates away
pub fn guard_clicks(root: &Element) -> (ListenerHandle, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let handle = ListenerHandle::attach(root, "click", move |event: Event| {
        log.borrow_mut().push(event.default_prevented());
        event.prevent_default();
    })
    .expect("attach click guard");
    (handle, seen)
}
