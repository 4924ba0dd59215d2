//! Custom cursor controller
//!
//! The cursor element eases towards the pointer on every `mousemove` and
//! switches to its hovered state over interactive elements, optionally
//! showing the element's label as text.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use super::listeners::{ListenerHandle, Listeners, query_all, query_one};
use crate::config::FxConfig;
use crate::error::Result;
use crate::interaction::{CursorUpdate, HoverTarget, PointerSample};
use crate::motion::{Animator, Ease, Length, Props, Tween};

/// Tween moving the cursor onto the pointer
#[must_use]
pub fn follow_tween(pointer: PointerSample, seconds: f64) -> Tween {
    Tween::new(
        Props::default().translate(Length::Px(pointer.x), Length::Px(pointer.y)),
        seconds,
        Ease::Power2Out,
    )
}

/// Eases `cursor` towards the pointer, retargeting any tween in flight
pub fn follow_pointer<T, A>(animator: &A, cursor: &T, pointer: PointerSample, seconds: f64)
where
    A: Animator<T> + ?Sized,
{
    animator.animate_to(cursor, &follow_tween(pointer, seconds));
}

/// Applies a hover change to the cursor element
pub fn apply_update(cursor: &Element, hovered_class: &str, update: &CursorUpdate) {
    let classes = cursor.class_list();
    let toggled = if update.hovered() {
        classes.add_1(hovered_class)
    } else {
        classes.remove_1(hovered_class)
    };
    if let Err(e) = toggled {
        web_sys::console::warn_1(&format!("cursor class '{hovered_class}': {e:?}").into());
    }

    if let Some(text) = update.text() {
        cursor.set_text_content(Some(text));
    }
}

/// Wires the cursor to pointer movement and hoverable elements.
///
/// Returns no listeners, and no error, when the page has no cursor element.
///
/// # Errors
///
/// Returns an error if a configured selector is invalid or a listener cannot
/// be registered.
pub fn init_cursor<A>(document: &Document, animator: Rc<A>, config: &FxConfig) -> Result<Listeners>
where
    A: Animator<Element> + 'static,
{
    let Some(cursor) = query_one(document, &config.cursor_selector)? else {
        web_sys::console::debug_1(
            &format!("page-fx: no '{}' element, cursor disabled", config.cursor_selector).into(),
        );
        return Ok(Listeners::new());
    };

    let mut listeners = Listeners::new();

    let follow = {
        let cursor = cursor.clone();
        let seconds = config.cursor_follow_seconds;
        ListenerHandle::attach(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follow_pointer(&*animator, &cursor, PointerSample::from(event), seconds);
            }
        })?
    };
    listeners.push(follow);

    for element in query_all(document, &config.hoverable_selector)? {
        let enter = {
            let cursor = cursor.clone();
            let source = element.clone();
            let attribute = config.hover_label_attribute.clone();
            let class = config.hovered_class.clone();
            ListenerHandle::attach(&element, "mouseenter", move |_| {
                let label = source.get_attribute(&attribute);
                let target = HoverTarget::new(&source, label.as_deref());
                apply_update(&cursor, &class, &target.enter());
            })?
        };
        listeners.push(enter);

        let leave = {
            let cursor = cursor.clone();
            let class = config.hovered_class.clone();
            ListenerHandle::attach(&element, "mouseleave", move |_| {
                apply_update(&cursor, &class, &CursorUpdate::Unhover);
            })?
        };
        listeners.push(leave);
    }

    Ok(listeners)
}
