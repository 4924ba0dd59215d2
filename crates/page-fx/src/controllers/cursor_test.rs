//! WASM browser tests for the cursor controller
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::Element;

use super::cursor::init_cursor;
use super::fixture::{Fixture, dispatch, mouse_event};
use crate::config::FxConfig;
use crate::motion::{Length, RecordingAnimator};

wasm_bindgen_test_configure!(run_in_browser);

fn scoped_config() -> FxConfig {
    FxConfig {
        cursor_selector: "#fx-fixture .cursor".to_string(),
        hoverable_selector: "#fx-fixture a, #fx-fixture .card, #fx-fixture [data-hover]"
            .to_string(),
        ..FxConfig::default()
    }
}

#[wasm_bindgen_test]
fn test_absent_cursor_registers_nothing() {
    let fixture = Fixture::mount(r#"<div class="card" data-hover="View"></div>"#);
    let animator = Rc::new(RecordingAnimator::<Element>::new());

    let listeners = init_cursor(&fixture.document, animator, &scoped_config()).unwrap();

    assert!(listeners.is_empty());
}

#[wasm_bindgen_test]
fn test_registers_move_and_hover_pairs() {
    let fixture = Fixture::mount(
        r#"<div class="cursor"></div>
           <a href="/a">a</a>
           <div class="card"></div>
           <span data-hover="Hi">x</span>"#,
    );
    let animator = Rc::new(RecordingAnimator::<Element>::new());

    let listeners = init_cursor(&fixture.document, animator, &scoped_config()).unwrap();

    assert_eq!(listeners.count("mousemove"), 1);
    assert_eq!(listeners.count("mouseenter"), 3);
    assert_eq!(listeners.count("mouseleave"), 3);
}

#[wasm_bindgen_test]
fn test_hover_label_becomes_cursor_text() {
    let fixture = Fixture::mount(
        r#"<div class="cursor"></div><div class="card" data-hover="View"></div>"#,
    );
    let cursor = fixture.find(".cursor");
    let card = fixture.find(".card");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners = init_cursor(&fixture.document, animator, &scoped_config()).unwrap();

    dispatch(&card, "mouseenter");
    assert!(cursor.class_list().contains("hovered"));
    assert_eq!(cursor.text_content().as_deref(), Some("View"));

    dispatch(&card, "mouseleave");
    assert!(!cursor.class_list().contains("hovered"));
    assert_eq!(cursor.text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn test_unlabelled_hover_marks_without_text() {
    let fixture = Fixture::mount(r#"<div class="cursor"></div><a href="/x">x</a>"#);
    let cursor = fixture.find(".cursor");
    let link = fixture.find("a");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners = init_cursor(&fixture.document, animator, &scoped_config()).unwrap();

    dispatch(&link, "mouseenter");

    assert!(cursor.class_list().contains("hovered"));
    assert_eq!(cursor.text_content().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn test_mousemove_eases_cursor_to_pointer() {
    let fixture = Fixture::mount(r#"<div class="cursor"></div>"#);
    let cursor = fixture.find(".cursor");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners =
        init_cursor(&fixture.document, Rc::clone(&animator), &scoped_config()).unwrap();

    fixture
        .document
        .dispatch_event(&mouse_event("mousemove", 140, 75))
        .unwrap();

    let recorded = animator.last_tween().unwrap();
    assert_eq!(recorded.target, cursor);
    assert_eq!(recorded.tween.props.x, Some(Length::Px(140.0)));
    assert_eq!(recorded.tween.props.y, Some(Length::Px(75.0)));
}

#[wasm_bindgen_test]
fn test_dispose_removes_listeners() {
    let fixture = Fixture::mount(
        r#"<div class="cursor"></div><div class="card" data-hover="View"></div>"#,
    );
    let cursor = fixture.find(".cursor");
    let card = fixture.find(".card");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let listeners =
        init_cursor(&fixture.document, Rc::clone(&animator), &scoped_config()).unwrap();

    listeners.dispose();
    dispatch(&card, "mouseenter");
    fixture
        .document
        .dispatch_event(&mouse_event("mousemove", 1, 1))
        .unwrap();

    assert!(!cursor.class_list().contains("hovered"));
    assert!(animator.tweens().is_empty());
}
