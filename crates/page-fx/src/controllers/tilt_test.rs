//! WASM browser tests for the tilt controller
//!
//! Run with: wasm-pack test --headless --firefox

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use wasm_bindgen_test::*;
use web_sys::Element;

use super::fixture::{Fixture, dispatch, mouse_event};
use super::tilt::init_tilt;
use crate::config::FxConfig;
use crate::motion::{Ease, RecordingAnimator};

wasm_bindgen_test_configure!(run_in_browser);

const EPS: f64 = 1e-6;

const CARD: &str = r#"<div class="tilt"
    style="position: fixed; left: 0; top: 0; width: 200px; height: 100px;"></div>"#;

fn tilted(x: i32, y: i32) -> (f64, f64) {
    let fixture = Fixture::mount(CARD);
    let card = fixture.find(".tilt");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners =
        init_tilt([card.clone()], Rc::clone(&animator), &FxConfig::default()).unwrap();

    card.dispatch_event(&mouse_event("mousemove", x, y)).unwrap();

    let props = animator.last_tween().unwrap().tween.props;
    (props.rotation_x.unwrap(), props.rotation_y.unwrap())
}

#[wasm_bindgen_test]
fn test_center_is_level() {
    let (rotate_x, rotate_y) = tilted(100, 50);
    assert!(rotate_x.abs() < EPS);
    assert!(rotate_y.abs() < EPS);
}

#[wasm_bindgen_test]
fn test_top_left_reaches_bounds() {
    let (rotate_x, rotate_y) = tilted(0, 0);
    assert!((rotate_x - 10.0).abs() < EPS);
    assert!((rotate_y + 10.0).abs() < EPS);
}

#[wasm_bindgen_test]
fn test_leave_resets_to_level() {
    let fixture = Fixture::mount(CARD);
    let card = fixture.find(".tilt");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners =
        init_tilt([card.clone()], Rc::clone(&animator), &FxConfig::default()).unwrap();

    card.dispatch_event(&mouse_event("mousemove", 5, 95)).unwrap();
    dispatch(&card, "mouseleave");

    let recorded = animator.last_tween().unwrap();
    assert_eq!(recorded.target, card);
    assert_eq!(recorded.tween.props.rotation_x, Some(0.0));
    assert_eq!(recorded.tween.props.rotation_y, Some(0.0));
    assert!(matches!(recorded.tween.ease, Ease::ElasticOut { .. }));
}

#[wasm_bindgen_test]
fn test_zero_size_element_is_ignored() {
    let fixture = Fixture::mount(r#"<div class="tilt" style="display: none"></div>"#);
    let card = fixture.find(".tilt");
    let animator = Rc::new(RecordingAnimator::<Element>::new());
    let _listeners =
        init_tilt([card.clone()], Rc::clone(&animator), &FxConfig::default()).unwrap();

    card.dispatch_event(&mouse_event("mousemove", 0, 0)).unwrap();

    assert!(animator.tweens().is_empty());
}

#[wasm_bindgen_test]
fn test_only_given_elements_are_instrumented() {
    let fixture = Fixture::mount(
        r#"<div id="one" class="tilt"></div><div id="two" class="tilt"></div>"#,
    );
    let animator = Rc::new(RecordingAnimator::<Element>::new());

    let listeners =
        init_tilt([fixture.find("#one")], animator, &FxConfig::default()).unwrap();

    assert_eq!(listeners.count("mousemove"), 1);
    assert_eq!(listeners.count("mouseleave"), 1);
}
