//! Browser tests for the boot entry point
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::rc::Rc;

use page_fx::motion::RecordingAnimator;
use page_fx::navigation::RecordingNavigator;
use page_fx::{FxConfig, FxError, FxHandle, boot, browser};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

struct Page {
    document: Document,
    root: Element,
}

impl Page {
    fn mount(html: &str) -> Self {
        let (_, document) = browser().expect("browser context");
        let root = document.create_element("div").unwrap();
        root.set_id("boot-fixture");
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { document, root }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn scoped() -> FxConfig {
    FxConfig {
        cursor_selector: "#boot-fixture .cursor".to_string(),
        hoverable_selector: "#boot-fixture a, #boot-fixture .card".to_string(),
        link_selector: r#"#boot-fixture a[href]:not([target="_blank"])"#.to_string(),
        overlay_selector: "#boot-fixture .page-transition".to_string(),
        main_selector: "#boot-fixture main".to_string(),
        ..FxConfig::default()
    }
}

fn engines() -> (Rc<RecordingAnimator<Element>>, Rc<RecordingNavigator>) {
    (
        Rc::new(RecordingAnimator::new()),
        Rc::new(RecordingNavigator::new()),
    )
}

#[wasm_bindgen_test]
fn test_boot_wires_cursor_and_links() {
    let page = Page::mount(
        r#"<div class="cursor"></div>
           <main><a href="/about">About</a><div class="card"></div></main>
           <div class="page-transition"></div>"#,
    );
    let (animator, navigator) = engines();

    let listeners = boot(&page.document, animator, navigator, &scoped()).unwrap();

    assert_eq!(listeners.count("mousemove"), 1);
    assert_eq!(listeners.count("mouseenter"), 2);
    assert_eq!(listeners.count("click"), 1);
}

#[wasm_bindgen_test]
fn test_boot_without_cursor_still_wires_links() {
    let page = Page::mount(r#"<main><a href="/about">About</a></main>"#);
    let (animator, navigator) = engines();

    let listeners = boot(&page.document, animator, navigator, &scoped()).unwrap();

    assert_eq!(listeners.count("mousemove"), 0);
    assert_eq!(listeners.count("mouseenter"), 0);
    assert_eq!(listeners.count("click"), 1);
}

#[wasm_bindgen_test]
fn test_boot_never_wires_tilt() {
    let page = Page::mount(r#"<div class="cursor"></div><div class="tilt"></div>"#);
    let (animator, navigator) = engines();

    let listeners = boot(&page.document, animator, navigator, &scoped()).unwrap();

    assert_eq!(listeners.count("mouseleave"), 0);
}

#[wasm_bindgen_test]
fn test_boot_rejects_invalid_selector() {
    let page = Page::mount("");
    let (animator, navigator) = engines();
    let config = FxConfig {
        cursor_selector: "div[".to_string(),
        ..scoped()
    };

    let result = boot(&page.document, animator, navigator, &config);

    assert!(matches!(result, Err(FxError::InvalidSelector { .. })));
}

#[wasm_bindgen_test]
fn test_boot_rejects_invalid_config() {
    let page = Page::mount("");
    let (animator, navigator) = engines();
    let config = FxConfig {
        exit_seconds: -0.6,
        ..scoped()
    };

    let result = boot(&page.document, animator, navigator, &config);

    assert!(matches!(result, Err(FxError::InvalidConfig(_))));
}

#[wasm_bindgen_test]
fn test_handle_dispose_is_idempotent() {
    let page = Page::mount(r#"<div class="cursor"></div><a href="/x">x</a>"#);
    let (animator, navigator) = engines();
    let listeners = boot(&page.document, animator, navigator, &scoped()).unwrap();

    let mut handle = FxHandle::from(listeners);
    assert_eq!(handle.listener_count(), 4);

    handle.dispose();
    handle.dispose();
    assert_eq!(handle.listener_count(), 0);
}

#[wasm_bindgen_test]
fn test_config_block_is_read_from_page() {
    let page = Page::mount(
        r#"<script type="application/json" id="page-fx-config">
             { "hovered_class": "is-on", "exit_seconds": 0.9 }
           </script>"#,
    );

    let config = FxConfig::from_document(&page.document).unwrap();

    assert_eq!(config.hovered_class, "is-on");
    assert!((config.exit_seconds - 0.9).abs() < f64::EPSILON);
}

const CONFIG_BLOCK: &str = r#"<script type="application/json" id="page-fx-config">
    { "hovered_class": "from-page" }
</script>"#;

#[wasm_bindgen_test]
fn test_missing_config_object_falls_back_to_page_block() {
    let page = Page::mount(CONFIG_BLOCK);

    let undefined = FxConfig::resolve(JsValue::UNDEFINED, &page.document).unwrap();
    let null = FxConfig::resolve(JsValue::NULL, &page.document).unwrap();

    assert_eq!(undefined.hovered_class, "from-page");
    assert_eq!(null.hovered_class, "from-page");
}

#[wasm_bindgen_test]
fn test_config_object_wins_over_page_block() {
    let page = Page::mount(CONFIG_BLOCK);
    let object = js_sys::JSON::parse(r#"{ "exit_seconds": 0.9 }"#).unwrap();

    let config = FxConfig::resolve(object, &page.document).unwrap();

    assert_eq!(config.hovered_class, "hovered");
    assert!((config.exit_seconds - 0.9).abs() < f64::EPSILON);
}

#[wasm_bindgen_test]
fn test_without_any_source_defaults_apply() {
    let page = Page::mount("");

    let config = FxConfig::resolve(JsValue::UNDEFINED, &page.document).unwrap();

    assert_eq!(config, FxConfig::default());
}
