//! WASM entry point for the demo page
//!
//! Trunk compiles this to WASM. It mounts the demo markup and then boots
//! the effects on top of it.

use leptos::prelude::*;
use page_fx::demo::Demo;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <Demo />
        }
    });
}
