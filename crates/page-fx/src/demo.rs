//! Demo page for trying the effects locally
//!
//! Renders the markup the default configuration expects and boots the
//! effects once mounted. The tilt cards opt into the tilt effect.

use leptos::prelude::*;

use crate::boot::{boot_page, tilt_page};
use crate::config::FxConfig;

/// Selector for the demo's tilt cards
pub const TILT_SELECTOR: &str = ".tilt";

/// Demo page with every element the effects look for
#[component]
pub fn Demo() -> impl IntoView {
    Effect::new(move |_| {
        let config = FxConfig::default();

        match boot_page(&config) {
            Ok(listeners) => listeners.forget(),
            Err(e) => web_sys::console::error_1(&format!("page-fx demo: {e}").into()),
        }

        match tilt_page(TILT_SELECTOR, &config) {
            Ok(listeners) => listeners.forget(),
            Err(e) => web_sys::console::error_1(&format!("page-fx demo tilt: {e}").into()),
        }
    });

    view! {
        <div class="cursor"></div>
        <div class="page-transition"></div>
        <main>
            <header class="demo-header">
                <h1>"page-fx"</h1>
                <nav class="demo-nav">
                    <a href="#work">"Work (anchor)"</a>
                    <a href="/about.html">"About (transition)"</a>
                    <a href="https://github.com/lprior-repo">"GitHub (external)"</a>
                    <a href="/contact.html" target="_blank">"Contact (new tab)"</a>
                </nav>
            </header>
            <section id="work" class="card-grid">
                <div class="card tilt" data-hover="View">
                    <h2>"Tilt card"</h2>
                    <p>"Move the pointer across this card"</p>
                </div>
                <div class="card tilt" data-hover="Open">
                    <h2>"Labelled card"</h2>
                    <p>"The cursor shows this card's label"</p>
                </div>
                <div class="card">
                    <h2>"Plain card"</h2>
                    <p>"Hovered state without a label"</p>
                </div>
            </section>
            <button type="button">"A button"</button>
        </main>
    }
}
