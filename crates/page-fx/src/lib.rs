//! Cursor, page-transition and tilt effects for web pages, compiled to WASM
//!
//! Three independent effects, each a direct mapping from DOM events to
//! animation calls:
//! - a custom cursor that follows the pointer and reacts to interactive
//!   elements
//! - exit transitions played before internal link navigation
//! - an opt-in 3D tilt for decorative elements
//!
//! ## Architecture
//! - Pure event logic in `interaction`, testable natively
//! - DOM wiring in `controllers`, returning disposable listener sets
//! - Animation delegated to an injected [`motion::Animator`] (GSAP on the
//!   page, an inline-style fallback, or a recorder in tests)
//! - Navigation behind [`navigation::Navigate`]
//!
//! ## Module Structure
//! - `boot`: entry points
//! - `bindings`: JavaScript exports
//! - `config`: selectors and timings
//! - `controllers`: cursor, transition and tilt wiring
//! - `interaction`: geometry, link and hover rules
//! - `motion`: animation engine seam and engines
//! - `navigation`: browser navigation seam
//! - `error`: error types

// wasm_bindgen exports expand to unsafe ABI glue
#[allow(unsafe_code)]
pub mod bindings;
pub mod boot;
pub mod config;
pub mod controllers;
pub mod error;
pub mod interaction;
pub mod motion;
pub mod navigation;

#[cfg(feature = "demo")]
pub mod demo;

pub use bindings::{FxHandle, start};
pub use boot::{boot, boot_page, browser, tilt_page};
pub use config::FxConfig;
pub use controllers::{Listeners, init_cursor, init_page_transitions, init_tilt};
pub use error::{FxError, Result};

#[cfg(test)]
mod tests;
