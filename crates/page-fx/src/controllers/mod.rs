//! DOM wiring for the three effects
//!
//! Each controller registers its listeners once and returns them as a
//! [`Listeners`] set. Controllers never talk to each other.

pub mod cursor;
pub mod listeners;
pub mod tilt;
pub mod transition;

pub use cursor::init_cursor;
pub use listeners::{ListenerHandle, Listeners, query_all, query_one};
pub use tilt::{TiltSettings, init_tilt};
pub use transition::{ExitPlan, LinkExit, init_page_transitions};

#[cfg(all(test, target_arch = "wasm32"))]
mod fixture;

#[cfg(all(test, target_arch = "wasm32"))]
mod cursor_test;


#[cfg(all(test, target_arch = "wasm32"))]
mod tilt_test;
