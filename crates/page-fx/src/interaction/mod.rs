//! Pure interaction logic
//!
//! Everything here is a function of one event's data. No DOM access, so the
//! rules are testable natively; the `controllers` module wires them to
//! browser events.

pub mod hover;
pub mod links;
pub mod pointer;
pub mod tilt;

pub use hover::{CursorUpdate, HoverTarget, hover_label};
pub use links::{TransitionRequest, is_native_navigation};
pub use pointer::{ElementRect, PointerSample};
pub use tilt::TiltSample;
