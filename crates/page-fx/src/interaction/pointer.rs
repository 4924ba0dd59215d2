//! Pointer coordinates and element geometry

use web_sys::{DomRect, MouseEvent};

/// Viewport coordinates of the pointer for one event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&MouseEvent> for PointerSample {
    fn from(event: &MouseEvent) -> Self {
        Self::new(f64::from(event.client_x()), f64::from(event.client_y()))
    }
}

/// Snapshot of an element's bounding client rect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the rect's top-left corner
    #[must_use]
    pub fn local(&self, pointer: PointerSample) -> PointerSample {
        PointerSample::new(pointer.x - self.left, pointer.y - self.top)
    }

    /// Centre in local coordinates
    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl From<&DomRect> for ElementRect {
    fn from(rect: &DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}
