//! Tilt angles from pointer position
//!
//! The pointer's offset from the element centre, normalised by the half
//! width/height, is scaled to a rotation of at most `max_degrees` while the
//! pointer is inside the box. Vertical offset tilts around the X axis with
//! inverted sign so the hovered edge dips towards the viewer.

use super::pointer::{ElementRect, PointerSample};

/// Rotation in degrees around the X and Y axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl TiltSample {
    /// No rotation
    pub const LEVEL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Tilt for a pointer over `rect`.
    ///
    /// Unguarded: a zero-width or zero-height rect divides by zero and
    /// yields NaN. Callers check [`TiltSample::is_finite`].
    #[must_use]
    pub fn from_pointer(pointer: PointerSample, rect: ElementRect, max_degrees: f64) -> Self {
        let local = rect.local(pointer);
        let (center_x, center_y) = rect.half_extents();

        Self {
            rotate_x: ((local.y - center_y) / center_y) * -max_degrees,
            rotate_y: ((local.x - center_x) / center_x) * max_degrees,
        }
    }

    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.rotate_x.is_finite() && self.rotate_y.is_finite()
    }
}
