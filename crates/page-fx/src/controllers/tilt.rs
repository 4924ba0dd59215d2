//! Pointer-driven 3D tilt
//!
//! Opt-in: nothing in the default boot calls this. Pages (or the `initTilt`
//! export) pass the elements to instrument explicitly.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::listeners::{ListenerHandle, Listeners};
use crate::config::FxConfig;
use crate::error::Result;
use crate::interaction::{ElementRect, PointerSample, TiltSample};
use crate::motion::{Animator, Ease, Props, Tween};

/// Tilt timings and limits, copied out of [`FxConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSettings {
    pub max_degrees: f64,
    pub perspective: f64,
    pub seconds: f64,
    pub reset_seconds: f64,
}

impl TiltSettings {
    #[must_use]
    pub const fn from_config(config: &FxConfig) -> Self {
        Self {
            max_degrees: config.tilt_max_degrees,
            perspective: config.tilt_perspective,
            seconds: config.tilt_seconds,
            reset_seconds: config.tilt_reset_seconds,
        }
    }

    /// Tween towards `sample` with the configured perspective depth
    #[must_use]
    pub fn tilt_tween(&self, sample: TiltSample) -> Tween {
        Tween::new(
            Props::default()
                .rotation(sample.rotate_x, sample.rotate_y)
                .perspective(self.perspective),
            self.seconds,
            Ease::Power2Out,
        )
    }

    /// Tween back to level with an elastic settle
    #[must_use]
    pub fn reset_tween(&self) -> Tween {
        let level = TiltSample::LEVEL;
        Tween::new(
            Props::default().rotation(level.rotate_x, level.rotate_y),
            self.reset_seconds,
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5,
            },
        )
    }
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self::from_config(&FxConfig::default())
    }
}

/// Tilts `target` towards the pointer. Returns the sample, or `None` when
/// it was not finite and nothing was animated.
pub fn tilt_towards<T, A>(
    animator: &A,
    target: &T,
    pointer: PointerSample,
    rect: ElementRect,
    settings: &TiltSettings,
) -> Option<TiltSample>
where
    A: Animator<T> + ?Sized,
{
    let sample = TiltSample::from_pointer(pointer, rect, settings.max_degrees);
    if !sample.is_finite() {
        return None;
    }
    animator.animate_to(target, &settings.tilt_tween(sample));
    Some(sample)
}

/// Returns `target` to level
pub fn tilt_reset<T, A>(animator: &A, target: &T, settings: &TiltSettings)
where
    A: Animator<T> + ?Sized,
{
    animator.animate_to(target, &settings.reset_tween());
}

/// Instruments each element with tilt-on-move and reset-on-leave.
///
/// # Errors
///
/// Returns an error if a listener cannot be registered.
pub fn init_tilt<A, I>(elements: I, animator: Rc<A>, config: &FxConfig) -> Result<Listeners>
where
    A: Animator<Element> + 'static,
    I: IntoIterator<Item = Element>,
{
    let settings = TiltSettings::from_config(config);
    let mut listeners = Listeners::new();

    for element in elements {
        let track = {
            let target = element.clone();
            let animator = Rc::clone(&animator);
            ListenerHandle::attach(&element, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = ElementRect::from(&target.get_bounding_client_rect());
                tilt_towards(&*animator, &target, PointerSample::from(event), rect, &settings);
            })?
        };
        listeners.push(track);

        let reset = {
            let target = element.clone();
            let animator = Rc::clone(&animator);
            ListenerHandle::attach(&element, "mouseleave", move |_| {
                tilt_reset(&*animator, &target, &settings);
            })?
        };
        listeners.push(reset);
    }

    Ok(listeners)
}
