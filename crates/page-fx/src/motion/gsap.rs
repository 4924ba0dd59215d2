//! GSAP bridge
//!
//! Reaches the page's global `gsap` object through `js_sys::Reflect` and
//! calls `gsap.to` / `gsap.timeline` with vars serialized by
//! `serde-wasm-bindgen`. A failing call is logged and dropped; a timeline
//! that cannot be built completes immediately so its callback still runs.
//! A timeline step whose element is missing tweens an empty placeholder
//! object, so the timeline keeps its full length.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

use super::{Animator, Position, Timeline, Tween};
use crate::error::{FxError, Result};

type Completion = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

/// Animator backed by the global `gsap` object
#[derive(Clone)]
pub struct GsapAnimator {
    gsap: JsValue,
    to: Function,
    timeline: Function,
}

impl GsapAnimator {
    /// Binds to `window.gsap`
    ///
    /// # Errors
    ///
    /// Returns `FxError::Engine` if `gsap`, `gsap.to` or `gsap.timeline` is
    /// missing or not callable.
    pub fn bind(window: &Window) -> Result<Self> {
        let gsap = Reflect::get(window, &JsValue::from_str("gsap"))
            .map_err(|e| FxError::Engine(format!("{e:?}")))?;
        Self::from_object(gsap)
    }

    /// Binds to a GSAP-compatible object exposing `to` and `timeline`
    ///
    /// # Errors
    ///
    /// Returns `FxError::Engine` if the object is missing or either function
    /// is not callable.
    pub fn from_object(gsap: JsValue) -> Result<Self> {
        if gsap.is_undefined() || gsap.is_null() {
            return Err(FxError::Engine("gsap is not loaded".to_string()));
        }

        let to = function(&gsap, "to")?;
        let timeline = function(&gsap, "timeline")?;

        Ok(Self { gsap, to, timeline })
    }
}

impl Animator<Element> for GsapAnimator {
    type Timeline = GsapTimeline;

    fn animate_to(&self, target: &Element, tween: &Tween) {
        let result = vars(tween).and_then(|vars| {
            self.to
                .call2(&self.gsap, target, &vars)
                .map_err(|e| FxError::Engine(format!("{e:?}")))
        });

        if let Err(e) = result {
            web_sys::console::warn_1(&format!("gsap.to failed: {e}").into());
        }
    }

    fn create_timeline(&self, on_complete: Box<dyn FnOnce()>) -> Self::Timeline {
        let completion: Completion = Rc::new(RefCell::new(Some(on_complete)));
        let callback = {
            let completion = Rc::clone(&completion);
            Closure::once_into_js(move || run_completion(&completion))
        };

        let options = Object::new();
        let handle = Reflect::set(&options, &JsValue::from_str("onComplete"), &callback)
            .and_then(|_| self.timeline.call1(&self.gsap, &options))
            .map_err(|e| FxError::Engine(format!("{e:?}")))
            .and_then(|timeline| function(&timeline, "to").map(|to| (timeline, to)));

        match handle {
            Ok((timeline, to)) => GsapTimeline {
                handle: Some((timeline, to)),
            },
            Err(e) => {
                web_sys::console::warn_1(&format!("gsap.timeline failed: {e}").into());
                run_completion(&completion);
                GsapTimeline { handle: None }
            }
        }
    }
}

/// A live GSAP timeline. Playback starts on the engine's next tick.
pub struct GsapTimeline {
    handle: Option<(JsValue, Function)>,
}

impl Timeline<Element> for GsapTimeline {
    fn to(&mut self, target: Option<&Element>, tween: &Tween, position: Position) -> &mut Self {
        let Some((timeline, to)) = &self.handle else {
            return self;
        };
        let target: JsValue = target.map_or_else(|| Object::new().into(), |t| t.clone().into());

        let position = position
            .to_gsap()
            .map_or(JsValue::UNDEFINED, |p| JsValue::from_str(&p));

        let result = vars(tween).and_then(|vars| {
            to.call3(timeline, &target, &vars, &position)
                .map_err(|e| FxError::Engine(format!("{e:?}")))
        });

        if let Err(e) = result {
            web_sys::console::warn_1(&format!("timeline.to failed: {e}").into());
        }

        self
    }
}

/// Converts a tween into a plain GSAP vars object
fn vars(tween: &Tween) -> Result<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    tween
        .serialize(&serializer)
        .map_err(|e| FxError::Engine(e.to_string()))
}

fn function(object: &JsValue, name: &str) -> Result<Function> {
    Reflect::get(object, &JsValue::from_str(name))
        .map_err(|e| FxError::Engine(format!("{e:?}")))?
        .dyn_into::<Function>()
        .map_err(|_| FxError::Engine(format!("gsap.{name} is not a function")))
}

fn run_completion(completion: &Completion) {
    let on_complete = completion.borrow_mut().take();
    if let Some(on_complete) = on_complete {
        on_complete();
    }
}
