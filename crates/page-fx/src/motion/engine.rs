//! Runtime engine selection for the browser

use web_sys::{Element, Window};

use super::{Animator, GsapAnimator, Position, StyleAnimator, Timeline, Tween};
use super::gsap::GsapTimeline;
use super::style::StyleTimeline;

/// GSAP when the page provides it, inline styles otherwise
#[derive(Clone)]
pub enum Engine {
    Gsap(GsapAnimator),
    Style(StyleAnimator),
}

impl Engine {
    /// Picks GSAP if `window.gsap` is usable, logging a warning otherwise
    #[must_use]
    pub fn detect(window: &Window) -> Self {
        match GsapAnimator::bind(window) {
            Ok(gsap) => Self::Gsap(gsap),
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("page-fx: {e}, falling back to CSS transitions").into(),
                );
                Self::Style(StyleAnimator::new())
            }
        }
    }
}

impl Animator<Element> for Engine {
    type Timeline = EngineTimeline;

    fn animate_to(&self, target: &Element, tween: &Tween) {
        match self {
            Self::Gsap(gsap) => gsap.animate_to(target, tween),
            Self::Style(style) => style.animate_to(target, tween),
        }
    }

    fn create_timeline(&self, on_complete: Box<dyn FnOnce()>) -> Self::Timeline {
        match self {
            Self::Gsap(gsap) => EngineTimeline::Gsap(gsap.create_timeline(on_complete)),
            Self::Style(style) => EngineTimeline::Style(style.create_timeline(on_complete)),
        }
    }
}

pub enum EngineTimeline {
    Gsap(GsapTimeline),
    Style(StyleTimeline),
}

impl Timeline<Element> for EngineTimeline {
    fn to(&mut self, target: Option<&Element>, tween: &Tween, position: Position) -> &mut Self {
        match self {
            Self::Gsap(timeline) => {
                timeline.to(target, tween, position);
            }
            Self::Style(timeline) => {
                timeline.to(target, tween, position);
            }
        }
        self
    }
}
