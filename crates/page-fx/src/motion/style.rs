//! Inline-style fallback engine
//!
//! Used when the page did not load GSAP. Each tween writes the end state as
//! inline `transform`/`opacity` plus a matching CSS `transition`, and lets
//! the browser interpolate. Transitions the page already declares for other
//! properties are kept alongside. Timelines schedule their steps with
//! `gloo-timers`; completion fires once the last step has had time to run,
//! which keeps link navigation working without the real engine.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{Animator, Position, Timeline, Tween};

/// Animator that drives CSS transitions directly
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleAnimator;

impl StyleAnimator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Animator<Element> for StyleAnimator {
    type Timeline = StyleTimeline;

    fn animate_to(&self, target: &Element, tween: &Tween) {
        apply(target, tween);
    }

    fn create_timeline(&self, on_complete: Box<dyn FnOnce()>) -> Self::Timeline {
        StyleTimeline {
            end: 0.0,
            on_complete: Some(on_complete),
        }
    }
}

/// Timeline whose steps start as they are appended. Completion is scheduled
/// when the handle is dropped, at the timeline's total length.
pub struct StyleTimeline {
    end: f64,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl Timeline<Element> for StyleTimeline {
    fn to(&mut self, target: Option<&Element>, tween: &Tween, position: Position) -> &mut Self {
        let start = position.start_at(self.end);
        self.end = self.end.max(start + tween.duration);

        if let Some(target) = target {
            let target = target.clone();
            let tween = *tween;
            Timeout::new(millis(start), move || apply(&target, &tween)).forget();
        }

        self
    }
}

impl Drop for StyleTimeline {
    fn drop(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            Timeout::new(millis(self.end), on_complete).forget();
        }
    }
}

/// Writes a tween's end state as inline styles
fn apply(target: &Element, tween: &Tween) {
    let Some(element) = target.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = element.style();

    let mut transitioned = Vec::new();
    let timing = format!("{}s {}", tween.duration, tween.ease.css_timing());

    if let Some(transform) = tween.props.css_transform() {
        transitioned.push(format!("transform {timing}"));
        let _ = style.set_property("transform", &transform);
    }
    if let Some(opacity) = tween.props.opacity {
        transitioned.push(format!("opacity {timing}"));
        let _ = style.set_property("opacity", &opacity.to_string());
    }

    if !transitioned.is_empty() {
        let existing = web_sys::window()
            .and_then(|window| window.get_computed_style(target).ok().flatten())
            .and_then(|computed| computed.get_property_value("transition").ok())
            .unwrap_or_default();
        let _ = style.set_property("transition", &merge_transitions(&existing, &transitioned));
    }
}

/// Keeps the entries of an existing `transition` list that animate other
/// properties, then appends `ours`
fn merge_transitions(existing: &str, ours: &[String]) -> String {
    split_top_level(existing)
        .into_iter()
        .filter(|entry| is_foreign_transition(entry))
        .map(str::to_string)
        .chain(ours.iter().cloned())
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_foreign_transition(entry: &str) -> bool {
    let mut tokens = entry.split_whitespace();
    match tokens.next() {
        None | Some("none" | "transform" | "opacity") => false,
        Some("all") => tokens.next().is_some_and(|duration| !is_zero_duration(duration)),
        Some(_) => true,
    }
}

fn is_zero_duration(token: &str) -> bool {
    token
        .trim_end_matches("ms")
        .trim_end_matches('s')
        .parse::<f64>()
        .is_ok_and(|value| value.abs() < f64::EPSILON)
}

/// Splits on commas outside parentheses, so `cubic-bezier(...)` stays whole
fn split_top_level(list: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                entries.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    entries.push(list[start..].trim());
    entries.retain(|entry| !entry.is_empty());
    entries
}

/// Seconds to a timer delay in whole milliseconds
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn millis(seconds: f64) -> u32 {
    (seconds * 1000.0).round().clamp(0.0, f64::from(u32::MAX)) as u32
}
