//! Animation engine seam
//!
//! Controllers never interpolate anything themselves. They describe an end
//! state as a [`Tween`] and hand it to an [`Animator`], which owns the actual
//! interpolation and sequencing.
//!
//! ## Engines
//! - `gsap`: the page's global GSAP instance
//! - `style`: inline CSS transitions, used when GSAP is not loaded
//! - `recording`: captures calls for assertions in tests

pub mod engine;
pub mod gsap;
pub mod recording;
pub mod style;

use std::fmt;

use serde::{Serialize, Serializer};

pub use engine::{Engine, EngineTimeline};
pub use gsap::GsapAnimator;
pub use recording::{RecordedStep, RecordedTween, RecordingAnimator, RecordingTimeline};
pub use style::StyleAnimator;

/// An engine that animates targets of type `T` towards an end state
pub trait Animator<T> {
    type Timeline: Timeline<T>;

    /// Starts (or retargets) a tween on `target`
    fn animate_to(&self, target: &T, tween: &Tween);

    /// Creates a timeline that plays as soon as it has been built and calls
    /// `on_complete` once every step has finished
    fn create_timeline(&self, on_complete: Box<dyn FnOnce()>) -> Self::Timeline;
}

/// A sequence of tweens with relative start offsets
pub trait Timeline<T> {
    /// Appends a step. A `None` target leaves a hole in the sequence but
    /// still lets the timeline complete.
    fn to(&mut self, target: Option<&T>, tween: &Tween, position: Position) -> &mut Self;
}

/// A length in pixels or as a percentage of the element's own size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Px(value) => serializer.serialize_f64(*value),
            Self::Percent(_) => serializer.collect_str(self),
        }
    }
}

/// Named easing curves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// Accelerating
    Power2In,
    /// Decelerating
    Power2Out,
    /// Sharply decelerating
    ExpoOut,
    /// Overshoots and settles
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// Closest CSS `transition-timing-function` for this curve.
    ///
    /// CSS cannot oscillate, so the elastic curve becomes a single overshoot.
    #[must_use]
    pub const fn css_timing(self) -> &'static str {
        match self {
            Self::Power2In => "cubic-bezier(0.55, 0.085, 0.68, 0.53)",
            Self::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::ExpoOut => "cubic-bezier(0.19, 1, 0.22, 1)",
            Self::ElasticOut { .. } => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power2In => f.write_str("power2.in"),
            Self::Power2Out => f.write_str("power2.out"),
            Self::ExpoOut => f.write_str("expo.out"),
            Self::ElasticOut { amplitude, period } => {
                write!(f, "elastic.out({amplitude}, {period})")
            }
        }
    }
}

impl Serialize for Ease {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// End-state property bag. Unset properties are left alone by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform_perspective: Option<f64>,
}

impl Props {
    #[must_use]
    pub const fn translate(mut self, x: Length, y: Length) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub const fn y(mut self, y: Length) -> Self {
        self.y = Some(y);
        self
    }

    #[must_use]
    pub const fn rotation(mut self, x: f64, y: f64) -> Self {
        self.rotation_x = Some(x);
        self.rotation_y = Some(y);
        self
    }

    #[must_use]
    pub const fn rotation_y(mut self, y: f64) -> Self {
        self.rotation_y = Some(y);
        self
    }

    #[must_use]
    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub const fn perspective(mut self, depth: f64) -> Self {
        self.transform_perspective = Some(depth);
        self
    }

    /// CSS `transform` equivalent of the transform-related properties, in
    /// the order perspective, translate, rotate, scale
    #[must_use]
    pub fn css_transform(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(depth) = self.transform_perspective {
            parts.push(format!("perspective({depth}px)"));
        }
        if self.x.is_some() || self.y.is_some() {
            let x = self.x.unwrap_or(Length::Px(0.0));
            let y = self.y.unwrap_or(Length::Px(0.0));
            parts.push(format!("translate({x}, {y})"));
        }
        if let Some(degrees) = self.rotation_x {
            parts.push(format!("rotateX({degrees}deg)"));
        }
        if let Some(degrees) = self.rotation_y {
            parts.push(format!("rotateY({degrees}deg)"));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({scale})"));
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// A single animation: where to go, how long, and along which curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tween {
    #[serde(flatten)]
    pub props: Props,
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    #[must_use]
    pub const fn new(props: Props, duration: f64, ease: Ease) -> Self {
        Self {
            props,
            duration,
            ease,
        }
    }
}

/// Where a timeline step starts relative to the steps before it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the current end of the timeline
    Sequential,
    /// This many seconds before the current end (GSAP `"-=n"`)
    Overlap(f64),
}

impl Position {
    /// Start time of a step given the timeline's current end. Never negative.
    #[must_use]
    pub fn start_at(self, timeline_end: f64) -> f64 {
        match self {
            Self::Sequential => timeline_end,
            Self::Overlap(seconds) => (timeline_end - seconds).max(0.0),
        }
    }

    /// GSAP position parameter, `None` meaning "append"
    #[must_use]
    pub fn to_gsap(self) -> Option<String> {
        match self {
            Self::Sequential => None,
            Self::Overlap(seconds) => Some(format!("-={seconds}")),
        }
    }
}
