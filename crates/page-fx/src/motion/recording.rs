//! Recording animation engine
//!
//! Stores every tween and timeline step instead of animating, so controller
//! behaviour can be asserted without a rendering environment. Timelines
//! never finish on their own: call [`RecordingAnimator::finish_timelines`]
//! to simulate the engine completing them.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Animator, Position, Timeline, Tween};

/// A tween started with [`Animator::animate_to`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTween<T> {
    pub target: T,
    pub tween: Tween,
}

/// A step appended to a timeline
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStep<T> {
    /// Index of the timeline in creation order
    pub timeline: usize,
    pub target: Option<T>,
    pub tween: Tween,
    pub position: Position,
    /// Resolved start time in seconds from the timeline's beginning
    pub start: f64,
}

struct Journal<T> {
    tweens: Vec<RecordedTween<T>>,
    steps: Vec<RecordedStep<T>>,
    timeline_ends: Vec<f64>,
    pending: Vec<Box<dyn FnOnce()>>,
}

impl<T> Default for Journal<T> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            steps: Vec::new(),
            timeline_ends: Vec::new(),
            pending: Vec::new(),
        }
    }
}

/// Animator that records instead of animating. Clones share one journal.
pub struct RecordingAnimator<T> {
    journal: Rc<RefCell<Journal<T>>>,
}

impl<T> Clone for RecordingAnimator<T> {
    fn clone(&self) -> Self {
        Self {
            journal: Rc::clone(&self.journal),
        }
    }
}

impl<T> Default for RecordingAnimator<T> {
    fn default() -> Self {
        Self {
            journal: Rc::new(RefCell::new(Journal::default())),
        }
    }
}

impl<T: Clone> RecordingAnimator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All tweens in call order
    #[must_use]
    pub fn tweens(&self) -> Vec<RecordedTween<T>> {
        self.journal.borrow().tweens.clone()
    }

    /// The most recent tween, if any
    #[must_use]
    pub fn last_tween(&self) -> Option<RecordedTween<T>> {
        self.journal.borrow().tweens.last().cloned()
    }

    /// All timeline steps in call order, across every timeline
    #[must_use]
    pub fn steps(&self) -> Vec<RecordedStep<T>> {
        self.journal.borrow().steps.clone()
    }

    /// Number of timelines created so far
    #[must_use]
    pub fn timeline_count(&self) -> usize {
        self.journal.borrow().timeline_ends.len()
    }

    /// Total length in seconds of timeline `index`
    #[must_use]
    pub fn timeline_duration(&self, index: usize) -> Option<f64> {
        self.journal.borrow().timeline_ends.get(index).copied()
    }

    /// Number of timelines whose completion callback has not run
    #[must_use]
    pub fn pending_timelines(&self) -> usize {
        self.journal.borrow().pending.len()
    }

    /// Runs every pending completion callback, returning how many ran
    pub fn finish_timelines(&self) -> usize {
        let pending = std::mem::take(&mut self.journal.borrow_mut().pending);
        let count = pending.len();
        pending.into_iter().for_each(|on_complete| on_complete());
        count
    }
}

impl<T: Clone> Animator<T> for RecordingAnimator<T> {
    type Timeline = RecordingTimeline<T>;

    fn animate_to(&self, target: &T, tween: &Tween) {
        self.journal.borrow_mut().tweens.push(RecordedTween {
            target: target.clone(),
            tween: *tween,
        });
    }

    fn create_timeline(&self, on_complete: Box<dyn FnOnce()>) -> Self::Timeline {
        let mut journal = self.journal.borrow_mut();
        let index = journal.timeline_ends.len();
        journal.timeline_ends.push(0.0);
        journal.pending.push(on_complete);

        RecordingTimeline {
            index,
            journal: Rc::clone(&self.journal),
        }
    }
}

/// Timeline handle returned by [`RecordingAnimator`]
pub struct RecordingTimeline<T> {
    index: usize,
    journal: Rc<RefCell<Journal<T>>>,
}

impl<T: Clone> Timeline<T> for RecordingTimeline<T> {
    fn to(&mut self, target: Option<&T>, tween: &Tween, position: Position) -> &mut Self {
        {
            let mut journal = self.journal.borrow_mut();
            let end = journal.timeline_ends.get(self.index).copied().unwrap_or(0.0);
            let start = position.start_at(end);

            if let Some(slot) = journal.timeline_ends.get_mut(self.index) {
                *slot = end.max(start + tween.duration);
            }

            journal.steps.push(RecordedStep {
                timeline: self.index,
                target: target.cloned(),
                tween: *tween,
                position,
                start,
            });
        }
        self
    }
}
