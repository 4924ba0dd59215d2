//! Page exit transitions
//!
//! Internal link clicks are held back while the main content rotates away
//! and the overlay slides in; navigation happens when that timeline
//! completes. Anchors and external-looking links are left to the browser.

use std::rc::Rc;

use web_sys::{Document, Element};

use super::listeners::{ListenerHandle, Listeners, query_all, query_one};
use crate::config::FxConfig;
use crate::error::Result;
use crate::interaction::TransitionRequest;
use crate::motion::{Animator, Ease, Length, Position, Props, Timeline, Tween};
use crate::navigation::Navigate;

/// The two stages of the exit sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitPlan {
    /// Main content: rotate away, fade, shrink
    pub content: Tween,
    /// Overlay: slide into view
    pub overlay: Tween,
    /// Overlay start relative to the end of the content stage
    pub overlay_position: Position,
}

impl ExitPlan {
    #[must_use]
    pub fn from_config(config: &FxConfig) -> Self {
        Self {
            content: Tween::new(
                Props::default().rotation_y(-90.0).opacity(0.0).scale(0.8),
                config.exit_seconds,
                Ease::Power2In,
            ),
            overlay: Tween::new(
                Props::default().y(Length::Percent(0.0)),
                config.overlay_seconds,
                Ease::ExpoOut,
            ),
            overlay_position: Position::Overlap(config.overlay_overlap_seconds),
        }
    }

    /// Seconds from the click until navigation
    #[must_use]
    pub fn duration(&self) -> f64 {
        let overlay_start = self.overlay_position.start_at(self.content.duration);
        self.content.duration.max(overlay_start + self.overlay.duration)
    }
}

impl Default for ExitPlan {
    fn default() -> Self {
        Self::from_config(&FxConfig::default())
    }
}

/// Plays the exit sequence and calls `on_complete` when it has finished.
///
/// A missing `content` or `overlay` target still occupies its stage, so the
/// sequence keeps its length and completes.
pub fn play_exit<T, A>(
    animator: &A,
    content: Option<&T>,
    overlay: Option<&T>,
    plan: &ExitPlan,
    on_complete: Box<dyn FnOnce()>,
) where
    A: Animator<T> + ?Sized,
{
    let mut timeline = animator.create_timeline(on_complete);
    timeline
        .to(content, &plan.content, Position::Sequential)
        .to(overlay, &plan.overlay, plan.overlay_position);
}

/// What a link click needs to run the exit sequence
pub struct LinkExit<T, A: ?Sized, N> {
    animator: Rc<A>,
    navigator: Rc<N>,
    overlay: Option<T>,
    plan: ExitPlan,
}

impl<T, A, N> LinkExit<T, A, N>
where
    A: Animator<T> + ?Sized,
    N: Navigate + 'static,
{
    pub const fn new(animator: Rc<A>, navigator: Rc<N>, overlay: Option<T>, plan: ExitPlan) -> Self {
        Self {
            animator,
            navigator,
            overlay,
            plan,
        }
    }

    /// Handles a click on a link whose `href` is read at click time.
    ///
    /// Native links return `false` untouched. Otherwise `prevent_default`
    /// runs, `content` looks up the main region and the exit sequence
    /// starts, navigating once it completes.
    pub fn on_click(
        &self,
        href: Option<&str>,
        prevent_default: impl FnOnce(),
        content: impl FnOnce() -> Option<T>,
    ) -> bool {
        let Some(request) = href.and_then(TransitionRequest::from_href) else {
            return false;
        };

        prevent_default();

        let content = content();
        let navigator = Rc::clone(&self.navigator);
        play_exit(
            &*self.animator,
            content.as_ref(),
            self.overlay.as_ref(),
            &self.plan,
            Box::new(move || navigator.navigate(request.destination())),
        );
        true
    }
}

/// Intercepts clicks on internal links.
///
/// The overlay is looked up once here; the main content region is looked
/// up on each click.
///
/// # Errors
///
/// Returns an error if a configured selector is invalid or a listener cannot
/// be registered.
pub fn init_page_transitions<A, N>(
    document: &Document,
    animator: Rc<A>,
    navigator: Rc<N>,
    config: &FxConfig,
) -> Result<Listeners>
where
    A: Animator<Element> + 'static,
    N: Navigate + 'static,
{
    let overlay = query_one(document, &config.overlay_selector)?;
    let exit = Rc::new(LinkExit::new(
        animator,
        navigator,
        overlay,
        ExitPlan::from_config(config),
    ));
    let mut listeners = Listeners::new();

    for link in query_all(document, &config.link_selector)? {
        let handle = {
            let source = link.clone();
            let document = document.clone();
            let main_selector = config.main_selector.clone();
            let exit = Rc::clone(&exit);

            ListenerHandle::attach(&link, "click", move |event| {
                exit.on_click(
                    source.get_attribute("href").as_deref(),
                    || event.prevent_default(),
                    || document.query_selector(&main_selector).ok().flatten(),
                );
            })?
        };
        listeners.push(handle);
    }

    Ok(listeners)
}
