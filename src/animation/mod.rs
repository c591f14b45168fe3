//! Page-turn animators for single-page mode
//!
//! The layout core only talks to the active animator through
//! [`PageAnimator`]; [`AnimatorProxy`] holds the active one and allows it to
//! be replaced at runtime.

mod tracked;

pub use tracked::TrackedAnimator;

use crate::document::Page;
use crate::view::ViewState;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Pages to paint, back to front
pub type PaintOrder = SmallVec<[usize; 2]>;

/// Outcome of a page-turn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Turn to the given page right away
    TurnPage(usize),
    /// An animated turn started; the page changes when it finishes
    Started { from: usize, to: usize },
    /// Nothing to do (first/last page, or a turn is already running)
    Ignored,
}

/// Selectable page-turn animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAnimationType {
    #[default]
    None,
    Slider,
    Curler,
    Fader,
}

impl PageAnimationType {
    /// Instantiate the animator for this type
    pub fn create(self) -> Box<dyn PageAnimator> {
        match self {
            PageAnimationType::None => Box::new(InstantPageView::new()),
            kind => Box::new(TrackedAnimator::new(kind)),
        }
    }
}

/// Lifecycle calls the single-page controller makes on its animator
pub trait PageAnimator: Send + std::fmt::Debug {
    fn animation_type(&self) -> PageAnimationType;

    /// Forget any running turn and show `current`
    fn reset_page_indexes(&mut self, current: usize);

    fn set_view_drawn(&mut self, drawn: bool);

    fn is_view_drawn(&self) -> bool;

    /// Pages to paint for this view state
    fn draw(&mut self, view_state: &ViewState) -> PaintOrder;

    /// Request a turn by `direction` pages from `current`
    fn animate(&mut self, direction: i32, current: usize, page_count: usize) -> AnimationStep;

    /// A page finished decoding; returns whether a redraw is needed
    fn page_updated(&mut self, view_state: &ViewState, view_index: usize) -> bool;

    fn is_page_visible(&self, page: &Page, view_state: &ViewState) -> bool;

    /// Complete a running turn, returning the page it lands on
    fn finish(&mut self) -> Option<usize> {
        None
    }
}

/// Target page of a turn, if it stays inside the document
pub(crate) fn turn_target(current: usize, direction: i32, page_count: usize) -> Option<usize> {
    let target = current as i64 + i64::from(direction);
    (0..page_count as i64).contains(&target).then_some(target as usize)
}

/// Turns pages immediately without animation
#[derive(Debug, Clone, Default)]
pub struct InstantPageView {
    foreground: usize,
    view_drawn: bool,
}

impl InstantPageView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageAnimator for InstantPageView {
    fn animation_type(&self) -> PageAnimationType {
        PageAnimationType::None
    }

    fn reset_page_indexes(&mut self, current: usize) {
        self.foreground = current;
    }

    fn set_view_drawn(&mut self, drawn: bool) {
        self.view_drawn = drawn;
    }

    fn is_view_drawn(&self) -> bool {
        self.view_drawn
    }

    fn draw(&mut self, view_state: &ViewState) -> PaintOrder {
        self.foreground = view_state.current;
        self.view_drawn = true;
        smallvec![self.foreground]
    }

    fn animate(&mut self, direction: i32, current: usize, page_count: usize) -> AnimationStep {
        match turn_target(current, direction, page_count) {
            Some(target) => AnimationStep::TurnPage(target),
            None => AnimationStep::Ignored,
        }
    }

    fn page_updated(&mut self, view_state: &ViewState, view_index: usize) -> bool {
        view_index == view_state.current
    }

    fn is_page_visible(&self, page: &Page, view_state: &ViewState) -> bool {
        page.index.view_index == view_state.current
    }
}

/// Holds the active animator and forwards every call to it
#[derive(Debug)]
pub struct AnimatorProxy {
    active: Box<dyn PageAnimator>,
}

impl Default for AnimatorProxy {
    fn default() -> Self {
        Self::new(Box::new(InstantPageView::new()))
    }
}

impl AnimatorProxy {
    pub fn new(active: Box<dyn PageAnimator>) -> Self {
        Self { active }
    }

    /// Replace the active animator, returning the previous one
    pub fn switch_strategy(&mut self, next: Box<dyn PageAnimator>) -> Box<dyn PageAnimator> {
        tracing::debug!(
            from = ?self.active.animation_type(),
            to = ?next.animation_type(),
            "switching page animator"
        );
        std::mem::replace(&mut self.active, next)
    }
}

impl PageAnimator for AnimatorProxy {
    fn animation_type(&self) -> PageAnimationType {
        self.active.animation_type()
    }

    fn reset_page_indexes(&mut self, current: usize) {
        self.active.reset_page_indexes(current);
    }

    fn set_view_drawn(&mut self, drawn: bool) {
        self.active.set_view_drawn(drawn);
    }

    fn is_view_drawn(&self) -> bool {
        self.active.is_view_drawn()
    }

    fn draw(&mut self, view_state: &ViewState) -> PaintOrder {
        self.active.draw(view_state)
    }

    fn animate(&mut self, direction: i32, current: usize, page_count: usize) -> AnimationStep {
        self.active.animate(direction, current, page_count)
    }

    fn page_updated(&mut self, view_state: &ViewState, view_index: usize) -> bool {
        self.active.page_updated(view_state, view_index)
    }

    fn is_page_visible(&self, page: &Page, view_state: &ViewState) -> bool {
        self.active.is_page_visible(page, view_state)
    }

    fn finish(&mut self) -> Option<usize> {
        self.active.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageIndex;
    use crate::RectF;

    fn state(current: usize) -> ViewState {
        ViewState::new(RectF::new(0.0, 0.0, 100.0, 100.0), 1.0, current)
    }

    #[test]
    fn test_turn_target_bounds() {
        assert_eq!(turn_target(0, -1, 3), None);
        assert_eq!(turn_target(0, 1, 3), Some(1));
        assert_eq!(turn_target(2, 1, 3), None);
        assert_eq!(turn_target(0, 1, 0), None);
    }

    #[test]
    fn test_instant_turns_immediately() {
        let mut view = InstantPageView::new();
        assert_eq!(view.animate(1, 0, 2), AnimationStep::TurnPage(1));
        assert_eq!(view.animate(1, 1, 2), AnimationStep::Ignored);
        assert_eq!(view.finish(), None);
    }

    #[test]
    fn test_instant_visibility_is_current_page() {
        let view = InstantPageView::new();
        let page = Page::new(PageIndex::identity(2), 1.0);
        assert!(view.is_page_visible(&page, &state(2)));
        assert!(!view.is_page_visible(&page, &state(1)));
    }

    #[test]
    fn test_instant_draw_marks_view_drawn() {
        let mut view = InstantPageView::new();
        view.set_view_drawn(false);
        assert_eq!(view.draw(&state(4)).as_slice(), &[4]);
        assert!(view.is_view_drawn());
    }

    #[test]
    fn test_proxy_switch_strategy() {
        let mut proxy = AnimatorProxy::default();
        assert_eq!(proxy.animation_type(), PageAnimationType::None);

        let previous = proxy.switch_strategy(PageAnimationType::Curler.create());
        assert_eq!(previous.animation_type(), PageAnimationType::None);
        assert_eq!(proxy.animation_type(), PageAnimationType::Curler);
        assert_eq!(
            proxy.animate(1, 0, 3),
            AnimationStep::Started { from: 0, to: 1 }
        );
    }

    #[test]
    fn test_create_matches_type() {
        for kind in [
            PageAnimationType::None,
            PageAnimationType::Slider,
            PageAnimationType::Curler,
            PageAnimationType::Fader,
        ] {
            assert_eq!(kind.create().animation_type(), kind);
        }
    }
}
