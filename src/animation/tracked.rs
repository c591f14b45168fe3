//! Animated page turns driven by the host renderer

use super::{turn_target, AnimationStep, PageAnimationType, PageAnimator, PaintOrder};
use crate::document::Page;
use crate::view::ViewState;
use smallvec::smallvec;

/// Tracks the pages involved in an animated turn.
///
/// The host renders the transition between `foreground` and `background`
/// and calls [`PageAnimator::finish`] once it is done.
#[derive(Debug, Clone)]
pub struct TrackedAnimator {
    kind: PageAnimationType,
    foreground: usize,
    background: Option<usize>,
    view_drawn: bool,
}

impl TrackedAnimator {
    pub fn new(kind: PageAnimationType) -> Self {
        Self {
            kind,
            foreground: 0,
            background: None,
            view_drawn: false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.background.is_some()
    }
}

impl PageAnimator for TrackedAnimator {
    fn animation_type(&self) -> PageAnimationType {
        self.kind
    }

    fn reset_page_indexes(&mut self, current: usize) {
        self.foreground = current;
        self.background = None;
    }

    fn set_view_drawn(&mut self, drawn: bool) {
        self.view_drawn = drawn;
    }

    fn is_view_drawn(&self) -> bool {
        self.view_drawn
    }

    fn draw(&mut self, _view_state: &ViewState) -> PaintOrder {
        self.view_drawn = true;
        match self.background {
            Some(background) => smallvec![background, self.foreground],
            None => smallvec![self.foreground],
        }
    }

    fn animate(&mut self, direction: i32, current: usize, page_count: usize) -> AnimationStep {
        if self.is_animating() {
            return AnimationStep::Ignored;
        }
        let Some(target) = turn_target(current, direction, page_count) else {
            return AnimationStep::Ignored;
        };

        self.foreground = current;
        self.background = Some(target);
        AnimationStep::Started {
            from: current,
            to: target,
        }
    }

    fn page_updated(&mut self, _view_state: &ViewState, view_index: usize) -> bool {
        view_index == self.foreground || self.background == Some(view_index)
    }

    fn is_page_visible(&self, page: &Page, _view_state: &ViewState) -> bool {
        let index = page.index.view_index;
        index == self.foreground || self.background == Some(index)
    }

    fn finish(&mut self) -> Option<usize> {
        let target = self.background.take()?;
        self.foreground = target;
        Some(target)
    }
}
