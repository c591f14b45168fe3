//! Viewport snapshot used by navigation queries and drawing

mod zoom;

pub use zoom::{ZoomModel, MAX_ZOOM, MIN_ZOOM};

use crate::document::{DocumentModel, Page};
use crate::RectF;
use std::ops::RangeInclusive;

/// Immutable snapshot of what the viewport shows
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Visible rectangle in canvas coordinates
    pub view_rect: RectF,
    /// Zoom applied on top of reference bounds
    pub zoom: f32,
    /// Current view index when the snapshot was taken
    pub current: usize,
    /// Inclusive range of visible view indexes
    visible: Option<RangeInclusive<usize>>,
}

impl ViewState {
    /// Snapshot with the visible range not yet determined
    pub fn new(view_rect: RectF, zoom: f32, current: usize) -> Self {
        Self {
            view_rect,
            zoom,
            current,
            visible: None,
        }
    }

    /// Populate the visible range by testing every page.
    ///
    /// The range spans from the first to the last page reported visible.
    pub fn with_visible_pages<F>(mut self, document: &DocumentModel, is_visible: F) -> Self
    where
        F: Fn(&Page, &ViewState) -> bool,
    {
        let mut first = None;
        let mut last = None;
        for page in document.pages() {
            if is_visible(page, &self) {
                let index = page.index.view_index;
                first.get_or_insert(index);
                last = Some(index);
            }
        }

        self.visible = first.zip(last).map(|(first, last)| first..=last);
        self
    }

    /// Visible view indexes, `None` when no page is visible
    pub fn visible_pages(&self) -> Option<RangeInclusive<usize>> {
        self.visible.clone()
    }

    pub fn first_visible(&self) -> Option<usize> {
        self.visible.as_ref().map(|r| *r.start())
    }

    pub fn last_visible(&self) -> Option<usize> {
        self.visible.as_ref().map(|r| *r.end())
    }

    pub fn is_in_visible_range(&self, view_index: usize) -> bool {
        self.visible.as_ref().is_some_and(|r| r.contains(&view_index))
    }

    /// Page bounds at the snapshot zoom
    pub fn bounds(&self, page: &Page) -> RectF {
        page.bounds(self.zoom)
    }
}
