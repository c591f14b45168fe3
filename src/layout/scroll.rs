//! Continuous scroll layout (horizontal row or vertical column)

use crate::document::{DocumentModel, Page};
use crate::layout::{InvalidateSizeReason, Viewport};
use crate::view::ViewState;
use crate::{RectF, ScrollLimits};

/// Gap between consecutive pages in document units
pub const PAGE_GAP: f32 = 1.0;

/// Direction pages are laid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right, page height locked to the viewport height
    Horizontal,
    /// Top to bottom, page width locked to the viewport width
    Vertical,
}

/// Layout that places every page along one axis
#[derive(Debug, Clone)]
pub struct ScrollLayout {
    axis: Axis,
    viewport: Viewport,
    initialized: bool,
}

impl ScrollLayout {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            viewport: Viewport::default(),
            initialized: false,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.initialized = viewport.is_valid();
    }

    /// Recompute page bounds.
    ///
    /// With `changed_page` only that page and the ones after it are placed
    /// again, starting from the page's current leading edge. Returns `false`
    /// when nothing was laid out.
    pub fn invalidate_page_sizes(
        &self,
        document: &mut DocumentModel,
        reason: InvalidateSizeReason,
        changed_page: Option<usize>,
    ) -> bool {
        if !self.initialized {
            return false;
        }
        // Cross-axis size is viewport-locked, alignment cannot move anything
        if reason == InvalidateSizeReason::PageAlign {
            return false;
        }

        let (start, mut offset) = match changed_page {
            None => (0, 0.0),
            Some(index) => match document.page(index) {
                Some(page) => (index, self.leading_edge(&page.reference_bounds())),
                None => return false,
            },
        };

        let pages = document.pages_from_mut(start);
        tracing::debug!(
            axis = ?self.axis,
            ?reason,
            start,
            count = pages.len(),
            "scroll relayout"
        );

        for page in pages {
            let bounds = self.page_bounds(page.aspect_ratio(), offset);
            offset = self.trailing_edge(&bounds) + PAGE_GAP;
            page.set_bounds(bounds);
        }
        true
    }

    /// Bounds of a page whose leading edge sits at `offset`
    fn page_bounds(&self, aspect_ratio: f32, offset: f32) -> RectF {
        match self.axis {
            Axis::Horizontal => {
                let height = self.viewport.height;
                let width = height * aspect_ratio;
                RectF::new(offset, 0.0, offset + width, height)
            }
            Axis::Vertical => {
                let width = self.viewport.width;
                let height = width / aspect_ratio;
                RectF::new(0.0, offset, width, offset + height)
            }
        }
    }

    fn leading_edge(&self, bounds: &RectF) -> f32 {
        match self.axis {
            Axis::Horizontal => bounds.left,
            Axis::Vertical => bounds.top,
        }
    }

    fn trailing_edge(&self, bounds: &RectF) -> f32 {
        match self.axis {
            Axis::Horizontal => bounds.right,
            Axis::Vertical => bounds.bottom,
        }
    }

    /// Maximum scroll offsets at `zoom`
    pub fn scroll_limits(&self, document: &DocumentModel, zoom: f32) -> ScrollLimits {
        let width = self.viewport.width as i32;
        let height = self.viewport.height as i32;
        let last = document.last_page().map(|page| page.bounds(zoom));

        match self.axis {
            Axis::Horizontal => ScrollLimits {
                right: last.map_or(0, |b| b.right as i32 - width),
                bottom: (self.viewport.height * zoom) as i32 - height,
                ..ScrollLimits::ZERO
            },
            Axis::Vertical => ScrollLimits {
                right: (self.viewport.width * zoom) as i32 - width,
                bottom: last.map_or(0, |b| b.bottom as i32 - height),
                ..ScrollLimits::ZERO
            },
        }
    }

    /// Visible page whose center is closest to the viewport center.
    ///
    /// Strict comparison keeps the first page seen on an exact tie.
    pub fn calculate_current_page(
        &self,
        document: &DocumentModel,
        view_state: &ViewState,
    ) -> usize {
        let Some(visible) = view_state.visible_pages() else {
            return 0;
        };

        let view_center = self.center(&view_state.view_rect);
        let mut result = 0;
        let mut best_distance = i64::MAX;

        for page in document.pages_range(*visible.start(), *visible.end() + 1) {
            let page_center = self.center(&view_state.bounds(page));
            let distance = (page_center - view_center).abs();
            if distance < best_distance {
                best_distance = distance;
                result = page.index.view_index;
            }
        }

        result
    }

    fn center(&self, rect: &RectF) -> i64 {
        let center = match self.axis {
            Axis::Horizontal => rect.center_x(),
            Axis::Vertical => rect.center_y(),
        };
        center.round() as i64
    }

    pub fn is_page_visible(&self, page: &Page, view_state: &ViewState) -> bool {
        view_state.view_rect.intersects(&view_state.bounds(page))
    }

    /// Pixel step for one configured scroll, as `(dx, dy)`
    pub fn scroll_step(&self, direction: i32, scroll_height: u8) -> (i32, i32) {
        let fraction = f32::from(scroll_height) / 100.0;
        match self.axis {
            Axis::Horizontal => ((direction as f32 * self.viewport.width * fraction) as i32, 0),
            Axis::Vertical => (0, (direction as f32 * self.viewport.height * fraction) as i32),
        }
    }

    /// Scroll position that brings `page` to the viewport origin.
    ///
    /// The cross axis keeps `current` unless fractional offsets are given.
    pub fn page_scroll_target(
        &self,
        bounds: &RectF,
        current: (i32, i32),
        offset: Option<(f32, f32)>,
    ) -> (i32, i32) {
        match offset {
            Some((offset_x, offset_y)) => (
                (bounds.left + offset_x * bounds.width()) as i32,
                (bounds.top + offset_y * bounds.height()) as i32,
            ),
            None => match self.axis {
                Axis::Horizontal => (bounds.left as i32, current.1),
                Axis::Vertical => (current.0, bounds.top as i32),
            },
        }
    }
}
