//! Single-page layout: every page fitted to the viewport on its own

use crate::document::{DocumentModel, Page};
use crate::layout::{InvalidateSizeReason, PageAlign, Viewport};
use crate::ScrollLimits;

/// Layout where one page fills the viewport at a time
#[derive(Debug, Clone)]
pub struct SinglePageLayout {
    viewport: Viewport,
    initialized: bool,
    align: PageAlign,
}

impl SinglePageLayout {
    pub fn new(align: PageAlign) -> Self {
        Self {
            viewport: Viewport::default(),
            initialized: false,
            align,
        }
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

    pub fn align(&self) -> PageAlign {
        self.align
    }

    pub fn set_align(&mut self, align: PageAlign) {
        self.align = align;
    }

    /// Fit pages into the viewport.
    ///
    /// Without `changed_page` every page is fitted, since any of them can
    /// become current.
    pub fn invalidate_page_sizes(
        &self,
        document: &mut DocumentModel,
        reason: InvalidateSizeReason,
        changed_page: Option<usize>,
    ) -> bool {
        if !self.initialized {
            return false;
        }

        tracing::debug!(align = ?self.align, ?reason, ?changed_page, "single page relayout");

        match changed_page {
            None => {
                for page in document.pages_mut() {
                    self.fit(page);
                }
            }
            Some(index) => match document.page_mut(index) {
                Some(page) => self.fit(page),
                None => return false,
            },
        }
        true
    }

    fn fit(&self, page: &mut Page) {
        page.set_bounds(self.align.page_bounds(self.viewport, page.aspect_ratio()));
    }

    /// Scroll range inside the current page at `zoom`
    pub fn scroll_limits(&self, document: &DocumentModel, zoom: f32) -> ScrollLimits {
        let Some(page) = document.current_page() else {
            return ScrollLimits::ZERO;
        };

        let width = self.viewport.width as i32;
        let height = self.viewport.height as i32;
        let bounds = page.bounds(zoom);
        let (left, top) = (bounds.left as i32, bounds.top as i32);
        let (right, bottom) = (bounds.right as i32, bounds.bottom as i32);

        ScrollLimits {
            left: if left > 0 { 0 } else { left },
            top: if top > 0 { 0 } else { top },
            right: if right < width { 0 } else { right - width },
            bottom: if bottom < height { 0 } else { bottom - height },
        }
    }

    /// The stored current page; there is only one candidate
    pub fn calculate_current_page(&self, document: &DocumentModel) -> usize {
        document.current_view_page_index()
    }
}
