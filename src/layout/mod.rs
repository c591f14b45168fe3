//! Page layout strategies for the three view modes

mod align;
mod scroll;
mod single;

pub use align::PageAlign;
pub use scroll::{Axis, ScrollLayout, PAGE_GAP};
pub use single::SinglePageLayout;

use crate::document::DocumentModel;
use crate::view::ViewState;
use crate::ScrollLimits;
use serde::{Deserialize, Serialize};

/// Viewport size in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are positive
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// How pages are arranged on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    HorizontalScroll,
    #[default]
    VerticalScroll,
    SinglePage,
}

/// Why page sizes are being recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidateSizeReason {
    Generic,
    /// First layout after the viewport became valid
    Init,
    /// Viewport size changed
    Layout,
    /// Alignment policy changed
    PageAlign,
    /// A page's real size became known
    PageLoaded,
}

/// Active layout strategy
#[derive(Debug, Clone)]
pub enum LayoutStrategy {
    HorizontalScroll(ScrollLayout),
    VerticalScroll(ScrollLayout),
    SinglePage(SinglePageLayout),
}

impl LayoutStrategy {
    /// Create the strategy for a view mode
    pub fn for_mode(mode: ViewMode, align: PageAlign) -> Self {
        match mode {
            ViewMode::HorizontalScroll => {
                LayoutStrategy::HorizontalScroll(ScrollLayout::horizontal())
            }
            ViewMode::VerticalScroll => LayoutStrategy::VerticalScroll(ScrollLayout::vertical()),
            ViewMode::SinglePage => LayoutStrategy::SinglePage(SinglePageLayout::new(align)),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            LayoutStrategy::HorizontalScroll(_) => ViewMode::HorizontalScroll,
            LayoutStrategy::VerticalScroll(_) => ViewMode::VerticalScroll,
            LayoutStrategy::SinglePage(_) => ViewMode::SinglePage,
        }
    }

    pub fn is_initialized(&self) -> bool {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => {
                l.is_initialized()
            }
            LayoutStrategy::SinglePage(l) => l.is_initialized(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => l.viewport(),
            LayoutStrategy::SinglePage(l) => l.viewport(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => {
                l.set_viewport(viewport)
            }
            LayoutStrategy::SinglePage(l) => l.set_viewport(viewport),
        }
    }

    /// Propagate an alignment policy change; only single-page mode uses it
    pub fn set_align(&mut self, align: PageAlign) {
        if let LayoutStrategy::SinglePage(l) = self {
            l.set_align(align);
        }
    }

    /// Recompute all page bounds, or those affected by `changed_page`
    pub fn invalidate_page_sizes(
        &self,
        document: &mut DocumentModel,
        reason: InvalidateSizeReason,
        changed_page: Option<usize>,
    ) -> bool {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => {
                l.invalidate_page_sizes(document, reason, changed_page)
            }
            LayoutStrategy::SinglePage(l) => {
                l.invalidate_page_sizes(document, reason, changed_page)
            }
        }
    }

    pub fn scroll_limits(&self, document: &DocumentModel, zoom: f32) -> ScrollLimits {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => {
                l.scroll_limits(document, zoom)
            }
            LayoutStrategy::SinglePage(l) => l.scroll_limits(document, zoom),
        }
    }

    pub fn calculate_current_page(
        &self,
        document: &DocumentModel,
        view_state: &ViewState,
    ) -> usize {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => {
                l.calculate_current_page(document, view_state)
            }
            LayoutStrategy::SinglePage(l) => l.calculate_current_page(document),
        }
    }

    /// The continuous layout, if this is a scroll mode
    pub fn as_scroll(&self) -> Option<&ScrollLayout> {
        match self {
            LayoutStrategy::HorizontalScroll(l) | LayoutStrategy::VerticalScroll(l) => Some(l),
            LayoutStrategy::SinglePage(_) => None,
        }
    }
}
