//! Per-page geometry

use crate::RectF;

/// Fallback aspect ratio for pages whose metadata is unusable
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;

/// Position of a page in the underlying document and in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageIndex {
    /// Index in the source document
    pub doc_index: usize,
    /// Index in view order (what layout and navigation use)
    pub view_index: usize,
}

impl PageIndex {
    pub fn new(doc_index: usize, view_index: usize) -> Self {
        Self { doc_index, view_index }
    }

    /// Index where document and view order agree
    pub fn identity(index: usize) -> Self {
        Self::new(index, index)
    }
}

/// A single page and its layout bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub index: PageIndex,
    aspect_ratio: f32,
    /// Set once the decoder reported the real page size
    ratio_known: bool,
    /// Bounds at zoom 1.0, written by the layout strategy only
    bounds: RectF,
}

impl Page {
    /// Create a page with a provisional aspect ratio
    pub fn new(index: PageIndex, aspect_ratio: f32) -> Self {
        Self {
            index,
            aspect_ratio: sanitize_ratio(aspect_ratio, index),
            ratio_known: false,
            bounds: RectF::default(),
        }
    }

    /// Width / height ratio of the page content
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Whether the aspect ratio is final
    pub fn is_ratio_known(&self) -> bool {
        self.ratio_known
    }

    /// Replace the provisional ratio with the decoded one.
    ///
    /// Returns `true` when the stored ratio changed. Once resolved the ratio
    /// can no longer be changed.
    pub fn resolve_aspect_ratio(&mut self, aspect_ratio: f32) -> bool {
        if self.ratio_known {
            return false;
        }
        self.ratio_known = true;

        let ratio = sanitize_ratio(aspect_ratio, self.index);
        if ratio == self.aspect_ratio {
            return false;
        }
        self.aspect_ratio = ratio;
        true
    }

    /// Bounds scaled by `zoom`
    pub fn bounds(&self, zoom: f32) -> RectF {
        self.bounds.scaled(zoom)
    }

    /// Reference bounds (zoom 1.0)
    pub fn reference_bounds(&self) -> RectF {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: RectF) {
        self.bounds = bounds;
    }
}

fn sanitize_ratio(aspect_ratio: f32, index: PageIndex) -> f32 {
    if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        tracing::warn!(
            view_index = index.view_index,
            aspect_ratio,
            "invalid page aspect ratio, using default"
        );
        DEFAULT_ASPECT_RATIO
    }
}
