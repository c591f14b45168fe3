//! Page alignment policy for single-page mode

use crate::layout::Viewport;
use crate::RectF;
use serde::{Deserialize, Serialize};

/// How a page is fitted into the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageAlign {
    /// Page width matches the viewport width
    Width,
    /// Page height matches the viewport height
    Height,
    /// Width fit unless the page would overflow vertically
    #[default]
    Auto,
}

impl PageAlign {
    /// Resolve `Auto` into `Width` or `Height` for one page
    pub fn resolve(self, viewport: Viewport, aspect_ratio: f32) -> PageAlign {
        match self {
            PageAlign::Auto => {
                let page_height = viewport.width / aspect_ratio;
                if page_height > viewport.height {
                    PageAlign::Height
                } else {
                    PageAlign::Width
                }
            }
            align => align,
        }
    }

    /// Reference bounds of a page under this policy
    pub fn page_bounds(self, viewport: Viewport, aspect_ratio: f32) -> RectF {
        match self.resolve(viewport, aspect_ratio) {
            PageAlign::Height => {
                let page_width = viewport.height * aspect_ratio;
                let left = (viewport.width - page_width) / 2.0;
                RectF::new(left, 0.0, left + page_width, viewport.height)
            }
            _ => {
                let page_height = viewport.width / aspect_ratio;
                RectF::new(0.0, 0.0, viewport.width, page_height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_prefers_width_when_it_fits() {
        let viewport = Viewport::new(100.0, 100.0);
        assert_eq!(PageAlign::Auto.resolve(viewport, 2.0), PageAlign::Width);
        assert_eq!(
            PageAlign::Auto.page_bounds(viewport, 2.0),
            RectF::new(0.0, 0.0, 100.0, 50.0)
        );
    }

    #[test]
    fn test_auto_falls_back_to_height() {
        let viewport = Viewport::new(100.0, 100.0);
        assert_eq!(PageAlign::Auto.resolve(viewport, 0.5), PageAlign::Height);
        assert_eq!(
            PageAlign::Auto.page_bounds(viewport, 0.5),
            RectF::new(25.0, 0.0, 75.0, 100.0)
        );
    }

    #[test]
    fn test_square_page_exactly_fits() {
        // 100 / 1.0 == 100 is not an overflow
        let viewport = Viewport::new(100.0, 100.0);
        assert_eq!(PageAlign::Auto.resolve(viewport, 1.0), PageAlign::Width);
    }

    #[test]
    fn test_explicit_policies_ignore_overflow() {
        let viewport = Viewport::new(100.0, 100.0);
        assert_eq!(
            PageAlign::Width.page_bounds(viewport, 0.5),
            RectF::new(0.0, 0.0, 100.0, 200.0)
        );
        assert_eq!(
            PageAlign::Height.page_bounds(viewport, 2.0),
            RectF::new(-50.0, 0.0, 150.0, 100.0)
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&PageAlign::Auto).unwrap(), "\"auto\"");
        let align: PageAlign = serde_json::from_str("\"height\"").unwrap();
        assert_eq!(align, PageAlign::Height);
    }
}
