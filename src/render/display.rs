//! Draw list: pages to paint for one view state

use crate::document::DocumentModel;
use crate::view::ViewState;
use crate::RectF;

/// A page to paint and where
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPage {
    pub view_index: usize,
    pub doc_index: usize,
    /// Zoomed bounds in view coordinates
    pub bounds: RectF,
}

/// Pages in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub zoom: f32,
    pub pages: Vec<DrawPage>,
}

impl DrawList {
    /// Build a draw list for the given view indexes, painted in iteration order.
    ///
    /// Indexes past the end of the document are skipped.
    pub fn build(
        document: &DocumentModel,
        view_state: &ViewState,
        order: impl IntoIterator<Item = usize>,
    ) -> Self {
        let origin = &view_state.view_rect;
        let pages = order
            .into_iter()
            .filter_map(|view_index| document.page(view_index))
            .map(|page| DrawPage {
                view_index: page.index.view_index,
                doc_index: page.index.doc_index,
                bounds: view_state.bounds(page).offset(-origin.left, -origin.top),
            })
            .collect();

        DrawList {
            zoom: view_state.zoom,
            pages,
        }
    }

    /// Build a draw list of every page in the visible range
    pub fn visible(document: &DocumentModel, view_state: &ViewState) -> Self {
        match view_state.visible_pages() {
            Some(range) => Self::build(document, view_state, range),
            None => DrawList {
                zoom: view_state.zoom,
                pages: Vec::new(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// View indexes in paint order
    pub fn view_indexes(&self) -> impl Iterator<Item = usize> + '_ {
        self.pages.iter().map(|p| p.view_index)
    }
}
