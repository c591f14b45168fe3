//! Document page sequence and current page state

mod current;
mod page;

pub use current::{CurrentPageChanged, CurrentPageListeners, CurrentPageModel, ListenerId};
pub use page::{Page, PageIndex, DEFAULT_ASPECT_RATIO};

use rustc_hash::FxHashMap;

/// Ordered pages in view order plus the current page
#[derive(Debug, Default)]
pub struct DocumentModel {
    /// Pages indexed by view index
    pages: Vec<Page>,
    /// Document index -> view index
    doc_to_view: FxHashMap<usize, usize>,
    /// Current page state
    current: CurrentPageModel,
}

impl DocumentModel {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document whose view order matches document order
    pub fn from_aspect_ratios(ratios: &[f32]) -> Self {
        Self::from_ordered(ratios.iter().copied().enumerate())
    }

    /// Create a document from `(doc_index, aspect_ratio)` pairs given in view order
    pub fn from_ordered(pages: impl IntoIterator<Item = (usize, f32)>) -> Self {
        let mut doc = Self::new();
        for (view_index, (doc_index, ratio)) in pages.into_iter().enumerate() {
            doc.pages.push(Page::new(PageIndex::new(doc_index, view_index), ratio));
            doc.doc_to_view.insert(doc_index, view_index);
        }
        doc
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page by view index
    pub fn page(&self, view_index: usize) -> Option<&Page> {
        self.pages.get(view_index)
    }

    pub(crate) fn page_mut(&mut self, view_index: usize) -> Option<&mut Page> {
        self.pages.get_mut(view_index)
    }

    /// All pages in view order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub(crate) fn pages_mut(&mut self) -> &mut [Page] {
        &mut self.pages
    }

    /// Pages in `[from, to)`, clipped to the document
    pub fn pages_range(&self, from: usize, to: usize) -> &[Page] {
        let to = to.min(self.pages.len());
        let from = from.min(to);
        &self.pages[from..to]
    }

    /// Pages from `from` to the end
    pub fn pages_from(&self, from: usize) -> &[Page] {
        self.pages_range(from, self.pages.len())
    }

    pub(crate) fn pages_from_mut(&mut self, from: usize) -> &mut [Page] {
        let from = from.min(self.pages.len());
        &mut self.pages[from..]
    }

    /// Last page in view order
    pub fn last_page(&self) -> Option<&Page> {
        self.pages.last()
    }

    /// The page at the current view index
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current.current_view_page_index())
    }

    /// View index for a document index
    pub fn view_index_of(&self, doc_index: usize) -> Option<usize> {
        self.doc_to_view.get(&doc_index).copied()
    }

    pub fn current_view_page_index(&self) -> usize {
        self.current.current_view_page_index()
    }

    pub fn current_doc_page_index(&self) -> usize {
        self.current.current_doc_page_index()
    }

    pub fn current_page_model(&self) -> &CurrentPageModel {
        &self.current
    }

    pub fn current_page_model_mut(&mut self) -> &mut CurrentPageModel {
        &mut self.current
    }

    /// Make `index` the current page
    pub fn set_current_page_index(&mut self, index: PageIndex) -> Option<CurrentPageChanged> {
        self.current.set_current_page_index(index)
    }
}
