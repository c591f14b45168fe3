//! Current page tracking with change notification

use crate::document::PageIndex;
use smallvec::SmallVec;

/// Handle returned by [`CurrentPageListeners::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Emitted when the current view index changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPageChanged {
    pub old: PageIndex,
    pub new: PageIndex,
}

/// The `(doc, view)` pair considered current
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentPageModel {
    current: PageIndex,
}

impl CurrentPageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the current page.
    ///
    /// The document index is always stored; a change event is only produced
    /// when the view index differs from the stored one.
    pub fn set_current_page_index(&mut self, index: PageIndex) -> Option<CurrentPageChanged> {
        let old = self.current;
        self.current.doc_index = index.doc_index;

        if old.view_index == index.view_index {
            return None;
        }

        tracing::debug!(
            "current page changed: [{}, {}] -> [{}, {}]",
            old.doc_index,
            old.view_index,
            index.doc_index,
            index.view_index
        );

        self.current = index;
        Some(CurrentPageChanged { old, new: index })
    }

    pub fn current_view_page_index(&self) -> usize {
        self.current.view_index
    }

    pub fn current_doc_page_index(&self) -> usize {
        self.current.doc_index
    }
}

type Listener = Box<dyn FnMut(&CurrentPageChanged) + Send + Sync>;

/// Observers of current page changes.
///
/// Kept apart from the document so events are dispatched after its lock is released.
#[derive(Default)]
pub struct CurrentPageListeners {
    listeners: SmallVec<[(ListenerId, Listener); 2]>,
    next_listener_id: u64,
}

impl std::fmt::Debug for CurrentPageListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentPageListeners")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CurrentPageListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CurrentPageChanged) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns `false` if it was not registered
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener in registration order
    pub fn dispatch(&mut self, event: &CurrentPageChanged) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}
