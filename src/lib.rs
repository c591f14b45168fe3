//! Mini-Reader: page layout and view navigation core for a document reader
//!
//! This crate provides:
//! - Page bounds for continuous horizontal/vertical scrolling and single-page mode
//! - Incremental relayout from a single changed page
//! - Current-page tracking with change notification
//! - Navigation queries (nearest page, scroll limits, visibility)

pub mod animation;
pub mod document;
pub mod error;
pub mod layout;
pub mod render;
pub mod settings;
pub mod view;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use animation::{AnimationStep, AnimatorProxy, PageAnimationType, PageAnimator};
pub use document::{
    CurrentPageChanged, CurrentPageListeners, DocumentModel, ListenerId, Page, PageIndex,
};
pub use error::ReaderError;
pub use layout::{InvalidateSizeReason, LayoutStrategy, PageAlign, ViewMode, Viewport};
pub use render::{DrawList, DrawPage, ViewCommand, ViewCommands};
pub use settings::{ReaderSettings, SettingsChange};
pub use view::{ViewState, ZoomModel};

use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

/// Canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rectangle given by its edges
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// No area
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Every edge multiplied by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            left: self.left * factor,
            top: self.top * factor,
            right: self.right * factor,
            bottom: self.bottom * factor,
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Left/top edges inclusive, right/bottom exclusive
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    pub fn intersects(&self, other: &RectF) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Scroll range in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollLimits {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScrollLimits {
    pub const ZERO: ScrollLimits = ScrollLimits {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Clamp a scroll position into the limits; an inverted range collapses to its start
    pub fn clamp(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.max(self.left).min(self.right.max(self.left)),
            y.max(self.top).min(self.bottom.max(self.top)),
        )
    }
}

/// Document shared between the layout writer and concurrent readers
pub type SharedDocument = Arc<RwLock<DocumentModel>>;

/// The view controller combining layout, navigation and current page state
pub struct Reader {
    document: SharedDocument,
    layout: LayoutStrategy,
    settings: ReaderSettings,
    zoom: ZoomModel,
    animator: AnimatorProxy,
    listeners: CurrentPageListeners,
    /// Scroll position of the host view
    scroll: (i32, i32),
    commands: ViewCommands,
}

impl Reader {
    /// Create a reader over a document with the given settings
    pub fn new(document: DocumentModel, settings: ReaderSettings) -> Self {
        let mut animator = AnimatorProxy::new(settings.animation_type.create());
        animator.reset_page_indexes(document.current_view_page_index());

        Self {
            document: Arc::new(RwLock::new(document)),
            layout: LayoutStrategy::for_mode(settings.view_mode, settings.page_align),
            settings,
            zoom: ZoomModel::new(),
            animator,
            listeners: CurrentPageListeners::new(),
            scroll: (0, 0),
            commands: ViewCommands::new(),
        }
    }

    /// Create a reader for pages with the given aspect ratios
    pub fn from_aspect_ratios(ratios: &[f32], settings: ReaderSettings) -> Self {
        Self::new(DocumentModel::from_aspect_ratios(ratios), settings)
    }

    /// Handle to the shared document for concurrent readers
    pub fn document(&self) -> SharedDocument {
        Arc::clone(&self.document)
    }

    /// Read access to the document
    pub fn read(&self) -> RwLockReadGuard<'_, DocumentModel> {
        self.document.read()
    }

    pub fn settings(&self) -> &ReaderSettings {
        &self.settings
    }

    pub fn view_mode(&self) -> ViewMode {
        self.layout.mode()
    }

    pub fn layout(&self) -> &LayoutStrategy {
        &self.layout
    }

    pub fn zoom(&self) -> f32 {
        self.zoom.zoom()
    }

    pub fn scroll_position(&self) -> (i32, i32) {
        self.scroll
    }

    pub fn page_count(&self) -> usize {
        self.document.read().page_count()
    }

    /// Current view index
    pub fn current_page(&self) -> usize {
        self.document.read().current_view_page_index()
    }

    pub fn animator(&self) -> &AnimatorProxy {
        &self.animator
    }

    /// Register a current-page listener.
    ///
    /// Listeners run after the document lock is released and may read it.
    pub fn add_current_page_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CurrentPageChanged) + Send + Sync + 'static,
    {
        self.listeners.add(listener)
    }

    pub fn remove_current_page_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Take the commands issued since the last drain
    pub fn drain_commands(&mut self) -> Vec<ViewCommand> {
        self.commands.drain()
    }

    pub fn pending_commands(&self) -> &[ViewCommand] {
        self.commands.pending()
    }

    /// The host view was resized
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        let was_initialized = self.layout.is_initialized();
        if was_initialized && self.layout.viewport() == viewport {
            return;
        }

        self.layout.set_viewport(viewport);
        let reason = if was_initialized {
            InvalidateSizeReason::Layout
        } else {
            InvalidateSizeReason::Init
        };

        if self.invalidate_page_sizes(reason, None) {
            let current = self.current_page();
            self.go_to_page(current);
        }
    }

    /// Recompute page bounds; `changed_page` limits the pass to pages it can affect
    pub fn invalidate_page_sizes(
        &mut self,
        reason: InvalidateSizeReason,
        changed_page: Option<usize>,
    ) -> bool {
        let relaid = {
            let mut document = self.document.write();
            self.layout.invalidate_page_sizes(&mut document, reason, changed_page)
        };

        if relaid && self.view_mode() == ViewMode::SinglePage {
            self.animator.set_view_drawn(false);
        }
        relaid
    }

    /// Record the decoded aspect ratio of a page and relayout from it
    pub fn resolve_page_aspect_ratio(&mut self, view_index: usize, aspect_ratio: f32) -> bool {
        let changed = self
            .document
            .write()
            .page_mut(view_index)
            .is_some_and(|page| page.resolve_aspect_ratio(aspect_ratio));

        if changed {
            self.invalidate_page_sizes(InvalidateSizeReason::PageLoaded, Some(view_index));
        }
        changed
    }

    /// Snapshot of the viewport at the current scroll position
    pub fn view_state(&self) -> ViewState {
        let document = self.document.read();
        self.view_state_for(&document)
    }

    /// Without a valid viewport the page bounds are stale and nothing is visible
    fn view_state_for(&self, document: &DocumentModel) -> ViewState {
        let viewport = self.layout.viewport();
        let (x, y) = (self.scroll.0 as f32, self.scroll.1 as f32);
        let view_rect = RectF::new(x, y, x + viewport.width, y + viewport.height);

        let state = ViewState::new(view_rect, self.zoom.zoom(), document.current_view_page_index());
        if !self.layout.is_initialized() {
            return state;
        }
        state.with_visible_pages(document, |page, state| self.page_visible(page, state))
    }

    fn page_visible(&self, page: &Page, view_state: &ViewState) -> bool {
        match self.layout.as_scroll() {
            Some(layout) => layout.is_page_visible(page, view_state),
            None => self.animator.is_page_visible(page, view_state),
        }
    }

    /// Whether `page` is visible in `view_state`
    pub fn is_page_visible(&self, page: &Page, view_state: &ViewState) -> bool {
        self.layout.is_initialized() && self.page_visible(page, view_state)
    }

    /// The page that should be current for this view state
    pub fn calculate_current_page(&self, view_state: &ViewState) -> usize {
        let document = self.document.read();
        if !self.layout.is_initialized() {
            return document.current_view_page_index();
        }
        self.layout.calculate_current_page(&document, view_state)
    }

    pub fn scroll_limits(&self) -> ScrollLimits {
        if !self.layout.is_initialized() {
            return ScrollLimits::ZERO;
        }
        let document = self.document.read();
        self.layout.scroll_limits(&document, self.zoom.zoom())
    }

    /// Navigate to a page; out-of-range indexes are ignored
    pub fn go_to_page(&mut self, view_index: usize) -> bool {
        self.go_to_page_impl(view_index, None)
    }

    /// Navigate to a point inside a page given as fractions of its size
    pub fn go_to_page_with_offset(
        &mut self,
        view_index: usize,
        offset_x: f32,
        offset_y: f32,
    ) -> bool {
        let offset = (offset_x.clamp(0.0, 1.0), offset_y.clamp(0.0, 1.0));
        self.go_to_page_impl(view_index, Some(offset))
    }

    fn go_to_page_impl(&mut self, view_index: usize, offset: Option<(f32, f32)>) -> bool {
        let (index, bounds) = {
            let document = self.document.read();
            match document.page(view_index) {
                Some(page) => (page.index, page.bounds(self.zoom.zoom())),
                None => {
                    tracing::trace!(view_index, "go to page out of range");
                    return false;
                }
            }
        };

        let scroll_target = self
            .layout
            .as_scroll()
            .map(|layout| layout.page_scroll_target(&bounds, self.scroll, offset));

        match scroll_target {
            Some((x, y)) => {
                self.scroll_to(x, y);
                self.set_current_page(index);
            }
            None => {
                self.set_current_page(index);
                self.animator.set_view_drawn(false);
                self.animator.reset_page_indexes(view_index);

                let (x, y) = match offset {
                    Some((offset_x, offset_y)) => (
                        (bounds.left + offset_x * bounds.width()) as i32,
                        (bounds.top + offset_y * bounds.height()) as i32,
                    ),
                    None => self.scroll,
                };
                self.scroll_to(x, y);
            }
        }

        self.commands.push(ViewCommand::Redraw { current: view_index });
        true
    }

    fn set_current_page(&mut self, index: PageIndex) {
        let event = self.document.write().set_current_page_index(index);
        if let Some(event) = event {
            self.listeners.dispatch(&event);
            self.commands.push(ViewCommand::CurrentPageChanged(event));
        }
    }

    /// Scroll to a position clamped into the scroll limits
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        let target = self.scroll_limits().clamp(x, y);
        if target != self.scroll {
            self.scroll = target;
            self.commands.push(ViewCommand::ScrollTo {
                x: target.0,
                y: target.1,
            });
        }
    }

    /// One configured scroll step.
    ///
    /// Continuous modes scroll by pixels, single-page mode turns the page.
    pub fn vertical_config_scroll(&mut self, direction: i32) {
        let step = self
            .layout
            .as_scroll()
            .map(|layout| layout.scroll_step(direction, self.settings.scroll_height));
        if let Some((dx, dy)) = step {
            self.commands.push(ViewCommand::StartPageScroll { dx, dy });
            return;
        }

        let (current, count) = {
            let document = self.document.read();
            (document.current_view_page_index(), document.page_count())
        };
        match self.animator.animate(direction, current, count) {
            AnimationStep::TurnPage(target) => {
                self.go_to_page(target);
            }
            AnimationStep::Started { .. } => {
                self.commands.push(ViewCommand::Redraw { current });
            }
            AnimationStep::Ignored => {}
        }
    }

    /// Complete a running page-turn animation
    pub fn finish_animation(&mut self) -> Option<usize> {
        let target = self.animator.finish()?;
        self.go_to_page(target);
        Some(target)
    }

    /// The host view scrolled to `(x, y)`.
    ///
    /// Returns the refreshed view state, or `None` while a zoom gesture is running.
    pub fn on_scroll_changed(&mut self, x: i32, y: i32) -> Option<ViewState> {
        self.scroll = (x, y);
        if self.zoom.in_zoom() {
            // bounds could be not updated
            tracing::trace!(x, y, "scroll ignored during zoom");
            return None;
        }

        let (view_state, index) = {
            let document = self.document.read();
            let view_state = self.view_state_for(&document);
            let index = if self.layout.is_initialized() {
                let current = self.layout.calculate_current_page(&document, &view_state);
                document.page(current).map(|page| page.index)
            } else {
                None
            };
            (view_state, index)
        };

        if let Some(index) = index {
            self.set_current_page(index);
        }
        self.commands.push(ViewCommand::Redraw {
            current: self.current_page(),
        });
        Some(view_state)
    }

    /// Page under a point in view coordinates
    pub fn page_at_point(&self, point: Point) -> Option<usize> {
        let document = self.document.read();
        let view_state = self.view_state_for(&document);
        let origin = &view_state.view_rect;
        let canvas = Point::new(point.x + origin.left, point.y + origin.top);

        let visible = view_state.visible_pages()?;
        document
            .pages_range(*visible.start(), *visible.end() + 1)
            .iter()
            .filter(|page| self.page_visible(page, &view_state))
            .find(|page| view_state.bounds(page).contains_point(canvas))
            .map(|page| page.index.view_index)
    }

    /// Pages to paint for the current view
    pub fn draw_list(&mut self) -> DrawList {
        let document = self.document.read();
        let view_state = self.view_state_for(&document);
        if !self.layout.is_initialized() {
            return DrawList::visible(&document, &view_state);
        }

        match self.layout {
            LayoutStrategy::SinglePage(_) => {
                let order = self.animator.draw(&view_state);
                DrawList::build(&document, &view_state, order)
            }
            _ => DrawList::visible(&document, &view_state),
        }
    }

    /// A page finished decoding and can be repainted
    pub fn page_updated(&mut self, view_index: usize) {
        let view_state = self.view_state();
        let redraw = match self.layout {
            LayoutStrategy::SinglePage(_) => self.animator.page_updated(&view_state, view_index),
            _ => view_state.is_in_visible_range(view_index),
        };
        if redraw {
            self.commands.push(ViewCommand::Redraw {
                current: view_state.current,
            });
        }
    }

    /// Switch to another view mode, keeping the viewport and current page
    pub fn switch_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode() == mode {
            return;
        }
        self.settings.view_mode = mode;
        self.rebuild_layout();
    }

    fn rebuild_layout(&mut self) {
        tracing::debug!(mode = ?self.settings.view_mode, "switching layout strategy");

        let viewport = self.layout.viewport();
        self.layout = LayoutStrategy::for_mode(self.settings.view_mode, self.settings.page_align);
        self.layout.set_viewport(viewport);

        let current = self.current_page();
        self.animator.reset_page_indexes(current);
        if self.invalidate_page_sizes(InvalidateSizeReason::Generic, None) {
            self.go_to_page(current);
        }
    }

    /// Replace the settings and apply whatever changed
    pub fn apply_settings(&mut self, settings: ReaderSettings) -> error::Result<SettingsChange> {
        settings.validate()?;
        let change = settings.diff(&self.settings);
        self.settings = settings;

        if change.view_mode {
            self.rebuild_layout();
        } else if change.page_align {
            self.layout.set_align(settings.page_align);
            self.invalidate_page_sizes(InvalidateSizeReason::PageAlign, None);
            let (x, y) = self.scroll;
            self.scroll_to(x, y);
        }

        if change.animation_type {
            self.update_animation_type();
        }
        Ok(change)
    }

    /// Recreate the animator from the configured animation type
    pub fn update_animation_type(&mut self) {
        let mut next = self.settings.animation_type.create();
        next.reset_page_indexes(self.current_page());
        self.animator.switch_strategy(next);
    }

    /// A zoom gesture started
    pub fn begin_zoom(&mut self) {
        self.zoom.begin_zoom();
    }

    /// Set the zoom factor; returns whether it changed.
    ///
    /// Outside a zoom gesture the scroll is re-clamped and the current page refreshed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let changed = self.zoom.set_zoom(zoom);
        if !changed {
            return false;
        }

        if self.zoom.in_zoom() {
            self.commands.push(ViewCommand::Redraw {
                current: self.current_page(),
            });
        } else {
            let (x, y) = self.scroll;
            self.scroll_to(x, y);
            let (x, y) = self.scroll;
            self.on_scroll_changed(x, y);
        }
        true
    }

    /// The zoom gesture ended; re-clamp the scroll and refresh the current page
    pub fn commit_zoom(&mut self) -> Option<ViewState> {
        self.zoom.commit_zoom();
        let (x, y) = self.scroll;
        self.scroll_to(x, y);
        let (x, y) = self.scroll;
        self.on_scroll_changed(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn reader(mode: ViewMode, ratios: &[f32], width: f32, height: f32) -> Reader {
        let settings = ReaderSettings {
            view_mode: mode,
            ..ReaderSettings::default()
        };
        let mut reader = Reader::from_aspect_ratios(ratios, settings);
        reader.set_viewport_size(width, height);
        reader.drain_commands();
        reader
    }

    fn all_bounds(reader: &Reader) -> Vec<RectF> {
        reader.read().pages().iter().map(|p| p.reference_bounds()).collect()
    }

    #[test]
    fn test_rect_geometry() {
        let rect = RectF::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 40.0);
        assert_eq!(rect.center_x(), 20.0);
        assert_eq!(rect.center_y(), 40.0);
        assert!(rect.contains_point(Point::new(10.0, 20.0)));
        assert!(!rect.contains_point(Point::new(30.0, 20.0)));
        assert!(rect.intersects(&RectF::new(29.0, 59.0, 40.0, 70.0)));
        assert!(!rect.intersects(&RectF::new(30.0, 20.0, 40.0, 60.0)));
    }

    #[test]
    fn test_scroll_limits_clamp() {
        let limits = ScrollLimits { left: -50, top: 0, right: 50, bottom: 100 };
        assert_eq!(limits.clamp(-80, 200), (-50, 100));
        assert_eq!(limits.clamp(10, 10), (10, 10));
        // Inverted range collapses to the start
        let limits = ScrollLimits { left: 0, top: 0, right: -20, bottom: 0 };
        assert_eq!(limits.clamp(15, 3), (0, 0));
    }

    #[test]
    fn test_layout_before_viewport_is_noop() {
        let mut reader = Reader::from_aspect_ratios(&[1.0, 2.0], ReaderSettings::default());
        assert!(!reader.invalidate_page_sizes(InvalidateSizeReason::Generic, None));
        assert!(all_bounds(&reader).iter().all(RectF::is_empty));
        assert_eq!(reader.scroll_limits(), ScrollLimits::ZERO);
    }

    #[test]
    fn test_horizontal_scenario() {
        let reader = reader(ViewMode::HorizontalScroll, &[1.0, 2.0, 0.5], 100.0, 200.0);
        assert_eq!(
            all_bounds(&reader),
            vec![
                RectF::new(0.0, 0.0, 200.0, 200.0),
                RectF::new(201.0, 0.0, 601.0, 200.0),
                RectF::new(602.0, 0.0, 702.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_single_page_scenario() {
        let reader = reader(ViewMode::SinglePage, &[2.0], 100.0, 100.0);
        assert_eq!(all_bounds(&reader), vec![RectF::new(0.0, 0.0, 100.0, 50.0)]);
    }

    #[test]
    fn test_go_to_page_out_of_range_is_ignored() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        assert!(reader.go_to_page(1));
        reader.drain_commands();

        assert!(!reader.go_to_page(3));
        assert!(!reader.go_to_page(usize::MAX));
        assert_eq!(reader.current_page(), 1);
        assert!(reader.pending_commands().is_empty());
    }

    #[test]
    fn test_vertical_go_to_page_scrolls_to_top_edge() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        assert!(reader.go_to_page(2));

        assert_eq!(reader.scroll_position(), (0, 202));
        assert_eq!(reader.current_page(), 2);
        let commands = reader.drain_commands();
        assert_eq!(commands[0], ViewCommand::ScrollTo { x: 0, y: 202 });
        assert!(matches!(commands[1], ViewCommand::CurrentPageChanged(_)));
        assert_eq!(commands[2], ViewCommand::Redraw { current: 2 });
    }

    #[test]
    fn test_go_to_page_with_offset() {
        let mut reader = reader(ViewMode::HorizontalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.set_zoom(2.0);
        // Page 1 at zoom 2 spans x 202..402, y 0..200
        assert!(reader.go_to_page_with_offset(1, 0.5, 0.5));
        assert_eq!(reader.scroll_position(), (302, 100));
    }

    #[test]
    fn test_scroll_target_clamped_to_limits() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0], 100.0, 150.0);
        // Bottom limit is 201 - 150 = 51
        reader.go_to_page(1);
        assert_eq!(reader.scroll_position(), (0, 51));
    }

    #[test]
    fn test_current_page_listener_fires_once() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        reader.add_current_page_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        reader.go_to_page(1);
        reader.go_to_page(1);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_can_read_document() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        let document = reader.document();
        let seen = Arc::new(AtomicUsize::new(usize::MAX));
        let seen_in_listener = seen.clone();
        reader.add_current_page_listener(move |_| {
            let current = document.read().current_view_page_index();
            seen_in_listener.store(current, Ordering::SeqCst);
        });

        reader.go_to_page(2);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_hidden_viewport_keeps_current_page() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.set_viewport_size(0.0, 0.0);

        let state = reader.on_scroll_changed(50, 250).unwrap();
        assert_eq!(state.visible_pages(), None);
        assert_eq!(reader.calculate_current_page(&state), 0);
        assert_eq!(reader.current_page(), 0);
        assert_eq!(reader.page_at_point(Point::new(10.0, 10.0)), None);
        assert!(reader.draw_list().is_empty());
        assert!(!reader
            .drain_commands()
            .iter()
            .any(|c| matches!(c, ViewCommand::CurrentPageChanged(_))));

        // Showing the view again lays out and returns to the current page
        reader.set_viewport_size(100.0, 100.0);
        assert_eq!(reader.current_page(), 0);
        assert_eq!(reader.scroll_position(), (0, 0));
        assert_eq!(reader.view_state().visible_pages(), Some(0..=0));
    }

    #[test]
    fn test_set_zoom_outside_gesture_reclamps_scroll() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        assert!(reader.set_zoom(2.0));
        reader.on_scroll_changed(100, 500);
        assert_eq!(reader.current_page(), 2);

        assert!(reader.set_zoom(1.0));
        assert_eq!(reader.scroll_position(), (0, 202));
        assert_eq!(reader.current_page(), 2);
        assert_eq!(reader.draw_list().view_indexes().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_set_zoom_during_gesture_defers_clamp() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.set_zoom(2.0);
        reader.on_scroll_changed(100, 500);

        reader.begin_zoom();
        reader.set_zoom(1.0);
        assert_eq!(reader.scroll_position(), (100, 500));

        reader.commit_zoom();
        assert_eq!(reader.scroll_position(), (0, 202));
    }

    #[test]
    fn test_scroll_updates_current_page() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        let state = reader.on_scroll_changed(0, 180).unwrap();

        assert_eq!(state.visible_pages(), Some(1..=2));
        assert_eq!(reader.current_page(), 2);
    }

    #[test]
    fn test_scroll_suppressed_during_zoom() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.begin_zoom();
        assert!(reader.on_scroll_changed(0, 180).is_none());
        assert_eq!(reader.current_page(), 0);
        assert!(reader.pending_commands().is_empty());

        let state = reader.commit_zoom().unwrap();
        assert_eq!(state.view_rect.top, 180.0);
        assert_eq!(reader.current_page(), 2);
    }

    #[test]
    fn test_config_scroll_in_continuous_mode() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0], 100.0, 300.0);
        reader.vertical_config_scroll(1);
        assert_eq!(
            reader.drain_commands(),
            vec![ViewCommand::StartPageScroll { dx: 0, dy: 150 }]
        );
        assert_eq!(reader.current_page(), 0);
    }

    #[test]
    fn test_config_scroll_turns_page_in_single_mode() {
        let mut reader = reader(ViewMode::SinglePage, &[1.0, 1.0], 100.0, 100.0);
        reader.vertical_config_scroll(1);
        assert_eq!(reader.current_page(), 1);

        reader.vertical_config_scroll(1);
        assert_eq!(reader.current_page(), 1);

        reader.vertical_config_scroll(-1);
        assert_eq!(reader.current_page(), 0);
    }

    #[test]
    fn test_animated_turn_completes_on_finish() {
        let settings = ReaderSettings {
            view_mode: ViewMode::SinglePage,
            animation_type: PageAnimationType::Curler,
            ..ReaderSettings::default()
        };
        let mut reader = Reader::from_aspect_ratios(&[1.0, 1.0, 1.0], settings);
        reader.set_viewport_size(100.0, 100.0);

        reader.vertical_config_scroll(1);
        assert_eq!(reader.current_page(), 0);
        assert_eq!(reader.draw_list().view_indexes().collect::<Vec<_>>(), vec![1, 0]);

        assert_eq!(reader.finish_animation(), Some(1));
        assert_eq!(reader.current_page(), 1);
        assert_eq!(reader.draw_list().view_indexes().collect::<Vec<_>>(), vec![1]);
        assert_eq!(reader.finish_animation(), None);
    }

    #[test]
    fn test_single_page_visibility_and_current() {
        let mut reader = reader(ViewMode::SinglePage, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.go_to_page(2);

        let state = reader.view_state();
        assert_eq!(state.visible_pages(), Some(2..=2));
        assert_eq!(reader.calculate_current_page(&state), 2);

        let document = reader.document();
        let document = document.read();
        assert!(reader.is_page_visible(document.page(2).unwrap(), &state));
        assert!(!reader.is_page_visible(document.page(0).unwrap(), &state));
    }

    #[test]
    fn test_single_page_scroll_with_offset_inside_zoomed_page() {
        let mut reader = reader(ViewMode::SinglePage, &[1.0, 1.0], 100.0, 100.0);
        reader.set_zoom(2.0);
        // Page bounds at zoom 2: (0, 0, 200, 200), limits right/bottom 100
        reader.go_to_page_with_offset(1, 0.25, 1.0);
        assert_eq!(reader.scroll_position(), (50, 100));
        assert_eq!(reader.current_page(), 1);
    }

    #[test]
    fn test_resolve_aspect_ratio_relays_out_tail() {
        let mut reader = reader(ViewMode::HorizontalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        assert!(reader.resolve_page_aspect_ratio(1, 2.0));
        assert_eq!(
            all_bounds(&reader),
            vec![
                RectF::new(0.0, 0.0, 100.0, 100.0),
                RectF::new(101.0, 0.0, 301.0, 100.0),
                RectF::new(302.0, 0.0, 402.0, 100.0),
            ]
        );
        assert!(!reader.resolve_page_aspect_ratio(1, 0.5));
        assert!(!reader.resolve_page_aspect_ratio(9, 0.5));
    }

    #[test]
    fn test_apply_settings_alignment() {
        let mut reader = reader(ViewMode::SinglePage, &[2.0], 100.0, 100.0);
        let settings = ReaderSettings {
            page_align: PageAlign::Height,
            ..*reader.settings()
        };
        let change = reader.apply_settings(settings).unwrap();

        assert!(change.page_align);
        assert_eq!(all_bounds(&reader), vec![RectF::new(-50.0, 0.0, 150.0, 100.0)]);
    }

    #[test]
    fn test_apply_settings_rejects_invalid() {
        let mut reader = reader(ViewMode::SinglePage, &[2.0], 100.0, 100.0);
        let settings = ReaderSettings {
            scroll_height: 101,
            ..*reader.settings()
        };
        assert!(reader.apply_settings(settings).is_err());
        assert_eq!(reader.settings().scroll_height, 50);
    }

    #[test]
    fn test_switch_view_mode_keeps_current_page() {
        let mut reader = reader(ViewMode::SinglePage, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.go_to_page(2);

        reader.switch_view_mode(ViewMode::VerticalScroll);
        assert_eq!(reader.view_mode(), ViewMode::VerticalScroll);
        assert_eq!(reader.current_page(), 2);
        assert_eq!(reader.read().page(2).unwrap().reference_bounds().top, 202.0);
        assert_eq!(reader.scroll_position(), (0, 202));
    }

    #[test]
    fn test_page_at_point() {
        let mut reader = reader(ViewMode::HorizontalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.on_scroll_changed(150, 0);

        assert_eq!(reader.page_at_point(Point::new(10.0, 10.0)), Some(1));
        assert_eq!(reader.page_at_point(Point::new(60.0, 10.0)), Some(2));
        // The 1-unit gap between pages 1 and 2 is at canvas x 201
        assert_eq!(reader.page_at_point(Point::new(51.5, 10.0)), None);
    }

    #[test]
    fn test_empty_document_degrades() {
        let mut reader = reader(ViewMode::VerticalScroll, &[], 100.0, 100.0);
        assert_eq!(reader.scroll_limits(), ScrollLimits::ZERO);
        assert!(!reader.go_to_page(0));

        let state = reader.on_scroll_changed(0, 0).unwrap();
        assert_eq!(reader.calculate_current_page(&state), 0);
        assert!(reader.draw_list().is_empty());
    }

    #[test]
    fn test_page_updated_redraws_visible_only() {
        let mut reader = reader(ViewMode::VerticalScroll, &[1.0, 1.0, 1.0], 100.0, 100.0);
        reader.page_updated(2);
        assert!(reader.pending_commands().is_empty());

        reader.page_updated(0);
        assert_eq!(reader.drain_commands(), vec![ViewCommand::Redraw { current: 0 }]);
    }
}
