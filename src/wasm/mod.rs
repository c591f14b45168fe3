//! WASM bindings for the reader

pub mod flat_buffer;

use crate::{Point, Reader, ReaderSettings, ViewCommand, ViewMode};
use flat_buffer::BoundsBuffer;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    reader: Reader,
    buffer: BoundsBuffer,
}

#[wasm_bindgen]
impl WasmReader {
    /// Create a reader for pages with the given width / height ratios
    #[wasm_bindgen(constructor)]
    pub fn new(aspect_ratios: Vec<f32>) -> Self {
        Self {
            reader: Reader::from_aspect_ratios(&aspect_ratios, ReaderSettings::default()),
            buffer: BoundsBuffer::new(),
        }
    }

    /// Create a reader with settings JSON (camelCase, missing fields default)
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(
        aspect_ratios: Vec<f32>,
        settings_json: &str,
    ) -> Result<WasmReader, JsError> {
        let settings = ReaderSettings::from_json(settings_json)?;
        Ok(Self {
            reader: Reader::from_aspect_ratios(&aspect_ratios, settings),
            buffer: BoundsBuffer::new(),
        })
    }

    #[wasm_bindgen(js_name = setViewportSize)]
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.reader.set_viewport_size(width, height);
    }

    /// Navigate to a page; negative or out-of-range indexes are ignored
    #[wasm_bindgen(js_name = goToPage)]
    pub fn go_to_page(&mut self, index: i32) -> bool {
        match usize::try_from(index) {
            Ok(index) => self.reader.go_to_page(index),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(js_name = goToPageWithOffset)]
    pub fn go_to_page_with_offset(&mut self, index: i32, offset_x: f32, offset_y: f32) -> bool {
        match usize::try_from(index) {
            Ok(index) => self.reader.go_to_page_with_offset(index, offset_x, offset_y),
            Err(_) => false,
        }
    }

    #[wasm_bindgen(js_name = verticalConfigScroll)]
    pub fn vertical_config_scroll(&mut self, direction: i32) {
        self.reader.vertical_config_scroll(direction);
    }

    /// Report the host scroll position; returns the current page
    #[wasm_bindgen(js_name = onScrollChanged)]
    pub fn on_scroll_changed(&mut self, x: i32, y: i32) -> usize {
        self.reader.on_scroll_changed(x, y);
        self.reader.current_page()
    }

    #[wasm_bindgen(js_name = getCurrentPage)]
    pub fn get_current_page(&self) -> usize {
        self.reader.current_page()
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.reader.page_count()
    }

    /// Scroll limits as `[left, top, right, bottom]`
    #[wasm_bindgen(js_name = getScrollLimits)]
    pub fn get_scroll_limits(&self) -> Vec<i32> {
        let limits = self.reader.scroll_limits();
        vec![limits.left, limits.top, limits.right, limits.bottom]
    }

    #[wasm_bindgen(js_name = resolvePageAspectRatio)]
    pub fn resolve_page_aspect_ratio(&mut self, index: usize, aspect_ratio: f32) -> bool {
        self.reader.resolve_page_aspect_ratio(index, aspect_ratio)
    }

    #[wasm_bindgen(js_name = pageUpdated)]
    pub fn page_updated(&mut self, index: usize) {
        self.reader.page_updated(index);
    }

    #[wasm_bindgen(js_name = pageAtPoint)]
    pub fn page_at_point(&self, x: f32, y: f32) -> Option<usize> {
        self.reader.page_at_point(Point::new(x, y))
    }

    #[wasm_bindgen(js_name = beginZoom)]
    pub fn begin_zoom(&mut self) {
        self.reader.begin_zoom();
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        self.reader.set_zoom(zoom)
    }

    #[wasm_bindgen(js_name = commitZoom)]
    pub fn commit_zoom(&mut self) {
        self.reader.commit_zoom();
    }

    /// Complete a running page-turn animation; returns the page it landed on
    #[wasm_bindgen(js_name = finishAnimation)]
    pub fn finish_animation(&mut self) -> Option<usize> {
        self.reader.finish_animation()
    }

    /// Replace the settings from JSON; returns whether anything changed
    #[wasm_bindgen(js_name = applySettings)]
    pub fn apply_settings(&mut self, settings_json: &str) -> Result<bool, JsError> {
        let settings = ReaderSettings::from_json(settings_json)?;
        let change = self.reader.apply_settings(settings)?;
        Ok(!change.is_empty())
    }

    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> Result<String, JsError> {
        Ok(self.reader.settings().to_json()?)
    }

    /// Commands issued since the last call, as a JSON array
    #[wasm_bindgen(js_name = drainCommands)]
    pub fn drain_commands(&mut self) -> String {
        let commands: Vec<CommandData> = self
            .reader
            .drain_commands()
            .iter()
            .map(CommandData::from)
            .collect();
        serde_json::to_string(&commands).unwrap_or_else(|_| "[]".to_string())
    }

    /// Write the pages to paint into the bounds buffer; returns the page count
    #[wasm_bindgen(js_name = renderBounds)]
    pub fn render_bounds(&mut self) -> usize {
        let list = self.reader.draw_list();
        let current = self.reader.current_page();
        self.buffer.write_draw_list(&list, current, self.reader.view_mode());
        self.buffer.page_count()
    }

    #[wasm_bindgen(js_name = boundsU32Ptr)]
    pub fn bounds_u32_ptr(&self) -> u32 {
        self.buffer.u32_ptr()
    }

    #[wasm_bindgen(js_name = boundsU32Len)]
    pub fn bounds_u32_len(&self) -> u32 {
        self.buffer.u32_len()
    }

    #[wasm_bindgen(js_name = boundsF32Ptr)]
    pub fn bounds_f32_ptr(&self) -> u32 {
        self.buffer.f32_ptr()
    }

    #[wasm_bindgen(js_name = boundsF32Len)]
    pub fn bounds_f32_len(&self) -> u32 {
        self.buffer.f32_len()
    }

    /// Copy of the f32 bounds data for hosts without direct memory access
    #[wasm_bindgen(js_name = getBoundsArray)]
    pub fn get_bounds_array(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.buffer.f32_data.as_slice())
    }

    #[wasm_bindgen(js_name = getViewMode)]
    pub fn get_view_mode(&self) -> u32 {
        flat_buffer::mode_to_opcode(self.reader.view_mode())
    }

    /// Switch view mode by opcode (0 = horizontal, 1 = vertical, 2 = single page)
    #[wasm_bindgen(js_name = switchViewMode)]
    pub fn switch_view_mode(&mut self, mode: u32) -> bool {
        let mode = match mode {
            0 => ViewMode::HorizontalScroll,
            1 => ViewMode::VerticalScroll,
            2 => ViewMode::SinglePage,
            _ => return false,
        };
        self.reader.switch_view_mode(mode);
        true
    }
}

/// Serializable view command for JS
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CommandData {
    ScrollTo { x: i32, y: i32 },
    StartPageScroll { dx: i32, dy: i32 },
    Redraw { current: usize },
    CurrentPageChanged {
        old_view_index: usize,
        new_view_index: usize,
        doc_index: usize,
    },
}

impl From<&ViewCommand> for CommandData {
    fn from(command: &ViewCommand) -> Self {
        match command {
            ViewCommand::ScrollTo { x, y } => CommandData::ScrollTo { x: *x, y: *y },
            ViewCommand::StartPageScroll { dx, dy } => {
                CommandData::StartPageScroll { dx: *dx, dy: *dy }
            }
            ViewCommand::Redraw { current } => CommandData::Redraw { current: *current },
            ViewCommand::CurrentPageChanged(event) => CommandData::CurrentPageChanged {
                old_view_index: event.old.view_index,
                new_view_index: event.new.view_index,
                doc_index: event.new.doc_index,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> WasmReader {
        let mut reader = WasmReader::new(vec![1.0, 1.0, 1.0]);
        reader.set_viewport_size(100.0, 100.0);
        reader.drain_commands();
        reader
    }

    #[test]
    fn test_negative_page_ignored() {
        let mut reader = reader();
        assert!(!reader.go_to_page(-1));
        assert!(!reader.go_to_page(3));
        assert_eq!(reader.get_current_page(), 0);
        assert_eq!(reader.drain_commands(), "[]");
    }

    #[test]
    fn test_commands_as_json() {
        let mut reader = reader();
        assert!(reader.go_to_page(1));

        let json: serde_json::Value = serde_json::from_str(&reader.drain_commands()).unwrap();
        assert_eq!(json[0]["type"], "scrollTo");
        assert_eq!(json[0]["y"], 101);
        assert_eq!(json[1]["type"], "currentPageChanged");
        assert_eq!(json[1]["newViewIndex"], 1);
        assert_eq!(json[2]["type"], "redraw");
    }

    #[test]
    fn test_render_bounds_fills_buffer() {
        let mut reader = reader();
        assert_eq!(reader.render_bounds(), 1);
        assert_eq!(reader.buffer.u32_data[0], flat_buffer::MAGIC);
        assert_eq!(&reader.buffer.f32_data[1..], &[0.0, 0.0, 100.0, 100.0]);
    }

    #[test]
    fn test_switch_view_mode_by_opcode() {
        let mut reader = reader();
        assert!(reader.switch_view_mode(2));
        assert_eq!(reader.get_view_mode(), 2);
        assert!(!reader.switch_view_mode(7));
    }

    #[test]
    fn test_scroll_limits_vector() {
        let reader = reader();
        assert_eq!(reader.get_scroll_limits(), vec![0, 0, 0, 202]);
    }
}
