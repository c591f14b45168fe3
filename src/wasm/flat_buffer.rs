//! Flat buffer protocol for zero-copy page bounds transfer
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x4D524452 = "MRDR" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count (entries that follow)
//! [3]     current view index
//! [4]     view mode (0 = horizontal, 1 = vertical, 2 = single page)
//! [5..]   per-page: [view_index, doc_index]
//! ```
//!
//! ## f32 Buffer Layout:
//! ```text
//! [0]     zoom
//! [1..]   per-page: [left, top, right, bottom] in view coordinates
//! ```

use crate::layout::ViewMode;
use crate::render::{DrawList, DrawPage};

/// Magic number for format validation: "MRDR" (Mini ReaDeR)
pub const MAGIC: u32 = 0x4D524452;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 5;

/// Header size in f32 elements
pub const F32_HEADER_SIZE: usize = 1;

/// Number of u32 values per page
pub const U32_PER_PAGE: usize = 2; // view_index, doc_index

/// Number of f32 values per page
pub const F32_PER_PAGE: usize = 4; // left, top, right, bottom

/// Bounds buffer for zero-copy WASM transfer
#[derive(Debug)]
pub struct BoundsBuffer {
    /// Integer data (header, indexes)
    pub u32_data: Vec<u32>,
    /// Float data (zoom, bounds)
    pub f32_data: Vec<f32>,
}

impl Default for BoundsBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsBuffer {
    pub fn new() -> Self {
        Self {
            u32_data: Vec::with_capacity(64),
            f32_data: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.u32_data.clear();
        self.f32_data.clear();
    }

    /// Pre-allocate for `pages` entries.
    /// JS holds pointers to these buffers, so they must not reallocate while writing.
    pub fn prepare(&mut self, pages: usize) {
        let u32_target = HEADER_SIZE + pages * U32_PER_PAGE;
        let f32_target = F32_HEADER_SIZE + pages * F32_PER_PAGE;

        if self.u32_data.capacity() < u32_target {
            self.u32_data = Vec::with_capacity(u32_target);
        } else {
            self.u32_data.clear();
        }

        if self.f32_data.capacity() < f32_target {
            self.f32_data = Vec::with_capacity(f32_target);
        } else {
            self.f32_data.clear();
        }
    }

    pub fn write_header(&mut self, current: usize, mode: ViewMode, zoom: f32) {
        self.u32_data.push(MAGIC); // [0] magic number
        self.u32_data.push(SCHEMA_VERSION); // [1] schema version
        self.u32_data.push(0); // [2] page_count (placeholder)
        self.u32_data.push(current as u32); // [3] current view index
        self.u32_data.push(mode_to_opcode(mode)); // [4] view mode
        self.f32_data.push(zoom);
    }

    pub fn write_page(&mut self, page: &DrawPage) {
        self.u32_data.push(page.view_index as u32);
        self.u32_data.push(page.doc_index as u32);

        let bounds = page.bounds;
        self.f32_data
            .extend_from_slice(&[bounds.left, bounds.top, bounds.right, bounds.bottom]);
    }

    /// Synchronize the page count in the header
    pub fn finalize(&mut self) {
        if self.u32_data.len() < HEADER_SIZE {
            return;
        }
        self.u32_data[2] = ((self.u32_data.len() - HEADER_SIZE) / U32_PER_PAGE) as u32;
    }

    /// Fill the buffer from a draw list
    pub fn write_draw_list(&mut self, list: &DrawList, current: usize, mode: ViewMode) {
        self.prepare(list.pages.len());
        self.write_header(current, mode, list.zoom);
        for page in &list.pages {
            self.write_page(page);
        }
        self.finalize();
    }

    pub fn page_count(&self) -> usize {
        self.u32_data.get(2).map_or(0, |&count| count as usize)
    }

    // Accessors for WASM
    // wasm32 linear memory uses u32 offsets

    pub fn u32_ptr(&self) -> u32 {
        self.u32_data.as_ptr() as u32
    }

    pub fn u32_len(&self) -> u32 {
        self.u32_data.len() as u32
    }

    pub fn f32_ptr(&self) -> u32 {
        self.f32_data.as_ptr() as u32
    }

    pub fn f32_len(&self) -> u32 {
        self.f32_data.len() as u32
    }
}

/// Convert a view mode to its header opcode
pub fn mode_to_opcode(mode: ViewMode) -> u32 {
    match mode {
        ViewMode::HorizontalScroll => 0,
        ViewMode::VerticalScroll => 1,
        ViewMode::SinglePage => 2,
    }
}
