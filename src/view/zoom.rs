//! Zoom factor and the in-zoom gesture gate

/// Smallest zoom factor
pub const MIN_ZOOM: f32 = 1.0;

/// Largest zoom factor
pub const MAX_ZOOM: f32 = 8.0;

/// Current zoom, 1.0 being reference size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomModel {
    zoom: f32,
    in_zoom: bool,
}

impl Default for ZoomModel {
    fn default() -> Self {
        Self {
            zoom: MIN_ZOOM,
            in_zoom: false,
        }
    }
}

impl ZoomModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// A zoom gesture is in progress
    pub fn in_zoom(&self) -> bool {
        self.in_zoom
    }

    pub fn begin_zoom(&mut self) {
        self.in_zoom = true;
    }

    /// Set the zoom, clamped into `[MIN_ZOOM, MAX_ZOOM]`. Returns whether it changed.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        let zoom = if zoom.is_nan() { MIN_ZOOM } else { zoom.clamp(MIN_ZOOM, MAX_ZOOM) };
        if zoom == self.zoom {
            return false;
        }
        self.zoom = zoom;
        true
    }

    /// End the gesture
    pub fn commit_zoom(&mut self) {
        self.in_zoom = false;
    }
}
