//! Reader settings consumed by the layout core

use crate::animation::PageAnimationType;
use crate::error::{ReaderError, Result};
use crate::layout::{PageAlign, ViewMode};
use serde::{Deserialize, Serialize};

/// Default scroll step, in percent of the viewport
pub const DEFAULT_SCROLL_HEIGHT: u8 = 50;

/// View settings for one book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderSettings {
    pub view_mode: ViewMode,
    pub page_align: PageAlign,
    /// Percent of the viewport moved by one configured scroll
    pub scroll_height: u8,
    pub animation_type: PageAnimationType,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            page_align: PageAlign::default(),
            scroll_height: DEFAULT_SCROLL_HEIGHT,
            animation_type: PageAnimationType::default(),
        }
    }
}

/// What differs between two settings snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsChange {
    pub view_mode: bool,
    pub page_align: bool,
    pub scroll_height: bool,
    pub animation_type: bool,
}

impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ReaderSettings {
    /// Parse and validate settings JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: ReaderSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scroll_height > 100 {
            return Err(ReaderError::InvalidScrollHeight(self.scroll_height));
        }
        Ok(())
    }

    /// Compare against the settings being replaced
    pub fn diff(&self, previous: &ReaderSettings) -> SettingsChange {
        SettingsChange {
            view_mode: self.view_mode != previous.view_mode,
            page_align: self.page_align != previous.page_align,
            scroll_height: self.scroll_height != previous.scroll_height,
            animation_type: self.animation_type != previous.animation_type,
        }
    }
}
