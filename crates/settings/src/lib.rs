//! Persisted plugin settings.
//!
//! A flat key-value object, stored as TOML through a [`SettingsStore`].
//! Keys missing from the stored data keep their defaults, so older files
//! load unchanged after new settings are added.

mod error;
mod store;

pub use error::SettingsError;
pub use store::{FileStore, MemoryStore, SettingsStore};

use caret_core::{
    DEFAULT_BULLET_OFFSET, DEFAULT_LINE_HEIGHT, FirstPosition, ListenSet, TrackerConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Historic host-side toggles. Persisted, not read by the tracker.
    pub react_to_content_editable: bool,
    pub react_to_vim_mode: bool,
    pub react_to_input_element: bool,

    /// Shift applied to bullet markers, in px.
    pub bullet_offset: f32,
    /// Fallback caret height when no line height is numeric, in px.
    pub default_line_height: f32,
    /// Draw the first resolved position instead of only storing it.
    pub render_first_position: bool,
    /// Also react to key-up, pointer-down and touch events.
    pub broad_listeners: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            react_to_content_editable: false,
            react_to_vim_mode: false,
            react_to_input_element: false,
            bullet_offset: DEFAULT_BULLET_OFFSET,
            default_line_height: DEFAULT_LINE_HEIGHT,
            render_first_position: false,
            broad_listeners: false,
        }
    }
}

impl Settings {
    /// Load from `store`, falling back to defaults for anything not stored.
    pub fn load(store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        match store.load_data()? {
            Some(data) if !data.trim().is_empty() => Ok(toml::from_str(&data)?),
            _ => {
                log::debug!("no stored settings, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), SettingsError> {
        let data = toml::to_string_pretty(self)?;
        store.save_data(&data)
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            bullet_offset: self.bullet_offset,
            default_line_height: self.default_line_height,
            first_position: if self.render_first_position {
                FirstPosition::Render
            } else {
                FirstPosition::Baseline
            },
            listen: if self.broad_listeners {
                ListenSet::Broad
            } else {
                ListenSet::Minimal
            },
        }
    }
}
