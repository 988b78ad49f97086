//! User settings persisted as JSON in the platform config directory.

use crate::constants::{
    A_SERIES_ASPECT_RATIO, CONFIG_DIR_NAME, DEFAULT_COLUMN_COUNT, DEFAULT_RENDER_SCALE,
    DEFAULT_WINDOW_FRACTION, MAX_COLUMN_COUNT, MAX_RENDER_SCALE, MIN_CELL_WIDTH,
    MIN_RENDER_SCALE, SETTINGS_FILE_NAME,
};
use crate::session::LoadOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Thumbnail columns per row
    pub column_count: usize,
    /// Cell width/height ratio
    pub aspect_ratio: f32,
    /// Renderer zoom factor (1.0 = 72 DPI)
    pub render_scale: f32,
    /// Fixed cell width; derived from the screen width when unset
    pub cell_width: Option<u32>,
    /// Fraction of the screen the window covers
    pub window_fraction: f32,
    /// Open the export folder in the file manager when done
    pub reveal_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            aspect_ratio: A_SERIES_ASPECT_RATIO,
            render_scale: DEFAULT_RENDER_SCALE,
            cell_width: None,
            window_fraction: DEFAULT_WINDOW_FRACTION,
            reveal_after_export: true,
        }
    }
}

/// Location of the settings file, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("No config directory available, using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`. Missing or malformed files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read settings: {}", e);
                return Self::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Invalid settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> io::Result<()> {
        let path = default_settings_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Window fraction limited to a usable range.
    pub fn window_fraction(&self) -> f32 {
        if self.window_fraction.is_finite() {
            self.window_fraction.clamp(0.25, 1.0)
        } else {
            DEFAULT_WINDOW_FRACTION
        }
    }

    /// Build load options for a screen `screen_width` pixels wide.
    ///
    /// Out-of-range values are clamped; a non-positive aspect ratio falls back
    /// to the A-series ratio.
    pub fn load_options(&self, screen_width: f32) -> LoadOptions {
        let column_count = self.column_count.clamp(1, MAX_COLUMN_COUNT);

        let cell_width = match self.cell_width {
            Some(width) => width,
            None if screen_width.is_finite() && screen_width > 0.0 => {
                (screen_width / column_count as f32) as u32
            }
            None => MIN_CELL_WIDTH,
        }
        .max(MIN_CELL_WIDTH);

        let aspect_ratio = if self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0 {
            self.aspect_ratio
        } else {
            A_SERIES_ASPECT_RATIO
        };

        let render_scale = if self.render_scale.is_finite() {
            self.render_scale.clamp(MIN_RENDER_SCALE, MAX_RENDER_SCALE)
        } else {
            DEFAULT_RENDER_SCALE
        };

        LoadOptions {
            column_count,
            cell_width,
            aspect_ratio,
            render_scale,
        }
    }
}
