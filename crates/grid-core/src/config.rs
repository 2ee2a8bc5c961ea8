// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves resize, handle, and initial layout settings from TOML.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::Color;

/// Drag-resize behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    /// Tracks must stay strictly above this percentage after a resize step
    pub min_track: f64,
    /// At most one resize step is emitted per window
    pub throttle_ms: u64,
}

impl ResizeSettings {
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Default for ResizeSettings {
    fn default() -> Self {
        Self {
            min_track: 5.0,
            throttle_ms: 24,
        }
    }
}

/// Visual style of split handles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    /// Bar thickness in pixels
    pub thickness: f64,
    pub color: Color,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            thickness: 4.0,
            color: Color::default(),
        }
    }
}

/// Initial grid handed to the host on startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPreset {
    /// Row heights in percent
    pub rows: Vec<f64>,
    /// Column widths in percent
    pub cols: Vec<f64>,
    /// Split specs as `[start_row, start_col, end_row, end_col]`, 1-based
    pub splits: Vec<[usize; 4]>,
    /// Opaque container width (any CSS length)
    pub width: String,
    /// Opaque container height (any CSS length)
    pub height: String,
}

impl Default for LayoutPreset {
    fn default() -> Self {
        Self {
            rows: vec![30.0, 30.0, 40.0],
            cols: vec![30.0, 50.0, 20.0],
            splits: vec![[1, 2, 4, 2], [2, 2, 2, 3], [3, 2, 3, 3], [1, 3, 4, 3]],
            width: "100vw".to_string(),
            height: "100vh".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Drag-resize behavior
    pub resize: ResizeSettings,

    /// Split handle appearance
    pub handle: HandleStyle,

    /// Starting rows, columns and splits
    pub layout: LayoutPreset,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl GridConfig {
    /// Get the default config file path (~/.config/resizable-grid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("resizable-grid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}
