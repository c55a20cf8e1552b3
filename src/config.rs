use std::path::Path;

use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "AQUASKETCH_CONFIG";

/// Startup configuration. Every field has a default, so a config file only
/// needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Canvas size in canvas pixels
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Canvas background as RGB
    pub background: [u8; 3],
    /// Scale factor applied by the export button
    pub export_scale: f32,
    /// Largest allowed export width or height, in pixels
    pub max_export_dimension: u32,
    pub thin_marker_width: f32,
    pub thick_marker_width: f32,
    pub min_marker_width: f32,
    pub max_marker_width: f32,
    /// Built-in sticker palette; the first entry is selected by default
    pub stickers: Vec<String>,
    pub sticker_size: f32,
    pub min_sticker_size: f32,
    pub max_sticker_size: f32,
    /// Initial ink color as RGB
    pub color: [u8; 3],
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            background: [255, 255, 255],
            export_scale: 4.0,
            max_export_dimension: 8192,
            thin_marker_width: 1.0,
            thick_marker_width: 5.0,
            min_marker_width: 1.0,
            max_marker_width: 20.0,
            stickers: vec!["🐟".to_owned(), "🌊".to_owned(), "🐚".to_owned()],
            sticker_size: 32.0,
            min_sticker_size: 8.0,
            max_sticker_size: 96.0,
            color: [0, 0, 0],
        }
    }
}

impl SketchConfig {
    /// Load the config named by [`CONFIG_ENV_VAR`], or the defaults when unset
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading config from {}", path.display());
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Check ranges and return the config unchanged if they hold
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid("canvas size must be non-zero".to_owned()));
        }
        if !(self.export_scale.is_finite() && self.export_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "export_scale must be positive, got {}",
                self.export_scale
            )));
        }
        if self.min_marker_width <= 0.0 || self.min_marker_width > self.max_marker_width {
            return Err(ConfigError::Invalid(format!(
                "marker width range {}..={} is empty",
                self.min_marker_width, self.max_marker_width
            )));
        }
        if self.min_sticker_size <= 0.0 || self.min_sticker_size > self.max_sticker_size {
            return Err(ConfigError::Invalid(format!(
                "sticker size range {}..={} is empty",
                self.min_sticker_size, self.max_sticker_size
            )));
        }
        if self.stickers.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("at least one sticker is required".to_owned()));
        }
        Ok(self)
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width as f32, self.canvas_height as f32)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }
}
