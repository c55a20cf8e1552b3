use egui::{Color32, Pos2};

use crate::config::SketchConfig;
use crate::history::History;
use crate::id_generator::DrawableId;

mod preview;
pub use preview::{MARKER_PREVIEW_RADIUS, Preview};

/// Which kind of drawable the next gesture creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Marker,
    Sticker,
}

/// Current tool settings. Read when a gesture starts and copied by value
/// into the new drawable, so later edits never reach existing content.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    pub kind: ToolKind,
    pub stroke_width: f32,
    pub sticker_glyph: String,
    pub sticker_size: f32,
    pub color: Color32,
}

impl ToolSettings {
    pub fn from_config(config: &SketchConfig) -> Self {
        Self {
            kind: ToolKind::Marker,
            stroke_width: config.thin_marker_width,
            sticker_glyph: config
                .stickers
                .iter()
                .find(|s| !s.trim().is_empty())
                .cloned()
                .unwrap_or_default(),
            sticker_size: config.sticker_size,
            color: config.ink_color(),
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&SketchConfig::default())
    }
}

/// A snapshot of the settings for one tool, ready to start a drawable or
/// produce a preview
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker {
        width: f32,
        color: Color32,
    },
    Sticker {
        glyph: String,
        size: f32,
        color: Color32,
    },
}

impl Tool {
    /// Capture the active tool from the current settings
    pub fn from_settings(settings: &ToolSettings) -> Self {
        match settings.kind {
            ToolKind::Marker => Self::Marker {
                width: settings.stroke_width,
                color: settings.color,
            },
            ToolKind::Sticker => Self::Sticker {
                glyph: settings.sticker_glyph.clone(),
                size: settings.sticker_size,
                color: settings.color,
            },
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Marker { .. } => ToolKind::Marker,
            Self::Sticker { .. } => ToolKind::Sticker,
        }
    }

    /// Start a new in-progress drawable for this tool at `origin`
    pub fn begin(&self, history: &mut History, origin: Pos2) -> DrawableId {
        match self {
            Self::Marker { width, color } => history.begin_stroke(origin, *width, *color),
            Self::Sticker { glyph, size, color } => {
                history.begin_sticker(origin, glyph, *size, *color)
            }
        }
    }

    /// What this tool would draw at `at`
    pub fn preview_at(&self, at: Pos2) -> Preview {
        Preview::new(self.clone(), at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_captures_settings_by_value() {
        let mut settings = ToolSettings::default();
        settings.stroke_width = 3.0;
        settings.color = Color32::RED;
        let tool = Tool::from_settings(&settings);

        settings.stroke_width = 9.0;
        settings.color = Color32::GREEN;

        assert_eq!(tool, Tool::Marker { width: 3.0, color: Color32::RED });
    }

    #[test]
    fn test_sticker_tool_begins_sticker() {
        let mut settings = ToolSettings::default();
        settings.kind = ToolKind::Sticker;
        settings.sticker_glyph = "🐚".to_owned();

        let mut history = History::new();
        let id = Tool::from_settings(&settings).begin(&mut history, Pos2::new(4.0, 4.0));

        assert_eq!(history.in_progress(), Some(id));
        let sticker = history.committed()[0].as_sticker().expect("sticker");
        assert_eq!(sticker.glyph(), "🐚");
    }

    #[test]
    fn test_defaults_follow_config() {
        let settings = ToolSettings::default();
        assert_eq!(settings.kind, ToolKind::Marker);
        assert_eq!(settings.stroke_width, 1.0);
        assert_eq!(settings.sticker_glyph, "🐟");
        assert_eq!(settings.color, Color32::BLACK);
    }
}
