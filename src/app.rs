use egui::{Key, KeyboardShortcut, Modifiers, Rect};

use crate::config::SketchConfig;
use crate::export;
use crate::input::InputAdapter;
use crate::panels;
use crate::sketchpad::Sketchpad;

pub const APP_NAME: &str = "AquaSketch";

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchApp {
    config: SketchConfig,
    sketchpad: Sketchpad,
    input: InputAdapter,
    /// Text typed into the custom sticker field
    pub(crate) custom_sticker: String,
    /// Outcome of the latest export, shown in the toolbar
    status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    /// Build the app state without a creation context
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            sketchpad: Sketchpad::new(&config),
            input: InputAdapter::new(Rect::NOTHING),
            custom_sticker: String::new(),
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputAdapter {
        &mut self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Export at the configured scale and hand the PNG to the platform
    pub fn export(&mut self) {
        let scale = self.config.export_scale;
        let result = self
            .sketchpad
            .export_raster(scale)
            .and_then(|bytes| export::deliver(&bytes));

        self.status = Some(match result {
            Ok(target) => format!("Exported {target}"),
            Err(err) => {
                log::warn!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        match ctx.input_mut(|input| history_shortcut(input, typing)) {
            Some(HistoryShortcut::Undo) => {
                self.sketchpad.undo();
            }
            Some(HistoryShortcut::Redo) => {
                self.sketchpad.redo();
            }
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryShortcut {
    Undo,
    Redo,
}

/// Consume an undo/redo key press. Left alone while a text field has focus
/// so the field keeps its own undo.
fn history_shortcut(input: &mut egui::InputState, typing: bool) -> Option<HistoryShortcut> {
    if typing {
        return None;
    }
    // Check redo first: the undo shortcut also matches with Shift held
    if input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT) {
        Some(HistoryShortcut::Redo)
    } else if input.consume_shortcut(&UNDO) {
        Some(HistoryShortcut::Undo)
    } else {
        None
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(shortcut: KeyboardShortcut) -> egui::InputState {
        let mut input = egui::InputState::default();
        input.events.push(egui::Event::Key {
            key: shortcut.logical_key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: shortcut.modifiers,
        });
        input
    }

    #[test]
    fn test_shortcuts_map_to_history() {
        assert_eq!(history_shortcut(&mut pressed(UNDO), false), Some(HistoryShortcut::Undo));
        assert_eq!(history_shortcut(&mut pressed(REDO), false), Some(HistoryShortcut::Redo));
        assert_eq!(history_shortcut(&mut pressed(REDO_ALT), false), Some(HistoryShortcut::Redo));
    }

    #[test]
    fn test_shortcuts_left_to_focused_text_field() {
        let mut input = pressed(UNDO);
        assert_eq!(history_shortcut(&mut input, true), None);
        // The key event stays for the text field
        assert_eq!(input.events.len(), 1);
    }
}
