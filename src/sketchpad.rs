use egui::{Color32, Pos2, Vec2};

use crate::config::SketchConfig;
use crate::error::ExportResult;
use crate::export;
use crate::history::History;
use crate::id_generator::DrawableId;
use crate::input::InputEvent;
use crate::render::{Frame, RenderLoop, compose};
use crate::tools::{Preview, Tool, ToolKind, ToolSettings};

/// State of the current pointer gesture
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Idle,
    /// Marker pressed but not yet moved. The stroke only begins on motion,
    /// so a click without movement leaves the history untouched.
    Pending { origin: Pos2, tool: Tool },
    Drawing(DrawableId),
}

/// The drawing core: history, tool settings and preview, repainted
/// synchronously after every change.
#[derive(Debug, Clone)]
pub struct Sketchpad {
    canvas_size: Vec2,
    max_export_dimension: u32,
    settings: ToolSettings,
    stickers: Vec<String>,
    history: History,
    preview: Option<Preview>,
    gesture: Gesture,
    render: RenderLoop,
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: &SketchConfig) -> Self {
        let mut sketchpad = Self {
            canvas_size: config.canvas_size(),
            max_export_dimension: config.max_export_dimension,
            settings: ToolSettings::from_config(config),
            stickers: config
                .stickers
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect(),
            history: History::new(),
            preview: None,
            gesture: Gesture::Idle,
            render: RenderLoop::new(config.background_color()),
        };
        sketchpad.redraw();
        sketchpad
    }

    fn redraw(&mut self) {
        self.render.redraw(self.history.committed(), self.preview.as_ref());
    }

    fn active_tool(&self) -> Tool {
        Tool::from_settings(&self.settings)
    }

    /// Dispatch one input event
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.on_pointer_down(position),
            InputEvent::PointerMove { position } => self.on_pointer_move(position),
            InputEvent::PointerUp { position } => self.on_pointer_up(position),
            InputEvent::PointerEnter { position } => self.on_pointer_enter(position),
            InputEvent::PointerLeave => self.on_pointer_leave(),
        }
    }

    pub fn on_pointer_down(&mut self, point: Pos2) {
        self.finish_gesture();
        self.preview = None;

        let tool = self.active_tool();
        self.gesture = match tool.kind() {
            ToolKind::Marker => Gesture::Pending { origin: point, tool },
            ToolKind::Sticker => Gesture::Drawing(tool.begin(&mut self.history, point)),
        };
        self.redraw();
    }

    pub fn on_pointer_move(&mut self, point: Pos2) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => {
                self.preview = Some(self.active_tool().preview_at(point));
            }
            Gesture::Pending { origin, tool } => {
                let id = tool.begin(&mut self.history, origin);
                self.history.extend(id, point);
                self.gesture = Gesture::Drawing(id);
            }
            Gesture::Drawing(id) => {
                self.history.extend(id, point);
                self.gesture = Gesture::Drawing(id);
            }
        }
        self.redraw();
    }

    pub fn on_pointer_up(&mut self, point: Pos2) {
        self.finish_gesture();
        // The pointer is still over the canvas, so the preview comes back
        self.preview = Some(self.active_tool().preview_at(point));
        self.redraw();
    }

    pub fn on_pointer_enter(&mut self, point: Pos2) {
        if self.gesture == Gesture::Idle {
            self.preview = Some(self.active_tool().preview_at(point));
            self.redraw();
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.finish_gesture();
        self.preview = None;
        self.redraw();
    }

    fn finish_gesture(&mut self) {
        if let Gesture::Drawing(_) = std::mem::replace(&mut self.gesture, Gesture::Idle) {
            self.history.end_gesture();
        }
    }

    /// Select the marker with the given width
    pub fn set_tool_stroke(&mut self, width: f32) {
        log::info!("Marker selected, width {width}");
        self.settings.kind = ToolKind::Marker;
        self.settings.stroke_width = width;
        self.refresh_preview();
    }

    /// Select a sticker glyph
    pub fn set_tool_sticker(&mut self, glyph: &str) {
        log::info!("Sticker selected: {glyph}");
        self.settings.kind = ToolKind::Sticker;
        self.settings.sticker_glyph = glyph.to_owned();
        self.refresh_preview();
    }

    pub fn set_sticker_size(&mut self, size: f32) {
        self.settings.sticker_size = size;
        self.refresh_preview();
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
        self.refresh_preview();
    }

    /// Add a custom sticker to the palette and select it.
    /// Returns false if the text is blank.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.stickers.iter().any(|s| s == glyph) {
            self.stickers.push(glyph.to_owned());
        }
        self.set_tool_sticker(glyph);
        true
    }

    fn refresh_preview(&mut self) {
        if let Some(at) = self.preview.as_ref().map(Preview::at) {
            self.preview = Some(self.active_tool().preview_at(at));
            self.redraw();
        }
    }

    pub fn undo(&mut self) {
        self.gesture = Gesture::Idle;
        if self.history.undo() {
            self.redraw();
        }
    }

    pub fn redo(&mut self) {
        self.gesture = Gesture::Idle;
        if self.history.redo() {
            self.redraw();
        }
    }

    pub fn clear(&mut self) {
        self.gesture = Gesture::Idle;
        self.history.clear();
        self.redraw();
    }

    /// Render the committed drawing (no preview) at `scale` and encode it as
    /// PNG. The on-screen frame is not touched.
    pub fn export_raster(&self, scale: f32) -> ExportResult<Vec<u8>> {
        let frame = compose(self.render.frame().background(), self.history.committed(), None);
        let image = export::rasterize(&frame, self.canvas_size, scale, self.max_export_dimension)?;
        export::encode_png(&image)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// The frame from the latest render pass
    pub fn frame(&self) -> &Frame {
        self.render.frame()
    }

    /// Number of render passes so far
    pub fn render_passes(&self) -> u64 {
        self.render.passes()
    }

    /// True while a gesture is drawing or about to draw
    pub fn is_drawing(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// The system cursor is hidden while the preview stands in for it
    pub fn cursor_hidden(&self) -> bool {
        self.preview.is_some()
    }
}
