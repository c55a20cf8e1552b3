use egui::{Color32, Pos2, Vec2};

use super::Mark;
use crate::id_generator::DrawableId;
use crate::render::{DrawOp, Frame};

/// A glyph stamped onto the canvas. Dragging moves it; only the latest anchor matters.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    anchor: Pos2,
    glyph: String,
    size: f32,
    color: Color32,
}

impl Sticker {
    pub fn new(id: DrawableId, anchor: Pos2, glyph: &str, size: f32, color: Color32) -> Self {
        Self {
            id,
            anchor,
            glyph: glyph.to_owned(),
            size,
            color,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

/// Offset from a glyph's visual center to the top-left of its em box
pub fn glyph_center_offset(size: f32) -> Vec2 {
    Vec2::splat(size / 2.0)
}

/// Draw op placing `glyph` so that its visual center sits on `at`
pub(crate) fn glyph_op(at: Pos2, glyph: &str, size: f32, color: Color32) -> DrawOp {
    DrawOp::Glyph {
        origin: at - glyph_center_offset(size),
        text: glyph.to_owned(),
        size,
        color,
    }
}

impl Mark for Sticker {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "sticker"
    }

    fn drag_to(&mut self, point: Pos2) {
        self.anchor = point;
    }

    fn render(&self, frame: &mut Frame) {
        frame.push(glyph_op(self.anchor, &self.glyph, self.size, self.color));
    }
}
