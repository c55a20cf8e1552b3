use egui::{Color32, Pos2};

use super::Tool;
use crate::drawable::sticker::glyph_op;
use crate::render::{DrawOp, Frame};

/// Radius of the marker preview dot. Independent of stroke width so the
/// anchor point stays unambiguous.
pub const MARKER_PREVIEW_RADIUS: f32 = 2.0;

/// Render-only indicator of what the active tool would draw at the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    tool: Tool,
    at: Pos2,
}

impl Preview {
    pub fn new(tool: Tool, at: Pos2) -> Self {
        Self { tool, at }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn at(&self) -> Pos2 {
        self.at
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.tool {
            Tool::Marker { color, .. } => frame.push(DrawOp::Dot {
                center: self.at,
                radius: MARKER_PREVIEW_RADIUS,
                fill: *color,
                outline: outline_for(*color),
            }),
            Tool::Sticker { glyph, size, color } => {
                frame.push(glyph_op(self.at, glyph, *size, *color))
            }
        }
    }
}

// Dark fills get a light rim so the dot stays visible over strokes of the same color
fn outline_for(fill: Color32) -> Color32 {
    let [r, g, b, _] = fill.to_array();
    let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
    if luma < 128.0 { Color32::WHITE } else { Color32::BLACK }
}
