use egui::{Color32, Pos2};

use super::Mark;
use crate::id_generator::DrawableId;
use crate::render::{DrawOp, Frame};

/// Freehand stroke: a polyline with width and color fixed at creation
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: DrawableId,
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl Stroke {
    /// Create a new stroke seeded with one point
    pub fn new(id: DrawableId, origin: Pos2, width: f32, color: Color32) -> Self {
        Self {
            id,
            points: vec![origin],
            width,
            color,
        }
    }

    /// Get the points that make up this stroke, in drawing order
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Number of visible segments
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

impl Mark for Stroke {
    fn id(&self) -> DrawableId {
        self.id
    }

    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn drag_to(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn render(&self, frame: &mut Frame) {
        // A single point has no motion and leaves no mark
        for pair in self.points.windows(2) {
            frame.push(DrawOp::Segment {
                from: pair[0],
                to: pair[1],
                width: self.width,
                color: self.color,
            });
        }
    }
}
