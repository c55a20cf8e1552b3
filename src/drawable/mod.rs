use egui::Pos2;

use crate::id_generator::DrawableId;
use crate::render::Frame;

pub(crate) mod stroke;
pub(crate) mod sticker;

pub use sticker::Sticker;
pub use stroke::Stroke;

/// Capabilities shared by every kind of committed drawing content
pub trait Mark {
    /// Handle of this drawable
    fn id(&self) -> DrawableId;

    /// Short name of the drawable kind, used in history log messages
    fn kind(&self) -> &'static str;

    /// Apply a drag update while the drawable is the in-progress item
    fn drag_to(&mut self, point: Pos2);

    /// Emit the draw ops for the committed drawable
    fn render(&self, frame: &mut Frame);
}

/// A unit of committed drawing content
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            Self::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            Self::Stroke(_) => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}

impl Mark for Drawable {
    fn id(&self) -> DrawableId {
        match self {
            Self::Stroke(s) => s.id(),
            Self::Sticker(s) => s.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(s) => s.kind(),
            Self::Sticker(s) => s.kind(),
        }
    }

    fn drag_to(&mut self, point: Pos2) {
        match self {
            Self::Stroke(s) => s.drag_to(point),
            Self::Sticker(s) => s.drag_to(point),
        }
    }

    fn render(&self, frame: &mut Frame) {
        match self {
            Self::Stroke(s) => s.render(frame),
            Self::Sticker(s) => s.render(frame),
        }
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use egui::{Color32, Pos2};

    use super::{Drawable, Sticker, Stroke};
    use crate::id_generator::generate_id;

    /// Create a stroke seeded with its first point
    pub fn create_stroke(origin: Pos2, width: f32, color: Color32) -> Drawable {
        Drawable::Stroke(Stroke::new(generate_id(), origin, width, color))
    }

    /// Create a sticker anchored at `origin`
    pub fn create_sticker(origin: Pos2, glyph: &str, size: f32, color: Color32) -> Drawable {
        Drawable::Sticker(Sticker::new(generate_id(), origin, glyph, size, color))
    }
}
