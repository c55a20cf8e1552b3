//! Display-list rendering.
//!
//! A [`Frame`] is the output of one render pass: the background to erase
//! with and the ordered draw ops on top of it. Frames are replayed onto a
//! [`Surface`], either the on-screen egui painter or an off-screen raster.

use egui::{Color32, Pos2};

use crate::drawable::{Drawable, Mark};
use crate::tools::Preview;

pub(crate) mod glyphs;
pub mod painter;
pub mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

/// A single primitive in canvas space
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Straight line segment with round ends
    Segment {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
    /// Filled circle with a thin outline
    Dot {
        center: Pos2,
        radius: f32,
        fill: Color32,
        outline: Color32,
    },
    /// Text centered within the `size`-wide em box whose top-left is `origin`
    Glyph {
        origin: Pos2,
        text: String,
        size: f32,
        color: Color32,
    },
}

/// The display list produced by one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    background: Color32,
    ops: Vec<DrawOp>,
}

impl Frame {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of segment ops in the frame
    pub fn segment_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Segment { .. }))
            .count()
    }

    /// Replay the frame onto a surface: erase first, then every op in order
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.erase(self.background);
        for op in &self.ops {
            match op {
                DrawOp::Segment { from, to, width, color } => {
                    surface.segment(*from, *to, *width, *color);
                }
                DrawOp::Dot { center, radius, fill, outline } => {
                    surface.dot(*center, *radius, *fill, *outline);
                }
                DrawOp::Glyph { origin, text, size, color } => {
                    surface.glyph(*origin, text, *size, *color);
                }
            }
        }
    }
}

/// Something a [`Frame`] can be painted onto. Coordinates are canvas space.
pub trait Surface {
    /// Fill the whole surface with the background color
    fn erase(&mut self, background: Color32);

    fn segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);

    fn dot(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32);

    fn glyph(&mut self, origin: Pos2, text: &str, size: f32, color: Color32);
}

/// Build the frame for the given committed list and preview.
///
/// Committed entries paint oldest first, so later entries occlude earlier
/// ones; the preview always paints last.
pub fn compose(background: Color32, committed: &[Drawable], preview: Option<&Preview>) -> Frame {
    let mut frame = Frame::new(background);
    for drawable in committed {
        drawable.render(&mut frame);
    }
    if let Some(preview) = preview {
        preview.render(&mut frame);
    }
    frame
}

/// Holds the most recent frame and rebuilds it on demand
#[derive(Debug, Clone)]
pub struct RenderLoop {
    frame: Frame,
    passes: u64,
}

impl RenderLoop {
    pub fn new(background: Color32) -> Self {
        Self {
            frame: Frame::new(background),
            passes: 0,
        }
    }

    /// Erase and repaint from the current state
    pub fn redraw(&mut self, committed: &[Drawable], preview: Option<&Preview>) {
        self.frame = compose(self.frame.background, committed, preview);
        self.passes += 1;
    }

    /// The frame built by the latest pass
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of passes run so far
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::factory;
    use crate::tools::Tool;

    #[test]
    fn test_compose_orders_preview_last() {
        let mut stroke = factory::create_stroke(Pos2::ZERO, 2.0, Color32::RED);
        stroke.drag_to(Pos2::new(5.0, 5.0));
        let marker = Tool::Marker {
            width: 4.0,
            color: Color32::BLUE,
        };
        let preview = marker.preview_at(Pos2::new(9.0, 9.0));

        let frame = compose(Color32::WHITE, &[stroke], Some(&preview));

        assert_eq!(frame.ops().len(), 2);
        assert!(matches!(frame.ops()[0], DrawOp::Segment { .. }));
        assert!(matches!(frame.ops()[1], DrawOp::Dot { .. }));
    }

    #[test]
    fn test_redraw_is_idempotent() {
        let mut stroke = factory::create_stroke(Pos2::ZERO, 2.0, Color32::RED);
        stroke.drag_to(Pos2::new(5.0, 5.0));
        let committed = vec![stroke];

        let mut render = RenderLoop::new(Color32::WHITE);
        render.redraw(&committed, None);
        let first = render.frame().clone();
        render.redraw(&committed, None);

        assert_eq!(&first, render.frame());
        assert_eq!(render.passes(), 2);
    }

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Surface for Recorder {
        fn erase(&mut self, _background: Color32) {
            self.0.push("erase".to_owned());
        }
        fn segment(&mut self, _from: Pos2, _to: Pos2, _width: f32, _color: Color32) {
            self.0.push("segment".to_owned());
        }
        fn dot(&mut self, _center: Pos2, _radius: f32, _fill: Color32, _outline: Color32) {
            self.0.push("dot".to_owned());
        }
        fn glyph(&mut self, _origin: Pos2, text: &str, _size: f32, _color: Color32) {
            self.0.push(format!("glyph {text}"));
        }
    }

    #[test]
    fn test_paint_erases_before_drawing() {
        let sticker = factory::create_sticker(Pos2::new(3.0, 3.0), "🐚", 16.0, Color32::BLACK);
        let frame = compose(Color32::WHITE, &[sticker], None);

        let mut recorder = Recorder::default();
        frame.paint(&mut recorder);

        assert_eq!(recorder.0, vec!["erase".to_owned(), "glyph 🐚".to_owned()]);
    }
}
