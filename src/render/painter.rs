use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke};

use super::Surface;

/// Paints frames through an egui [`Painter`], mapping canvas space into `rect`
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        self.rect.min + point.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn erase(&mut self, background: Color32) {
        self.painter.rect_filled(self.rect, 0.0, background);
    }

    fn segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let (from, to) = (self.to_screen(from), self.to_screen(to));
        self.painter.line_segment([from, to], EguiStroke::new(width, color));
        // egui lines are butt-capped; round the joints of wide strokes
        if width > 2.0 {
            self.painter.circle_filled(from, width / 2.0, color);
            self.painter.circle_filled(to, width / 2.0, color);
        }
    }

    fn dot(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32) {
        self.painter
            .circle(self.to_screen(center), radius, fill, EguiStroke::new(1.0, outline));
    }

    fn glyph(&mut self, origin: Pos2, text: &str, size: f32, color: Color32) {
        let center = self.to_screen(origin) + egui::Vec2::splat(size / 2.0);
        self.painter
            .text(center, Align2::CENTER_CENTER, text, FontId::proportional(size), color);
    }
}
