use egui::{Color32, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use super::Surface;
use super::glyphs::GlyphSet;

/// Software rasterizer painting frames into an RGBA buffer at a fixed scale
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
}

impl RasterSurface {
    /// Create a transparent surface of `width`×`height` pixels.
    /// Canvas coordinates are multiplied by `scale`.
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            scale,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn scaled(&self, point: Pos2) -> Pos2 {
        Pos2::new(point.x * self.scale, point.y * self.scale)
    }

    /// Source-over blend of `color` into one pixel with the given coverage
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        let (width, height) = self.image.dimensions();
        if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = f32::from(a) / 255.0 * coverage;
        let Rgba(dst) = self.image.get_pixel_mut(x as u32, y as u32);

        for (channel, src) in dst.iter_mut().zip([r, g, b]) {
            *channel = lerp(*channel, src, alpha);
        }
        dst[3] = (alpha * 255.0 + f32::from(dst[3]) * (1.0 - alpha)).round() as u8;
    }

    /// Visit every pixel whose center lies within the box around `min`..`max`
    fn pixels_in(&self, min: Pos2, max: Pos2) -> impl Iterator<Item = (i64, i64, Pos2)> + use<> {
        let x0 = min.x.floor().max(0.0) as i64;
        let y0 = min.y.floor().max(0.0) as i64;
        let x1 = (max.x.ceil() as i64).min(i64::from(self.image.width()));
        let y1 = (max.y.ceil() as i64).min(i64::from(self.image.height()));

        (y0..y1).flat_map(move |y| {
            (x0..x1).map(move |x| (x, y, Pos2::new(x as f32 + 0.5, y as f32 + 0.5)))
        })
    }
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

impl Surface for RasterSurface {
    fn erase(&mut self, background: Color32) {
        let [r, g, b, a] = background.to_srgba_unmultiplied();
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, a]);
        }
    }

    fn segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let (from, to) = (self.scaled(from), self.scaled(to));
        let half = (width * self.scale / 2.0).max(0.5);
        let pad = Vec2::splat(half + 1.0);

        let pixels: Vec<_> = self.pixels_in(from.min(to) - pad, from.max(to) + pad).collect();
        for (x, y, center) in pixels {
            let distance = distance_to_line_segment(center, from, to);
            self.blend(x, y, color, half + 0.5 - distance);
        }
    }

    fn dot(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Color32) {
        let center = self.scaled(center);
        let radius = radius * self.scale;
        let pad = Vec2::splat(radius + 1.5);

        let pixels: Vec<_> = self.pixels_in(center - pad, center + pad).collect();
        for (x, y, pixel) in pixels {
            let distance = pixel.distance(center);
            self.blend(x, y, fill, radius + 0.5 - distance);
            self.blend(x, y, outline, 1.0 - (distance - radius).abs());
        }
    }

    fn glyph(&mut self, origin: Pos2, text: &str, size: f32, color: Color32) {
        let px_size = size * self.scale;
        let outlines = GlyphSet::shared().outline(text, px_size);
        if outlines.is_empty() {
            return;
        }

        // Center the union of the glyph boxes in the em box, matching the on-screen anchor
        let (min, max) = outlines.iter().fold(
            (
                Pos2::new(f32::INFINITY, f32::INFINITY),
                Pos2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
            ),
            |(min, max), outline| {
                let bounds = outline.px_bounds();
                (
                    min.min(Pos2::new(bounds.min.x, bounds.min.y)),
                    max.max(Pos2::new(bounds.max.x, bounds.max.y)),
                )
            },
        );
        let target = self.scaled(origin) + Vec2::splat(px_size / 2.0);
        let offset = target - Pos2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);

        for outline in &outlines {
            let bounds = outline.px_bounds();
            let left = (bounds.min.x + offset.x).round() as i64;
            let top = (bounds.min.y + offset.y).round() as i64;
            outline.draw(|x, y, coverage| {
                self.blend(left + i64::from(x), top + i64::from(y), color, coverage);
            });
        }
    }
}
