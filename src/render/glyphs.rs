use std::sync::OnceLock;

use ab_glyph::{Font, FontVec, OutlinedGlyph, PxScale, ScaleFont, point};

static SHARED: OnceLock<GlyphSet> = OnceLock::new();

/// Fonts used to rasterize sticker glyphs off-screen.
///
/// Loaded from egui's bundled proportional family so exported stickers use
/// the same faces (including the emoji fallbacks) as the on-screen canvas.
pub(crate) struct GlyphSet {
    fonts: Vec<FontVec>,
}

impl GlyphSet {
    pub(crate) fn shared() -> &'static GlyphSet {
        SHARED.get_or_init(Self::from_egui_defaults)
    }

    fn from_egui_defaults() -> Self {
        let definitions = egui::FontDefinitions::default();
        let names = definitions
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let fonts: Vec<FontVec> = names
            .iter()
            .filter_map(|name| {
                let data = definitions.font_data.get(name)?;
                match FontVec::try_from_vec_and_index(data.font.to_vec(), data.index) {
                    Ok(font) => Some(font),
                    Err(err) => {
                        log::warn!("Skipping font {name} for export: {err}");
                        None
                    }
                }
            })
            .collect();

        log::debug!("Loaded {} fonts for glyph rasterization", fonts.len());
        Self { fonts }
    }

    fn font_for(&self, c: char) -> Option<&FontVec> {
        self.fonts.iter().find(|font| font.glyph_id(c).0 != 0)
    }

    /// Lay out `text` on one line at `px_size` and return its outlines.
    /// Characters no font covers are skipped.
    pub(crate) fn outline(&self, text: &str, px_size: f32) -> Vec<OutlinedGlyph> {
        let scale = PxScale::from(px_size);
        let mut caret = 0.0;
        let mut outlined = Vec::new();

        for c in text.chars() {
            let Some(font) = self.font_for(c) else {
                log::warn!("No font covers {c:?}; it will be missing from the export");
                continue;
            };
            let scaled = font.as_scaled(scale);
            let mut glyph = scaled.scaled_glyph(c);
            glyph.position = point(caret, scaled.ascent());
            caret += scaled.h_advance(glyph.id);

            if let Some(outline) = font.outline_glyph(glyph) {
                outlined.push(outline);
            }
        }

        outlined
    }
}
