//! Font resolution and text drawing

use std::path::{Path, PathBuf};

use image::Rgba;
use rusttype::{Font, Scale, point};
use tracing::{debug, warn};

use crate::bitmap_font;
use crate::canvas::Canvas;

/// Font used for every text overlay of one render
pub enum TextFont {
    /// TrueType font loaded from disk
    TrueType { font: Font<'static>, path: PathBuf },
    /// Built-in bitmap font
    Builtin,
}

impl std::fmt::Debug for TextFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextFont::TrueType { path, .. } => f.debug_tuple("TrueType").field(path).finish(),
            TextFont::Builtin => f.write_str("Builtin"),
        }
    }
}

impl TextFont {
    /// Try each candidate in order; fall back to the built-in bitmap font
    pub fn load(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::load_truetype(path) {
                Some(font) => {
                    debug!(path = %path.display(), "font loaded");
                    return TextFont::TrueType {
                        font,
                        path: path.clone(),
                    };
                }
                None => debug!(path = %path.display(), "font candidate unavailable"),
            }
        }
        if !candidates.is_empty() {
            warn!(
                candidates = candidates.len(),
                "no TrueType font could be loaded, using built-in bitmap font"
            );
        }
        TextFont::Builtin
    }

    fn load_truetype(path: &Path) -> Option<Font<'static>> {
        let bytes = std::fs::read(path).ok()?;
        Font::try_from_vec(bytes)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, TextFont::Builtin)
    }

    /// Draw left-aligned `text` with its top edge at `y`
    pub fn draw_text(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        size: f32,
        color: Rgba<u8>,
        text: &str,
    ) {
        match self {
            TextFont::TrueType { font, .. } => draw_truetype(canvas, font, x, y, size, color, text),
            TextFont::Builtin => bitmap_font::draw_text(canvas, x, y, size, color, text),
        }
    }

    /// Horizontal extent of `text` in pixels
    pub fn text_width(&self, size: f32, text: &str) -> i32 {
        match self {
            TextFont::TrueType { font, .. } => {
                let scale = Scale::uniform(size);
                let width: f32 = text
                    .chars()
                    .map(|ch| font.glyph(ch).scaled(scale).h_metrics().advance_width)
                    .sum();
                width.ceil() as i32
            }
            TextFont::Builtin => bitmap_font::text_width(size, text),
        }
    }
}

fn draw_truetype(
    canvas: &mut Canvas,
    font: &Font<'static>,
    x: i32,
    y: i32,
    size: f32,
    color: Rgba<u8>,
    text: &str,
) {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let baseline_y = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline_y)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                canvas.blend_pixel(gx as i32 + bb.min.x, gy as i32 + bb.min.y, color, v);
            });
        }
    }
}
