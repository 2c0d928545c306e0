//! Receipt template: the background raster the fields are drawn onto

use std::path::PathBuf;

use image::Rgba;
use tracing::{info, warn};

use crate::canvas::{BLACK, Canvas, WHITE};
use crate::error::{RenderError, RenderResult};
use crate::font::TextFont;

/// Synthesized template width
pub const TEMPLATE_WIDTH: u32 = 600;
/// Synthesized template height
pub const TEMPLATE_HEIGHT: u32 = 450;

const HEADER: Rgba<u8> = Rgba([0x2c, 0x3e, 0x50, 255]);
const BORDER: Rgba<u8> = Rgba([0xe1, 0xe8, 0xed, 255]);
const LABEL: Rgba<u8> = Rgba([0x66, 0x66, 0x66, 255]);
const CAPTION: Rgba<u8> = Rgba([0x33, 0x33, 0x33, 255]);

const FOOTER_TEXT: &str = "Thank you for your business!";

/// Load the first existing template candidate, or synthesize a placeholder
///
/// A candidate that exists but cannot be read or decoded is an error; only
/// the absence of every candidate leads to the synthesized template.
pub fn load_template(candidates: &[PathBuf], font: &TextFont) -> RenderResult<Canvas> {
    let Some(path) = candidates.iter().find(|p| p.is_file()) else {
        if !candidates.is_empty() {
            warn!(
                candidates = candidates.len(),
                "no template asset found, synthesizing placeholder"
            );
        }
        return Ok(synthesize_template(font));
    };

    let bytes = std::fs::read(path).map_err(|source| RenderError::TemplateRead {
        path: path.clone(),
        source,
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| RenderError::TemplateDecode {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), width = image.width(), height = image.height(), "template loaded");
    Ok(Canvas::new(image.to_rgba8()))
}

/// Placeholder receipt form: header band, labelled detail area, empty
/// payment checkboxes and a footer band
pub fn synthesize_template(font: &TextFont) -> Canvas {
    let w = TEMPLATE_WIDTH as i32;
    let h = TEMPLATE_HEIGHT as i32;
    let mut c = Canvas::blank(TEMPLATE_WIDTH, TEMPLATE_HEIGHT, WHITE);

    // Header
    c.fill_rect(0, 0, w, 80, HEADER);
    font.draw_text(&mut c, 50, 30, 24.0, WHITE, "RECEIPT");
    font.draw_text(&mut c, 50, 55, 12.0, WHITE, "Professional Receipt Generator");

    // Details area
    c.stroke_rect(20, 100, w - 20, 400, 2, BORDER);

    for (x, y, label) in [
        (50, 115, "Receipt ID:"),
        (400, 115, "Date:"),
        (50, 155, "Received From:"),
        (50, 195, "For:"),
        (50, 235, "Cheque No:"),
        (50, 275, "Amount:"),
        (50, 315, "Payment Method:"),
    ] {
        font.draw_text(&mut c, x, y, 10.0, LABEL, label);
    }

    c.stroke_rect(150, 330, 162, 342, 1, BLACK);
    font.draw_text(&mut c, 170, 330, 10.0, CAPTION, "Cash");
    c.stroke_rect(240, 330, 252, 342, 1, BLACK);
    font.draw_text(&mut c, 260, 330, 10.0, CAPTION, "Cheque");

    // Footer
    c.fill_rect(0, h - 50, w, h, HEADER);
    let x = (w - font.text_width(12.0, FOOTER_TEXT)) / 2;
    font.draw_text(&mut c, x, h - 35, 12.0, WHITE, FOOTER_TEXT);

    c
}
