//! Raster drawing primitives
//!
//! All coordinates are signed; anything outside the image is clipped
//! silently so overlay positions never fail on a small template.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// RGBA drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Solid-colored canvas
    pub fn blank(width: u32, height: u32, color: Rgba<u8>) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, color))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at (x, y), `None` when outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        let (x, y) = self.clip(x, y)?;
        Some(*self.image.get_pixel(x, y))
    }

    fn clip(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return None;
        }
        Some((x, y))
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if let Some((x, y)) = self.clip(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Blend `color` over the existing pixel with the given coverage (0.0..=1.0)
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
        let Some((x, y)) = self.clip(x, y) else {
            return;
        };
        let a = (coverage.clamp(0.0, 1.0) * 255.0) as u8;
        if a == 0 {
            return;
        }
        let sa = a as f32 / 255.0;
        let inv = 1.0 - sa;
        let dst = self.image.get_pixel_mut(x, y);
        dst.0[0] = (color.0[0] as f32 * sa + dst.0[0] as f32 * inv) as u8;
        dst.0[1] = (color.0[1] as f32 * sa + dst.0[1] as f32 * inv) as u8;
        dst.0[2] = (color.0[2] as f32 * sa + dst.0[2] as f32 * inv) as u8;
        dst.0[3] = 255;
    }

    /// Fill the inclusive rectangle `[x0, x1] × [y0, y1]`
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put_pixel(x, y, color);
            }
        }
    }

    /// Outline the inclusive rectangle `[x0, x1] × [y0, y1]`, stroke grows inward
    pub fn stroke_rect(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        width: i32,
        color: Rgba<u8>,
    ) {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        for i in 0..width.max(1) {
            if left + i > right - i || top + i > bottom - i {
                break;
            }
            self.fill_rect(left + i, top + i, right - i, top + i, color);
            self.fill_rect(left + i, bottom - i, right - i, bottom - i, color);
            self.fill_rect(left + i, top + i, left + i, bottom - i, color);
            self.fill_rect(right - i, top + i, right - i, bottom - i, color);
        }
    }

    /// Bresenham line stamped with a square brush of `width` pixels
    pub fn draw_line(
        &mut self,
        (x0, y0): (i32, i32),
        (x1, y1): (i32, i32),
        width: i32,
        color: Rgba<u8>,
    ) {
        let width = width.max(1);
        let lo = -((width - 1) / 2);
        let hi = width / 2;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.fill_rect(x + lo, y + lo, x + hi, y + hi, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Payment-method checkbox: 1px square outline, plus a 2px checkmark when checked
    pub fn draw_checkbox(&mut self, x: i32, y: i32, checked: bool, size: i32) {
        self.stroke_rect(x, y, x + size, y + size, 1, BLACK);
        if checked {
            self.draw_line((x + 2, y + 6), (x + 5, y + size - 2), 2, BLACK);
            self.draw_line((x + 5, y + size - 2), (x + size - 2, y + 2), 2, BLACK);
        }
    }

    /// Encode the canvas as PNG bytes
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(RenderError::Encode)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dark_pixels(canvas: &Canvas, x0: i32, y0: i32, x1: i32, y1: i32) -> usize {
        let mut count = 0;
        for y in y0..=y1 {
            for x in x0..=x1 {
                if canvas.pixel(x, y) == Some(BLACK) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_clipping() {
        let mut c = Canvas::blank(10, 10, WHITE);
        c.put_pixel(-1, 5, BLACK);
        c.put_pixel(5, 10, BLACK);
        c.fill_rect(-5, -5, 2, 2, BLACK);
        assert_eq!(c.pixel(0, 0), Some(BLACK));
        assert_eq!(c.pixel(2, 2), Some(BLACK));
        assert_eq!(c.pixel(3, 3), Some(WHITE));
        assert_eq!(c.pixel(10, 0), None);
    }

    #[test]
    fn test_stroke_rect_outline_only() {
        let mut c = Canvas::blank(20, 20, WHITE);
        c.stroke_rect(2, 2, 14, 14, 1, BLACK);
        assert_eq!(c.pixel(2, 2), Some(BLACK));
        assert_eq!(c.pixel(14, 14), Some(BLACK));
        assert_eq!(c.pixel(8, 2), Some(BLACK));
        assert_eq!(c.pixel(8, 8), Some(WHITE));
        // 13 px per side, corners shared
        assert_eq!(dark_pixels(&c, 0, 0, 19, 19), 4 * 12);
    }

    #[test]
    fn test_line_endpoints() {
        let mut c = Canvas::blank(20, 20, WHITE);
        c.draw_line((1, 1), (10, 7), 1, BLACK);
        assert_eq!(c.pixel(1, 1), Some(BLACK));
        assert_eq!(c.pixel(10, 7), Some(BLACK));
        assert_eq!(c.pixel(1, 7), Some(WHITE));
    }

    #[test]
    fn test_checked_box_distinguishable() {
        let (x, y) = (10, 10);
        let mut unchecked = Canvas::blank(40, 40, WHITE);
        unchecked.draw_checkbox(x, y, false, 12);
        let mut checked = Canvas::blank(40, 40, WHITE);
        checked.draw_checkbox(x, y, true, 12);

        // Outline is present in both
        assert_eq!(unchecked.pixel(x, y), Some(BLACK));
        assert_eq!(checked.pixel(x + 12, y + 12), Some(BLACK));

        // Checkmark vertex only when checked
        assert_eq!(unchecked.pixel(x + 5, y + 10), Some(WHITE));
        assert_eq!(checked.pixel(x + 5, y + 10), Some(BLACK));

        let inside = |c: &Canvas| dark_pixels(c, x + 1, y + 1, x + 11, y + 11);
        assert_eq!(inside(&unchecked), 0);
        assert!(inside(&checked) > 10);
    }

    #[test]
    fn test_blend_pixel() {
        let mut c = Canvas::blank(2, 2, WHITE);
        c.blend_pixel(0, 0, BLACK, 1.0);
        c.blend_pixel(1, 0, BLACK, 0.5);
        c.blend_pixel(1, 1, BLACK, 0.0);
        assert_eq!(c.pixel(0, 0), Some(BLACK));
        let half = c.pixel(1, 0).unwrap();
        assert!(half.0[0] > 100 && half.0[0] < 160);
        assert_eq!(c.pixel(1, 1), Some(WHITE));
    }

    #[test]
    fn test_encode_png_magic() {
        let c = Canvas::blank(4, 4, WHITE);
        let png = c.encode_png().unwrap();
        assert_eq!(&png[..8], &crate::PNG_MAGIC);
    }
}
