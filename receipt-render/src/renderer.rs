//! Receipt renderer
//!
//! Composites ReceiptData onto the template and encodes the result as PNG.

use std::path::PathBuf;

use shared::{ReceiptData, ReceiptId};
use tracing::{debug, instrument};

use crate::canvas::{BLACK, Canvas};
use crate::error::RenderResult;
use crate::font::TextFont;
use crate::layout::{CHECKBOX_SIZE, CURRENCY_LABEL, Field};
use crate::template::load_template;

/// Asset locations searched on every render, in priority order
#[derive(Debug, Clone, Default)]
pub struct RenderAssets {
    pub template_candidates: Vec<PathBuf>,
    pub font_candidates: Vec<PathBuf>,
}

impl RenderAssets {
    pub fn new(template_candidates: Vec<PathBuf>, font_candidates: Vec<PathBuf>) -> Self {
        Self {
            template_candidates,
            font_candidates,
        }
    }

    /// No assets: synthesized template and built-in bitmap font
    pub fn builtin() -> Self {
        Self::default()
    }
}

/// Receipt renderer
///
/// Stateless apart from the asset list; template and font are opened per
/// render and dropped afterwards.
#[derive(Debug, Clone)]
pub struct ReceiptRenderer {
    assets: RenderAssets,
}

impl ReceiptRenderer {
    pub fn new(assets: RenderAssets) -> Self {
        Self { assets }
    }

    /// Render a receipt to PNG bytes
    #[instrument(skip_all, fields(receipt_id = %id))]
    pub fn render(&self, data: &ReceiptData, id: &ReceiptId) -> RenderResult<Vec<u8>> {
        let canvas = self.render_canvas(data, id)?;
        let png = canvas.encode_png()?;
        debug!(bytes = png.len(), "receipt encoded");
        Ok(png)
    }

    /// Render a receipt without encoding it
    pub fn render_canvas(&self, data: &ReceiptData, id: &ReceiptId) -> RenderResult<Canvas> {
        let font = TextFont::load(&self.assets.font_candidates);
        let mut canvas = load_template(&self.assets.template_candidates, &font)?;
        compose(&mut canvas, &font, data, id);
        Ok(canvas)
    }
}

/// Draw every field of `data` onto `canvas` at its fixed position
pub fn compose(canvas: &mut Canvas, font: &TextFont, data: &ReceiptData, id: &ReceiptId) {
    draw_field(canvas, font, Field::ReceiptId, id.as_str());
    draw_field(canvas, font, Field::Date, &data.date);
    draw_field(canvas, font, Field::ReceivedFrom, &data.received_from);
    draw_field(canvas, font, Field::ForField, &data.for_field);

    if let Some(cheque_no) = data.cheque_number() {
        draw_field(canvas, font, Field::ChequeNo, cheque_no);
    }

    let amount = format!("{} {}", CURRENCY_LABEL, data.amount);
    draw_field(canvas, font, Field::Amount, &amount);

    draw_checkbox(canvas, Field::PaymentMethodCash, data.payment_method_cash);
    draw_checkbox(canvas, Field::PaymentMethodCheque, data.payment_method_cheque);
}

fn draw_field(canvas: &mut Canvas, font: &TextFont, field: Field, text: &str) {
    let pos = field.position();
    font.draw_text(canvas, pos.x, pos.y, pos.font_size, BLACK, text);
}

fn draw_checkbox(canvas: &mut Canvas, field: Field, checked: bool) {
    let pos = field.position();
    canvas.draw_checkbox(pos.x, pos.y, checked, CHECKBOX_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::WHITE;
    use crate::template::{TEMPLATE_HEIGHT, TEMPLATE_WIDTH};

    fn sample() -> ReceiptData {
        ReceiptData {
            date: "2024-01-01".into(),
            received_from: "Acme".into(),
            for_field: "Services".into(),
            amount: "100".into(),
            payment_method_cash: true,
            ..Default::default()
        }
    }

    fn dark_in(canvas: &Canvas, x: i32, y: i32, w: i32, h: i32) -> usize {
        (x..x + w)
            .flat_map(|px| (y..y + h).map(move |py| (px, py)))
            .filter(|&(px, py)| canvas.pixel(px, py) == Some(BLACK))
            .count()
    }

    #[test]
    fn test_render_png() {
        let renderer = ReceiptRenderer::new(RenderAssets::builtin());
        let png = renderer
            .render(&sample(), &ReceiptId::from_counter(1))
            .unwrap();
        assert!(png.starts_with(&crate::PNG_MAGIC));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), TEMPLATE_WIDTH);
        assert_eq!(decoded.height(), TEMPLATE_HEIGHT);
    }

    #[test]
    fn test_checkbox_state_reflected() {
        let renderer = ReceiptRenderer::new(RenderAssets::builtin());
        let canvas = renderer
            .render_canvas(&sample(), &ReceiptId::from_counter(1))
            .unwrap();

        let cash = Field::PaymentMethodCash.position();
        let cheque = Field::PaymentMethodCheque.position();
        assert_eq!(canvas.pixel(cash.x + 5, cash.y + 10), Some(BLACK));
        assert_eq!(canvas.pixel(cheque.x + 5, cheque.y + 10), Some(WHITE));
    }

    #[test]
    fn test_cheque_no_only_when_present() {
        let pos = Field::ChequeNo.position();
        let mut without = Canvas::blank(TEMPLATE_WIDTH, TEMPLATE_HEIGHT, WHITE);
        compose(&mut without, &TextFont::Builtin, &sample(), &ReceiptId::from_counter(7));
        assert_eq!(dark_in(&without, pos.x, pos.y, 120, 20), 0);

        let data = ReceiptData {
            cheque_no: Some("CHQ123456".into()),
            payment_method_cheque: true,
            ..sample()
        };
        let mut with = Canvas::blank(TEMPLATE_WIDTH, TEMPLATE_HEIGHT, WHITE);
        compose(&mut with, &TextFont::Builtin, &data, &ReceiptId::from_counter(7));
        assert!(dark_in(&with, pos.x, pos.y, 120, 20) > 0);
    }

    #[test]
    fn test_receipt_id_drawn() {
        let pos = Field::ReceiptId.position();
        let mut c = Canvas::blank(TEMPLATE_WIDTH, TEMPLATE_HEIGHT, WHITE);
        compose(&mut c, &TextFont::Builtin, &sample(), &ReceiptId::from_counter(42));
        assert!(dark_in(&c, pos.x, pos.y, 60, 20) > 0);
    }
}
