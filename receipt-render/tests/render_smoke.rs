use std::path::PathBuf;

use receipt_render::{
    BLACK, Canvas, Field, PNG_MAGIC, ReceiptRenderer, RenderAssets, RenderError, TextFont, WHITE,
};
use shared::{ReceiptData, ReceiptId};

fn fixture_font() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf")
}

fn white_template(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("template.png");
    image::RgbaImage::from_pixel(600, 450, WHITE)
        .save(&path)
        .unwrap();
    path
}

/// (dark, partially covered) pixel counts in a box
fn ink_in(canvas: &Canvas, x: i32, y: i32, w: i32, h: i32) -> (usize, usize) {
    let pixels: Vec<_> = (x..x + w)
        .flat_map(|px| (y..y + h).map(move |py| (px, py)))
        .filter_map(|(px, py)| canvas.pixel(px, py))
        .collect();
    let dark = pixels.iter().filter(|p| p.0[0] < 128).count();
    let partial = pixels.iter().filter(|p| p.0[0] > 0 && p.0[0] < 255).count();
    (dark, partial)
}

fn receipt(cash: bool, cheque: bool) -> ReceiptData {
    ReceiptData {
        receipt_id: None,
        date: "2024-01-15".to_string(),
        received_from: "John Smith".to_string(),
        for_field: "Web Development Services".to_string(),
        cheque_no: cheque.then(|| "CHQ123456".to_string()),
        amount: "5000.00".to_string(),
        payment_method_cash: cash,
        payment_method_cheque: cheque,
    }
}

#[test]
fn renders_every_payment_combination() {
    let renderer = ReceiptRenderer::new(RenderAssets::builtin());
    for (cash, cheque) in [(true, false), (false, true), (true, true)] {
        let png = renderer
            .render(&receipt(cash, cheque), &ReceiptId::from_counter(10))
            .expect("render failed");
        assert!(!png.is_empty());
        assert_eq!(&png[..8], &PNG_MAGIC, "cash={cash} cheque={cheque}");
    }
}

#[test]
fn uses_template_asset_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.png");
    image::RgbaImage::from_pixel(800, 500, WHITE)
        .save(&template)
        .unwrap();

    let assets = RenderAssets::new(
        vec![dir.path().join("missing.png"), template],
        vec![dir.path().join("missing.ttf")],
    );
    let renderer = ReceiptRenderer::new(assets);
    let canvas = renderer
        .render_canvas(&receipt(false, true), &ReceiptId::from_raw("0042"))
        .unwrap();

    assert_eq!((canvas.width(), canvas.height()), (800, 500));

    // Only the cheque box carries a checkmark
    let cash = Field::PaymentMethodCash.position();
    let cheque = Field::PaymentMethodCheque.position();
    assert_eq!(canvas.pixel(cash.x, cash.y), Some(BLACK));
    assert_eq!(canvas.pixel(cash.x + 5, cash.y + 10), Some(WHITE));
    assert_eq!(canvas.pixel(cheque.x + 5, cheque.y + 10), Some(BLACK));
}

#[test]
fn undecodable_template_fails() {
    let dir = tempfile::tempdir().unwrap();
    let template = dir.path().join("template.png");
    std::fs::write(&template, [0u8; 16]).unwrap();

    let renderer = ReceiptRenderer::new(RenderAssets::new(vec![template], vec![]));
    let err = renderer
        .render(&receipt(true, false), &ReceiptId::from_counter(1))
        .unwrap_err();
    assert!(matches!(err, RenderError::TemplateDecode { .. }));
}

#[test]
fn truetype_font_draws_antialiased_text() {
    let font_path = fixture_font();
    assert!(!TextFont::load(&[font_path.clone()]).is_builtin());

    let dir = tempfile::tempdir().unwrap();
    let renderer = ReceiptRenderer::new(RenderAssets::new(
        vec![white_template(&dir)],
        vec![dir.path().join("missing.ttf"), font_path],
    ));
    let canvas = renderer
        .render_canvas(&receipt(true, false), &ReceiptId::from_counter(42))
        .unwrap();

    let pos = Field::ReceiptId.position();
    let (dark, partial) = ink_in(&canvas, pos.x, pos.y, 60, 20);
    assert!(dark > 0);
    // Coverage blending leaves grey edge pixels; the bitmap font never does
    assert!(partial > 0);

    // Text hangs below the top edge, nothing is drawn above it
    let (above, _) = ink_in(&canvas, pos.x, pos.y - 10, 60, 10);
    assert_eq!(above, 0);
}

#[test]
fn builtin_font_draws_solid_text() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = ReceiptRenderer::new(RenderAssets::new(vec![white_template(&dir)], vec![]));
    let canvas = renderer
        .render_canvas(&receipt(true, false), &ReceiptId::from_counter(42))
        .unwrap();

    let pos = Field::ReceiptId.position();
    let (dark, partial) = ink_in(&canvas, pos.x, pos.y, 60, 20);
    assert!(dark > 0);
    assert_eq!(partial, 0);
}
