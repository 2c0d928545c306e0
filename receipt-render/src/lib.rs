//! # receipt-render
//!
//! Fixed-layout receipt compositing.
//!
//! ## Scope
//!
//! This crate handles HOW a receipt image is produced:
//! - Template loading (or a synthesized placeholder when no asset exists)
//! - Font fallback: TrueType candidates, then a built-in bitmap font
//! - Text and checkbox overlay at fixed pixel positions
//! - PNG encoding
//!
//! Receipt numbering and request validation stay in the server crate.
//!
//! ## Example
//!
//! ```ignore
//! use receipt_render::{ReceiptRenderer, RenderAssets};
//! use shared::{ReceiptData, ReceiptId};
//!
//! let renderer = ReceiptRenderer::new(RenderAssets::builtin());
//! let png = renderer.render(&data, &ReceiptId::from_counter(1))?;
//! assert!(png.starts_with(&receipt_render::PNG_MAGIC));
//! ```

mod bitmap_font;
mod canvas;
mod error;
mod font;
mod layout;
mod renderer;
mod template;

// Re-exports
pub use canvas::{Canvas, BLACK, WHITE};
pub use error::{RenderError, RenderResult};
pub use font::TextFont;
pub use layout::{CHECKBOX_SIZE, CURRENCY_LABEL, Field, FieldPosition};
pub use renderer::{ReceiptRenderer, RenderAssets};
pub use template::{TEMPLATE_HEIGHT, TEMPLATE_WIDTH, load_template, synthesize_template};

/// First eight bytes of every PNG file
pub const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
