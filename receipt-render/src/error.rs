//! Error types for the renderer

use std::path::PathBuf;
use thiserror::Error;

/// Renderer error types
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template file exists but could not be read
    #[error("Template read failed ({path}): {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template file exists but is not a decodable image
    #[error("Template decode failed ({path}): {source}")]
    TemplateDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Composited image could not be encoded as PNG
    #[error("PNG encode failed: {0}")]
    Encode(#[source] image::ImageError),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
