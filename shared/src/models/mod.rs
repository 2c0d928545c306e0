//! Data models
//!
//! Shared between the renderer and the HTTP server.

pub mod receipt;

// Re-exports
pub use receipt::*;
