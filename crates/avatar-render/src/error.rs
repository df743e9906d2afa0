//! Error types for avatar rendering and rasterization.

use thiserror::Error;

/// Failure while building the SVG document or converting it to PNG.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Palette is empty")]
    EmptyPalette,

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid output size: {0}")]
    InvalidSize(u32),

    #[error("Unknown avatar variant: {0}")]
    UnknownVariant(String),

    #[error("SVG parse error: {0}")]
    Parse(String),

    #[error("Rasterization error: {0}")]
    Raster(String),

    #[error("PNG encode error: {0}")]
    Encode(String),
}

/// Result type for rendering; uses [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
