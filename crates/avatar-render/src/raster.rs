//! Raster converter: SVG markup → PNG bytes via resvg.

use async_trait::async_trait;
use resvg::{tiny_skia, usvg};
use tracing::{debug, instrument};

use crate::error::{RenderError, Result};

/// Converts an SVG document into PNG bytes.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, svg: &str) -> Result<Vec<u8>>;
}

/// [`Rasterizer`] backed by resvg; the CPU work runs on tokio's blocking pool.
#[derive(Debug, Clone, Default)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Rasterizer for ResvgRasterizer {
    #[instrument(skip(self, svg), fields(svg_len = svg.len()))]
    async fn rasterize(&self, svg: &str) -> Result<Vec<u8>> {
        let svg = svg.to_owned();
        let png = tokio::task::spawn_blocking(move || rasterize_svg(&svg))
            .await
            .map_err(|e| RenderError::Raster(format!("rasterize task failed: {}", e)))??;
        debug!(png_len = png.len(), "Rasterized avatar");
        Ok(png)
    }
}

/// Parses `svg` and renders it at its intrinsic size into a PNG.
pub fn rasterize_svg(svg: &str) -> Result<Vec<u8>> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Parse(e.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        RenderError::Raster(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}
