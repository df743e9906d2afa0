//! Vector renderer: `(name, variant, colors)` → SVG document.

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{RenderError, Result};
use crate::hash::name_number;
use crate::styles;
use crate::variant::AvatarVariant;

/// Produces the SVG markup of an avatar. Implementations must be deterministic for identical inputs.
#[async_trait]
pub trait VectorRenderer: Send + Sync {
    async fn render(
        &self,
        name: &str,
        variant: AvatarVariant,
        colors: &[String],
        size: u32,
        square: bool,
    ) -> Result<String>;
}

/// Built-in renderer: geometry seeded from `name`, colors picked by index from the palette.
#[derive(Debug, Clone, Default)]
pub struct GeometricRenderer;

impl GeometricRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous form of [`VectorRenderer::render`].
    pub fn render_svg(
        &self,
        name: &str,
        variant: AvatarVariant,
        colors: &[String],
        size: u32,
        square: bool,
    ) -> Result<String> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }
        if colors.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
            return Err(RenderError::InvalidColor(bad.clone()));
        }
        Ok(styles::render(variant, name_number(name), colors, size, square))
    }
}

#[async_trait]
impl VectorRenderer for GeometricRenderer {
    #[instrument(skip(self, colors), fields(colors = colors.len()))]
    async fn render(
        &self,
        name: &str,
        variant: AvatarVariant,
        colors: &[String],
        size: u32,
        square: bool,
    ) -> Result<String> {
        let svg = self.render_svg(name, variant, colors, size, square)?;
        debug!(svg_len = svg.len(), "Rendered avatar SVG");
        Ok(svg)
    }
}

/// `#` followed by exactly 3 or 6 hex digits.
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
