//! # avatar-render
//!
//! Renders name-seeded geometric avatars as SVG ([`VectorRenderer`], [`GeometricRenderer`])
//! and converts SVG documents to PNG ([`Rasterizer`], [`ResvgRasterizer`]).
//!
//! Both collaborators are traits so the bot can swap them for mocks in tests.

mod error;
mod hash;
mod raster;
mod renderer;
mod styles;
mod variant;

pub use error::{RenderError, Result};
pub use raster::{rasterize_svg, Rasterizer, ResvgRasterizer};
pub use renderer::{GeometricRenderer, VectorRenderer};
pub use variant::AvatarVariant;
