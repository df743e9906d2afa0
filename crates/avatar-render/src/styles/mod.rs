//! Per-style SVG bodies. Each style works in its own unit square and is scaled to the output size.

mod bauhaus;
mod beam;
mod marble;
mod pixel;
mod ring;
mod sunset;

use crate::variant::AvatarVariant;

/// Builds the full SVG document for `variant`. `colors` must be non-empty and already validated.
pub(crate) fn render(
    variant: AvatarVariant,
    seed: i64,
    colors: &[String],
    size: u32,
    square: bool,
) -> String {
    match variant {
        AvatarVariant::Marble => marble::render(seed, colors, size, square),
        AvatarVariant::Beam => beam::render(seed, colors, size, square),
        AvatarVariant::Pixel => pixel::render(seed, colors, size, square),
        AvatarVariant::Sunset => sunset::render(seed, colors, size, square),
        AvatarVariant::Ring => ring::render(seed, colors, size, square),
        AvatarVariant::Bauhaus => bauhaus::render(seed, colors, size, square),
    }
}

/// Wraps a style body in the common `<svg>` root and clipping mask.
/// The mask is a circle unless `square`.
pub(crate) fn frame(
    variant: AvatarVariant,
    view: i64,
    size: u32,
    square: bool,
    body: &str,
    defs: &str,
) -> String {
    let rx = if square {
        String::new()
    } else {
        format!(r#" rx="{}""#, view * 2)
    };
    let mask_id = format!("mask__{}", variant.as_str());
    format!(
        concat!(
            r##"<svg viewBox="0 0 {view} {view}" fill="none" role="img" xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}">"##,
            r##"<mask id="{mask_id}" maskUnits="userSpaceOnUse" x="0" y="0" width="{view}" height="{view}">"##,
            r##"<rect width="{view}" height="{view}"{rx} fill="#FFFFFF"/>"##,
            r##"</mask>"##,
            r##"<g mask="url(#{mask_id})">{body}</g>"##,
            r##"{defs}"##,
            r##"</svg>"##
        ),
        view = view,
        size = size,
        mask_id = mask_id,
        rx = rx,
        body = body,
        defs = defs,
    )
}
