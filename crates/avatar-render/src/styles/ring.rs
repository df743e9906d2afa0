//! Ring: concentric half rings around a center disc.

use super::frame;
use crate::hash::pick_color;
use crate::variant::AvatarVariant;

const SIZE: i64 = 90;
const COLORS: i64 = 5;

/// Expands five picked colors into the nine ring layers (outer to inner).
fn ring_colors(seed: i64, colors: &[String]) -> [&str; 9] {
    let s: Vec<&str> = (0..COLORS).map(|i| pick_color(seed + i, colors)).collect();
    [s[0], s[1], s[1], s[2], s[2], s[3], s[3], s[0], s[4]]
}

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let c = ring_colors(seed, colors);
    let body = format!(
        concat!(
            r##"<path d="M0 0h90v45H0z" fill="{c0}"/>"##,
            r##"<path d="M0 45h90v45H0z" fill="{c1}"/>"##,
            r##"<path d="M83 45a38 38 0 00-76 0h76z" fill="{c2}"/>"##,
            r##"<path d="M83 45a38 38 0 01-76 0h76z" fill="{c3}"/>"##,
            r##"<path d="M77 45a32 32 0 10-64 0h64z" fill="{c4}"/>"##,
            r##"<path d="M77 45a32 32 0 11-64 0h64z" fill="{c5}"/>"##,
            r##"<path d="M71 45a26 26 0 00-52 0h52z" fill="{c6}"/>"##,
            r##"<path d="M71 45a26 26 0 01-52 0h52z" fill="{c7}"/>"##,
            r##"<circle cx="45" cy="45" r="23" fill="{c8}"/>"##
        ),
        c0 = c[0],
        c1 = c[1],
        c2 = c[2],
        c3 = c[3],
        c4 = c[4],
        c5 = c[5],
        c6 = c[6],
        c7 = c[7],
        c8 = c[8],
    );
    frame(AvatarVariant::Ring, SIZE, size, square, &body, "")
}
