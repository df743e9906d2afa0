//! Pixel: an 8x8 grid of palette squares.

use super::frame;
use crate::hash::pick_color;
use crate::variant::AvatarVariant;

const SIZE: i64 = 80;
const GRID: i64 = 8;
const CELL: i64 = SIZE / GRID;

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let body: String = (0..GRID * GRID)
        .map(|i| {
            let color = pick_color(seed % (i + 1), colors);
            format!(
                r##"<rect x="{x}" y="{y}" width="{c}" height="{c}" fill="{color}"/>"##,
                x = (i % GRID) * CELL,
                y = (i / GRID) * CELL,
                c = CELL,
                color = color,
            )
        })
        .collect();
    frame(AvatarVariant::Pixel, SIZE, size, square, &body, "")
}
