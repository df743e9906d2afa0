//! Bauhaus: a background, a bar or square, a circle and a line.

use super::frame;
use crate::hash::{boolean, pick_color, unit};
use crate::variant::AvatarVariant;

const SIZE: i64 = 80;
const ELEMENTS: i64 = 4;

struct Shape<'a> {
    color: &'a str,
    translate_x: i64,
    translate_y: i64,
    rotate: i64,
}

fn shapes(seed: i64, colors: &[String]) -> Vec<Shape<'_>> {
    (0..ELEMENTS)
        .map(|i| {
            let n = seed * (i + 1);
            let range = SIZE / 2 - (i + 17);
            Shape {
                color: pick_color(seed + i, colors),
                translate_x: unit(n, range, Some(1)),
                translate_y: unit(n, range, Some(2)),
                rotate: unit(n, 360, None),
            }
        })
        .collect()
}

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let s = shapes(seed, colors);
    let is_square = boolean(seed, 2);
    let half = SIZE / 2;
    let body = format!(
        concat!(
            r##"<rect width="{size}" height="{size}" fill="{c0}"/>"##,
            r##"<rect x="{rx}" y="{ry}" width="{size}" height="{rh}" fill="{c1}" transform="translate({x1} {y1}) rotate({r1} {h} {h})"/>"##,
            r##"<circle cx="{h}" cy="{h}" fill="{c2}" r="{cr}" transform="translate({x2} {y2})"/>"##,
            r##"<line x1="0" y1="{h}" x2="{size}" y2="{h}" stroke-width="2" stroke="{c3}" transform="translate({x3} {y3}) rotate({r3} {h} {h})"/>"##
        ),
        size = SIZE,
        h = half,
        c0 = s[0].color,
        rx = (SIZE - 60) / 2,
        ry = (SIZE - 20) / 2,
        rh = if is_square { SIZE } else { SIZE / 8 },
        c1 = s[1].color,
        x1 = s[1].translate_x,
        y1 = s[1].translate_y,
        r1 = s[1].rotate,
        c2 = s[2].color,
        cr = SIZE / 5,
        x2 = s[2].translate_x,
        y2 = s[2].translate_y,
        c3 = s[3].color,
        x3 = s[3].translate_x,
        y3 = s[3].translate_y,
        r3 = s[3].rotate,
    );
    frame(AvatarVariant::Bauhaus, SIZE, size, square, &body, "")
}
