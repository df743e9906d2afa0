//! Marble: three blurred, overlapping blobs.

use super::frame;
use crate::hash::{num, pick_color, unit};
use crate::variant::AvatarVariant;

const SIZE: i64 = 80;
const ELEMENTS: i64 = 3;

struct Blob<'a> {
    color: &'a str,
    translate_x: i64,
    translate_y: i64,
    scale: f64,
    rotate: i64,
}

fn blobs(seed: i64, colors: &[String]) -> Vec<Blob<'_>> {
    (0..ELEMENTS)
        .map(|i| {
            let n = seed * (i + 1);
            Blob {
                color: pick_color(seed + i, colors),
                translate_x: unit(n, SIZE / 10, Some(1)),
                translate_y: unit(n, SIZE / 10, Some(2)),
                scale: 1.2 + unit(n, SIZE / 20, None) as f64 / 10.0,
                rotate: unit(n, 360, Some(1)),
            }
        })
        .collect()
}

fn transform(blob: &Blob<'_>) -> String {
    format!(
        "translate({} {}) rotate({} {} {}) scale({})",
        blob.translate_x,
        blob.translate_y,
        blob.rotate,
        SIZE / 2,
        SIZE / 2,
        num(blob.scale)
    )
}

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let b = blobs(seed, colors);
    let body = format!(
        concat!(
            r##"<rect width="{s}" height="{s}" fill="{c0}"/>"##,
            r##"<path filter="url(#filter__marble)" d="M32.414 59.35L50.376 70.5H72.5v-71H33.728L26.5 13.381l19.057 27.08L32.414 59.35z" fill="{c1}" transform="{t1}"/>"##,
            r##"<path filter="url(#filter__marble)" style="mix-blend-mode:overlay" d="M22.216 24L0 46.75l14.108 38.129L78 86l-3.081-59.276-22.378 4.005 12.972 20.186-23.35 27.395L22.215 24z" fill="{c2}" transform="{t2}"/>"##
        ),
        s = SIZE,
        c0 = b[0].color,
        c1 = b[1].color,
        t1 = transform(&b[1]),
        c2 = b[2].color,
        t2 = transform(&b[2]),
    );
    let defs = format!(
        concat!(
            r##"<defs><filter id="filter__marble" x="0" y="0" width="{s}" height="{s}" filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">"##,
            r##"<feFlood flood-opacity="0" result="BackgroundImageFix"/>"##,
            r##"<feBlend in="SourceGraphic" in2="BackgroundImageFix" result="shape"/>"##,
            r##"<feGaussianBlur stdDeviation="7" result="effect1_foregroundBlur"/>"##,
            r##"</filter></defs>"##
        ),
        s = SIZE,
    );
    frame(AvatarVariant::Marble, SIZE, size, square, &body, &defs)
}
