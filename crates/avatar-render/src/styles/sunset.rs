//! Sunset: two stacked vertical gradients.

use super::frame;
use crate::hash::pick_color;
use crate::variant::AvatarVariant;

const SIZE: i64 = 80;
const ELEMENTS: i64 = 4;

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let c: Vec<&str> = (0..ELEMENTS).map(|i| pick_color(seed + i, colors)).collect();
    let half = SIZE / 2;
    let body = format!(
        concat!(
            r##"<path fill="url(#gradient__sunset_0)" d="M0 0h{s}v{h}H0z"/>"##,
            r##"<path fill="url(#gradient__sunset_1)" d="M0 {h}h{s}v{h}H0z"/>"##
        ),
        s = SIZE,
        h = half,
    );
    let defs = format!(
        concat!(
            r##"<defs>"##,
            r##"<linearGradient id="gradient__sunset_0" x1="{h}" y1="0" x2="{h}" y2="{h}" gradientUnits="userSpaceOnUse">"##,
            r##"<stop stop-color="{c0}"/><stop offset="1" stop-color="{c1}"/>"##,
            r##"</linearGradient>"##,
            r##"<linearGradient id="gradient__sunset_1" x1="{h}" y1="{h}" x2="{h}" y2="{s}" gradientUnits="userSpaceOnUse">"##,
            r##"<stop stop-color="{c2}"/><stop offset="1" stop-color="{c3}"/>"##,
            r##"</linearGradient>"##,
            r##"</defs>"##
        ),
        s = SIZE,
        h = half,
        c0 = c[0],
        c1 = c[1],
        c2 = c[2],
        c3 = c[3],
    );
    frame(AvatarVariant::Sunset, SIZE, size, square, &body, &defs)
}
