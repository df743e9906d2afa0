//! Beam: a face drawn on a rotated wrapper shape.

use super::frame;
use crate::hash::{boolean, contrast, num, pick_color, unit};
use crate::variant::AvatarVariant;

const SIZE: i64 = 36;

struct Beam<'a> {
    wrapper_color: &'a str,
    face_color: &'static str,
    background_color: &'a str,
    wrapper_translate_x: i64,
    wrapper_translate_y: i64,
    wrapper_rotate: i64,
    wrapper_scale: f64,
    is_mouth_open: bool,
    is_circle: bool,
    eye_spread: i64,
    mouth_spread: i64,
    face_rotate: i64,
    face_translate_x: f64,
    face_translate_y: f64,
}

fn beam(seed: i64, colors: &[String]) -> Beam<'_> {
    let wrapper_color = pick_color(seed, colors);
    let pre_x = unit(seed, 10, Some(1));
    let wrapper_translate_x = if pre_x < 5 { pre_x + SIZE / 9 } else { pre_x };
    let pre_y = unit(seed, 10, Some(2));
    let wrapper_translate_y = if pre_y < 5 { pre_y + SIZE / 9 } else { pre_y };
    let face_translate_x = if wrapper_translate_x > SIZE / 6 {
        wrapper_translate_x as f64 / 2.0
    } else {
        unit(seed, 8, Some(1)) as f64
    };
    let face_translate_y = if wrapper_translate_y > SIZE / 6 {
        wrapper_translate_y as f64 / 2.0
    } else {
        unit(seed, 7, Some(2)) as f64
    };
    Beam {
        wrapper_color,
        face_color: contrast(wrapper_color),
        background_color: pick_color(seed + 13, colors),
        wrapper_translate_x,
        wrapper_translate_y,
        wrapper_rotate: unit(seed, 360, None),
        wrapper_scale: 1.0 + unit(seed, SIZE / 12, None) as f64 / 10.0,
        is_mouth_open: boolean(seed, 2),
        is_circle: boolean(seed, 1),
        eye_spread: unit(seed, 5, None),
        mouth_spread: unit(seed, 3, None),
        face_rotate: unit(seed, 10, Some(3)),
        face_translate_x,
        face_translate_y,
    }
}

pub(crate) fn render(seed: i64, colors: &[String], size: u32, square: bool) -> String {
    let d = beam(seed, colors);
    let half = SIZE / 2;
    let wrapper_rx = if d.is_circle { SIZE } else { SIZE / 6 };
    let mouth = if d.is_mouth_open {
        format!(
            r##"<path d="M15 {y}c2 1 4 1 6 0" stroke="{c}" fill="none" stroke-linecap="round"/>"##,
            y = 19 + d.mouth_spread,
            c = d.face_color,
        )
    } else {
        format!(
            r##"<path d="M13,{y} a1,0.75 0 0,0 10,0" fill="{c}"/>"##,
            y = 19 + d.mouth_spread,
            c = d.face_color,
        )
    };
    let body = format!(
        concat!(
            r##"<rect width="{s}" height="{s}" fill="{bg}"/>"##,
            r##"<rect x="0" y="0" width="{s}" height="{s}" transform="translate({wx} {wy}) rotate({wr} {h} {h}) scale({ws})" fill="{wc}" rx="{wrx}"/>"##,
            r##"<g transform="translate({fx} {fy}) rotate({fr} {h} {h})">"##,
            r##"{mouth}"##,
            r##"<rect x="{le}" y="14" width="1.5" height="2" rx="1" stroke="none" fill="{fc}"/>"##,
            r##"<rect x="{re}" y="14" width="1.5" height="2" rx="1" stroke="none" fill="{fc}"/>"##,
            r##"</g>"##
        ),
        s = SIZE,
        h = half,
        bg = d.background_color,
        wx = d.wrapper_translate_x,
        wy = d.wrapper_translate_y,
        wr = d.wrapper_rotate,
        ws = num(d.wrapper_scale),
        wc = d.wrapper_color,
        wrx = wrapper_rx,
        fx = num(d.face_translate_x),
        fy = num(d.face_translate_y),
        fr = d.face_rotate,
        mouth = mouth,
        le = 14 - d.eye_spread,
        re = 20 + d.eye_spread,
        fc = d.face_color,
    );
    frame(AvatarVariant::Beam, SIZE, size, square, &body, "")
}
