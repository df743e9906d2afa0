//! Name-derived numbers driving the geometry of each style.

/// Sum of the leading UTF-16 code unit of every character in `name`.
pub(crate) fn name_number(name: &str) -> i64 {
    name.chars()
        .map(|c| {
            let mut buf = [0u16; 2];
            i64::from(c.encode_utf16(&mut buf)[0])
        })
        .sum()
}

/// Decimal digit of `number` at `position` (0 = units).
pub(crate) fn digit(number: i64, position: u32) -> i64 {
    (number / 10_i64.pow(position)) % 10
}

/// True when the digit at `position` is even.
pub(crate) fn boolean(number: i64, position: u32) -> bool {
    digit(number, position) % 2 == 0
}

/// `number % range`, negated when `index` is given and the digit at `index` is even.
pub(crate) fn unit(number: i64, range: i64, index: Option<u32>) -> i64 {
    let value = number % range;
    match index {
        Some(i) if digit(number, i) % 2 == 0 => -value,
        _ => value,
    }
}

/// Palette entry chosen by `number` modulo palette length. `colors` must be non-empty.
pub(crate) fn pick_color(number: i64, colors: &[String]) -> &str {
    let len = colors.len() as i64;
    &colors[number.rem_euclid(len) as usize]
}

/// Black or white, whichever reads better on `hex` (YIQ brightness).
pub(crate) fn contrast(hex: &str) -> &'static str {
    let digits = hex.trim_start_matches('#');
    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|s| u32::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
    let yiq = (r * 299 + g * 587 + b * 114) / 1000;
    if yiq >= 128 {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

/// Formats a coordinate without trailing zeros (`4`, `3.5`, `1.3`).
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}
