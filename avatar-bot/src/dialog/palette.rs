//! Color palettes: random draw, built-in default, and user-supplied HEX lists.

use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::core::DialogError;

/// Palette used by the "default colors" button.
pub const DEFAULT_COLORS: [&str; 5] = ["#92A1C6", "#146A7C", "#F0AB3D", "#C271B4", "#C20D90"];

/// Largest 24-bit RGB value.
const MAX_RGB: u32 = 0xFF_FFFF;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

/// `#rrggbb`, zero-padded.
fn hex_color(rgb: u32) -> String {
    format!("#{:06x}", rgb)
}

/// Ordered list of `#`-prefixed HEX colors. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<String>);

impl Palette {
    /// `count` independent 24-bit colors as zero-padded 6-digit hex.
    pub fn random(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let colors = (0..count.max(1))
            .map(|_| hex_color(rng.gen_range(0..=MAX_RGB)))
            .collect();
        Self(colors)
    }

    pub fn default_palette() -> Self {
        Self(DEFAULT_COLORS.iter().map(|c| c.to_string()).collect())
    }

    /// Parses `"#ff0000, 00ff00, abc"`: split on commas, trim, drop empty pieces, add a missing
    /// `#`. Every piece must be 3 or 6 hex digits, otherwise the whole input is rejected.
    pub fn parse_custom(text: &str) -> Result<Self, DialogError> {
        let colors: Vec<String> = text
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| {
                if c.starts_with('#') {
                    c.to_string()
                } else {
                    format!("#{}", c)
                }
            })
            .collect();

        if colors.is_empty() {
            return Err(DialogError::InvalidColors(text.to_string()));
        }
        if let Some(bad) = colors.iter().find(|c| !HEX_COLOR.is_match(c)) {
            return Err(DialogError::InvalidColors(bad.clone()));
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}
