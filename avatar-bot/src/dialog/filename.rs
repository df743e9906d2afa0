//! File name for the exported SVG.

use avatar_render::AvatarVariant;

const MAX_STEM_UNITS: usize = 30;

pub const SVG_MIME: &str = "image/svg+xml";

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// `<sanitized name>_<variant>.svg`. Characters other than ASCII letters, digits and Russian
/// letters become `_` (one per UTF-16 unit); the stem is cut to 30 units.
pub fn export_file_name(name: &str, variant: AvatarVariant) -> String {
    let mut stem = String::new();
    let mut units = 0;
    for c in name.chars() {
        if is_allowed(c) {
            if units == MAX_STEM_UNITS {
                break;
            }
            stem.push(c);
            units += 1;
        } else {
            for _ in 0..c.len_utf16() {
                if units == MAX_STEM_UNITS {
                    break;
                }
                stem.push('_');
                units += 1;
            }
        }
        if units == MAX_STEM_UNITS {
            break;
        }
    }
    format!("{}_{}.svg", stem, variant.as_str())
}
