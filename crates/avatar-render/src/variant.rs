//! Avatar style tags.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// One of the fixed avatar drawing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarVariant {
    Marble,
    Beam,
    Pixel,
    Sunset,
    Ring,
    Bauhaus,
}

impl AvatarVariant {
    /// All styles in the order they are offered to users.
    pub const ALL: [AvatarVariant; 6] = [
        AvatarVariant::Marble,
        AvatarVariant::Beam,
        AvatarVariant::Pixel,
        AvatarVariant::Sunset,
        AvatarVariant::Ring,
        AvatarVariant::Bauhaus,
    ];

    /// Stable lowercase tag, used in callback payloads and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            AvatarVariant::Marble => "marble",
            AvatarVariant::Beam => "beam",
            AvatarVariant::Pixel => "pixel",
            AvatarVariant::Sunset => "sunset",
            AvatarVariant::Ring => "ring",
            AvatarVariant::Bauhaus => "bauhaus",
        }
    }

    /// Capitalised tag for button labels ("Marble").
    pub fn label(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for AvatarVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvatarVariant {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvatarVariant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| RenderError::UnknownVariant(s.to_string()))
    }
}
