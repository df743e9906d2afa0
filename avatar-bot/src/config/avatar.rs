//! Avatar rendering config. Loaded from env: AVATAR_SIZE, AVATAR_PALETTE_SIZE.

use anyhow::Result;
use std::env;
use std::ops::RangeInclusive;

use crate::dialog::{DEFAULT_AVATAR_SIZE, DEFAULT_PALETTE_SIZE};

const SIZE_RANGE: RangeInclusive<u32> = 16..=4096;
const PALETTE_RANGE: RangeInclusive<usize> = 1..=16;

#[derive(Debug, Clone)]
pub struct AvatarConfig {
    /// Output width/height in px.
    pub size: u32,
    /// Number of colors drawn for random palettes.
    pub palette_size: usize,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_AVATAR_SIZE,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

impl AvatarConfig {
    /// Unparsable values fall back to defaults; ranges are checked in `validate`.
    pub fn from_env() -> Result<Self> {
        let size = env::var("AVATAR_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_AVATAR_SIZE);
        let palette_size = env::var("AVATAR_PALETTE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PALETTE_SIZE);
        Ok(Self { size, palette_size })
    }

    pub fn validate(&self) -> Result<()> {
        if !SIZE_RANGE.contains(&self.size) {
            anyhow::bail!(
                "AVATAR_SIZE must be within {}..={}, got {}",
                SIZE_RANGE.start(),
                SIZE_RANGE.end(),
                self.size
            );
        }
        if !PALETTE_RANGE.contains(&self.palette_size) {
            anyhow::bail!(
                "AVATAR_PALETTE_SIZE must be within {}..={}, got {}",
                PALETTE_RANGE.start(),
                PALETTE_RANGE.end(),
                self.palette_size
            );
        }
        Ok(())
    }
}
