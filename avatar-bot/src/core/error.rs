//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`DialogError`] covers rejected user input.

use thiserror::Error;

/// Top-level error (transport, rendering).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Render error: {0}")]
    Render(#[from] avatar_render::RenderError),
}

/// Errors produced while interpreting user input against the dialog state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DialogError {
    #[error("Invalid colors: {0}")]
    InvalidColors(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
