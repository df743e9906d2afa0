//! Per-chat dialog session and its state machine.
//!
//! Each [`DialogState`] variant carries exactly the fields that are valid in that state, so a
//! preview always has its message id and its rendered SVG always matches its palette and style.

use std::fmt;

use avatar_render::AvatarVariant;

use super::palette::Palette;

/// A successful render: the `(variant, palette)` pair and the SVG produced from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAvatar {
    pub variant: AvatarVariant,
    pub palette: Palette,
    pub svg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    /// Waiting for the first style button.
    TypeSelection,
    /// Style chosen; waiting for random / default / custom.
    ColorMethodSelection { variant: AvatarVariant },
    /// Waiting for a comma-separated HEX list as free text.
    AwaitingCustomColors { variant: AvatarVariant },
    /// Preview photo is on screen.
    Preview {
        render: RenderedAvatar,
        preview_message_id: String,
    },
    /// Preview was removed to pick another style; `previous` keeps the palette.
    SelectingNewStyle { previous: RenderedAvatar },
}

/// Tag of a [`DialogState`], for logs and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    TypeSelection,
    ColorMethodSelection,
    AwaitingCustomColors,
    Preview,
    SelectingNewStyle,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::TypeSelection => "type_selection",
            Step::ColorMethodSelection => "color_method_selection",
            Step::AwaitingCustomColors => "awaiting_custom_colors",
            Step::Preview => "preview",
            Step::SelectingNewStyle => "selecting_new_style",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub state: DialogState,
}

impl Session {
    /// A fresh session right after `/avatar <name>`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DialogState::TypeSelection,
        }
    }

    pub fn step(&self) -> Step {
        match self.state {
            DialogState::TypeSelection => Step::TypeSelection,
            DialogState::ColorMethodSelection { .. } => Step::ColorMethodSelection,
            DialogState::AwaitingCustomColors { .. } => Step::AwaitingCustomColors,
            DialogState::Preview { .. } => Step::Preview,
            DialogState::SelectingNewStyle { .. } => Step::SelectingNewStyle,
        }
    }

    /// Currently chosen style, if any.
    pub fn variant(&self) -> Option<AvatarVariant> {
        match &self.state {
            DialogState::TypeSelection => None,
            DialogState::ColorMethodSelection { variant }
            | DialogState::AwaitingCustomColors { variant } => Some(*variant),
            DialogState::Preview { render, .. } => Some(render.variant),
            DialogState::SelectingNewStyle { previous } => Some(previous.variant),
        }
    }

    /// Palette of the last successful render, if any.
    pub fn palette(&self) -> Option<&Palette> {
        self.render().map(|r| &r.palette)
    }

    /// Last successful render, kept in preview and while picking a new style.
    pub fn render(&self) -> Option<&RenderedAvatar> {
        match &self.state {
            DialogState::Preview { render, .. } => Some(render),
            DialogState::SelectingNewStyle { previous } => Some(previous),
            _ => None,
        }
    }

    pub fn preview_message_id(&self) -> Option<&str> {
        match &self.state {
            DialogState::Preview {
                preview_message_id, ..
            } => Some(preview_message_id),
            _ => None,
        }
    }
}
