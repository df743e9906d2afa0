//! Typed callback payloads carried by inline buttons.

use std::fmt;
use std::str::FromStr;

use avatar_render::AvatarVariant;

const SELECT_TYPE_PREFIX: &str = "select_type_";

/// How the user wants the palette chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMethod {
    Random,
    Default,
    Custom,
}

impl ColorMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMethod::Random => "random",
            ColorMethod::Default => "default",
            ColorMethod::Custom => "custom",
        }
    }
}

/// Every button payload the bot emits. `to_string()` is the wire form, `parse` the inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    SelectType(AvatarVariant),
    SelectColor(ColorMethod),
    RegenerateColors,
    ChangeStyle,
    GetCurrentSvg,
    BackToTypeSelection,
    BackToColorOptions,
    Cancel,
}

impl CallbackAction {
    /// Returns `None` for payloads this bot never produced.
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(variant) = data.strip_prefix(SELECT_TYPE_PREFIX) {
            return AvatarVariant::from_str(variant)
                .ok()
                .map(CallbackAction::SelectType);
        }
        let action = match data {
            "select_color_random" => CallbackAction::SelectColor(ColorMethod::Random),
            "select_color_default" => CallbackAction::SelectColor(ColorMethod::Default),
            "select_color_custom" => CallbackAction::SelectColor(ColorMethod::Custom),
            "regenerate_colors" => CallbackAction::RegenerateColors,
            "change_style" => CallbackAction::ChangeStyle,
            "get_current_svg" => CallbackAction::GetCurrentSvg,
            "back_to_type_selection" => CallbackAction::BackToTypeSelection,
            "back_to_color_options" => CallbackAction::BackToColorOptions,
            "cancel_creation" => CallbackAction::Cancel,
            _ => return None,
        };
        Some(action)
    }
}

impl fmt::Display for CallbackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackAction::SelectType(v) => write!(f, "{}{}", SELECT_TYPE_PREFIX, v.as_str()),
            CallbackAction::SelectColor(m) => write!(f, "select_color_{}", m.as_str()),
            CallbackAction::RegenerateColors => f.write_str("regenerate_colors"),
            CallbackAction::ChangeStyle => f.write_str("change_style"),
            CallbackAction::GetCurrentSvg => f.write_str("get_current_svg"),
            CallbackAction::BackToTypeSelection => f.write_str("back_to_type_selection"),
            CallbackAction::BackToColorOptions => f.write_str("back_to_color_options"),
            CallbackAction::Cancel => f.write_str("cancel_creation"),
        }
    }
}
