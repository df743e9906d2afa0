//! User-facing texts (shown in Telegram).

use std::borrow::Cow;

use avatar_render::AvatarVariant;

use super::palette::Palette;

pub const MSG_GREETING: &str = "Hi! 👋\nI can help you create a unique geometric avatar.\n\n\
Just send me the command:\n/avatar YourText\n\n\
After that I'll offer you a choice of styles and colors. ✨";
pub const MSG_AVATAR_USAGE: &str =
    "Please add some text after the command. For example: /avatar MyCoolName";
pub const MSG_CANCELLED: &str = "Avatar creation cancelled.";
pub const MSG_NO_PREVIOUS_STEP: &str =
    "Oops, I can't find the previous step. Start over: /avatar YourName";
pub const MSG_STYLE_FIRST: &str = "You need to pick a style first. Back to style selection...";
pub const MSG_CUSTOM_COLORS_PROMPT: &str = "OK. Now send me a comma-separated list of colors.\n\n\
Example:\n#ff0000, 0000ff, #aabbcc\n(With or without #, 3 or 6 hex digits)";
pub const MSG_INVALID_COLORS: &str = "🚫 Invalid color format. Make sure the colors are separated \
by commas and are valid HEX codes (for example #ff0000, 00ff00, abc). Please try again.";
pub const MSG_RENDER_FAILED: &str =
    "Something went wrong while generating the avatar. Start over with /avatar";
pub const MSG_PREVIEW_SEND_FAILED: &str =
    "Unfortunately the preview image could not be sent. Start over with /avatar";
pub const MSG_REGENERATE_FAILED: &str =
    "Could not generate new colors. The current preview is unchanged, try again.";
pub const MSG_STYLE_RENDER_FAILED: &str =
    "Could not render this style. Your colors are kept, pick a style again:";
pub const MSG_SVG_SEND_FAILED: &str =
    "😔 Could not send the SVG file. Press \"Get SVG\" again.";
pub const MSG_NO_SVG: &str = "There is no rendered avatar to export yet. Start with /avatar YourName";

// Callback toasts
pub const TOAST_UNEXPECTED: &str = "Unexpected action";
pub const TOAST_OUTDATED: &str = "This message is outdated";
pub const TOAST_REGENERATING: &str = "🎨 Generating new colors...";

/// Names longer than this are shortened in texts and captions (photo captions are capped at 1024).
const MAX_SHOWN_NAME_CHARS: usize = 64;

/// `name` as shown to the user: cut to [`MAX_SHOWN_NAME_CHARS`] with a trailing ellipsis.
fn shown(name: &str) -> Cow<'_, str> {
    match name.char_indices().nth(MAX_SHOWN_NAME_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}…", &name[..cut])),
        None => Cow::Borrowed(name),
    }
}

pub fn choose_style(name: &str) -> String {
    format!("Great! Using the text \"{}\".\nNow pick an avatar style:", shown(name))
}

pub fn back_to_style(name: &str) -> String {
    format!("OK, back to style selection for \"{}\":", shown(name))
}

pub fn choose_colors(variant: AvatarVariant) -> String {
    format!("Style selected: {}.\nNow let's pick the colors:", variant)
}

pub fn change_style(name: &str, palette: &Palette) -> String {
    format!(
        "Changing the style for \"{}\". Pick a new one:\n(Current colors [{}] will be kept)",
        shown(name),
        palette
    )
}

pub fn generating(name: &str, variant: AvatarVariant) -> String {
    format!("⏳ Generating avatar \"{}\" (style: {})...", shown(name), variant)
}

pub fn preview_caption(name: &str, variant: AvatarVariant) -> String {
    format!(
        "Here is the preview for \"{}\" (style: {}).\nWhat next?",
        shown(name),
        variant
    )
}

pub fn regenerated_caption(name: &str, variant: AvatarVariant) -> String {
    format!(
        "Preview for \"{}\" (style: {}). Colors updated! What next?",
        shown(name),
        variant
    )
}

pub fn svg_ready(name: &str) -> String {
    format!("✅ Your SVG file for \"{}\" is ready!", shown(name))
}
