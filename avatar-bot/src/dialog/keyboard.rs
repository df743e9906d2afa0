//! Inline keyboards, one builder per screen.

use avatar_render::AvatarVariant;

use super::action::{CallbackAction, ColorMethod};
use crate::core::{InlineButton, InlineKeyboard};

fn button(text: &str, action: CallbackAction) -> InlineButton {
    InlineButton::new(text, action.to_string())
}

fn cancel() -> InlineButton {
    button("❌ Cancel", CallbackAction::Cancel)
}

/// Styles two per row, then Cancel.
pub fn style_keyboard() -> InlineKeyboard {
    let mut rows: Vec<Vec<InlineButton>> = AvatarVariant::ALL
        .chunks(2)
        .map(|pair| {
            pair.iter()
                .map(|v| button(&v.label(), CallbackAction::SelectType(*v)))
                .collect()
        })
        .collect();
    rows.push(vec![cancel()]);
    InlineKeyboard::new(rows)
}

pub fn color_method_keyboard() -> InlineKeyboard {
    InlineKeyboard::default()
        .row(vec![button(
            "🎨 Random palette",
            CallbackAction::SelectColor(ColorMethod::Random),
        )])
        .row(vec![button(
            "🖌️ Default colors",
            CallbackAction::SelectColor(ColorMethod::Default),
        )])
        .row(vec![button(
            "⌨️ Enter my own colors",
            CallbackAction::SelectColor(ColorMethod::Custom),
        )])
        .row(vec![
            button("⬅️ Back (to style)", CallbackAction::BackToTypeSelection),
            cancel(),
        ])
}

pub fn custom_colors_keyboard() -> InlineKeyboard {
    InlineKeyboard::default()
        .row(vec![button(
            "⬅️ Back (to palette choice)",
            CallbackAction::BackToColorOptions,
        )])
        .row(vec![cancel()])
}

pub fn preview_keyboard() -> InlineKeyboard {
    InlineKeyboard::default()
        .row(vec![
            button("🎨 New colors", CallbackAction::RegenerateColors),
            button("🔄 Change style", CallbackAction::ChangeStyle),
        ])
        .row(vec![
            button("💾 Get SVG", CallbackAction::GetCurrentSvg),
            button("🎨 Other colors", CallbackAction::BackToColorOptions),
        ])
        .row(vec![cancel()])
}
