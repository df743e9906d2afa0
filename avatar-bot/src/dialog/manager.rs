//! Dialog session manager: turns commands, button presses and free text into session
//! transitions and transport calls.
//!
//! **Flow:** `/avatar <name>` → style buttons → color method buttons → (custom text) → render →
//! preview photo with follow-up buttons. Regenerate / change style loop back into rendering;
//! cancel and a successful export end the session.
//!
//! Cosmetic transport calls (stripping buttons, deleting status messages) are best-effort and
//! only logged on failure. Failures that would leave the user without feedback are reported.

use std::sync::Arc;

use avatar_render::{AvatarVariant, Rasterizer, VectorRenderer};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use super::action::{CallbackAction, ColorMethod};
use super::command::{parse_command, Command};
use super::filename::{export_file_name, SVG_MIME};
use super::keyboard::{
    color_method_keyboard, custom_colors_keyboard, preview_keyboard, style_keyboard,
};
use super::messages::{self, *};
use super::palette::Palette;
use super::session::{DialogState, RenderedAvatar, Session};
use super::store::SessionStore;
use crate::core::{
    Bot, CallbackQuery, Chat, Document, Event, InlineKeyboard, Message, Result,
};

pub const DEFAULT_AVATAR_SIZE: u32 = 800;
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Owns the session store and drives every dialog transition.
/// Events for one chat must be fed one at a time (see `ChatQueues`).
pub struct DialogManager {
    bot: Arc<dyn Bot>,
    renderer: Arc<dyn VectorRenderer>,
    rasterizer: Arc<dyn Rasterizer>,
    sessions: Arc<SessionStore>,
    bot_username: Arc<RwLock<Option<String>>>,
    avatar_size: u32,
    palette_size: usize,
}

impl DialogManager {
    pub fn new(
        bot: Arc<dyn Bot>,
        renderer: Arc<dyn VectorRenderer>,
        rasterizer: Arc<dyn Rasterizer>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            bot,
            renderer,
            rasterizer,
            sessions,
            bot_username: Arc::new(RwLock::new(None)),
            avatar_size: DEFAULT_AVATAR_SIZE,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }

    /// Shares the username cache filled by the runner after `get_me`.
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    pub fn with_avatar_size(mut self, size: u32) -> Self {
        self.avatar_size = size;
        self
    }

    pub fn with_palette_size(mut self, count: usize) -> Self {
        self.palette_size = count;
        self
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Entry point for one event.
    pub async fn handle_event(&self, event: &Event) -> Result<()> {
        match event {
            Event::Message(message) => self.handle_message(message).await,
            Event::Callback(query) => self.handle_callback(query).await,
        }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    pub async fn handle_message(&self, message: &Message) -> Result<()> {
        let text = message.content.trim();
        if text.is_empty() {
            return Ok(());
        }
        if message.is_command() {
            let username = self.bot_username.read().await.clone();
            return match parse_command(text, username.as_deref()) {
                Some(command) => self.handle_command(&message.chat, command).await,
                None => {
                    debug!(text = %text, "Ignoring unknown command");
                    Ok(())
                }
            };
        }
        self.handle_text(&message.chat, text).await
    }

    async fn handle_command(&self, chat: &Chat, command: Command) -> Result<()> {
        info!(chat_id = chat.id, command = ?command, "Command received");
        match command {
            Command::Start => {
                if self.sessions.remove(chat.id).is_some() {
                    info!(chat_id = chat.id, "Session reset by /start");
                }
                self.bot.send_message(chat, MSG_GREETING).await
            }
            Command::Help => self.bot.send_message(chat, MSG_GREETING).await,
            Command::Avatar(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return self.bot.send_message(chat, MSG_AVATAR_USAGE).await;
                }
                self.sessions.insert(chat.id, Session::new(name));
                info!(chat_id = chat.id, name = %name, "Session started");
                self.bot
                    .send_message_with_keyboard(chat, &messages::choose_style(name), &style_keyboard())
                    .await?;
                Ok(())
            }
        }
    }

    /// Free text only matters while waiting for custom colors.
    async fn handle_text(&self, chat: &Chat, text: &str) -> Result<()> {
        match self.sessions.get(chat.id) {
            Some(Session {
                name,
                state: DialogState::AwaitingCustomColors { variant },
            }) => match Palette::parse_custom(text) {
                Ok(palette) => {
                    info!(chat_id = chat.id, colors = %palette, "Custom colors accepted");
                    self.generate_preview(chat, name, variant, palette, None).await
                }
                Err(e) => {
                    info!(chat_id = chat.id, error = %e, "Custom colors rejected");
                    self.bot.send_message(chat, MSG_INVALID_COLORS).await
                }
            },
            _ => {
                debug!(chat_id = chat.id, "Ignoring free text outside color input");
                Ok(())
            }
        }
    }

    #[instrument(skip(self, query), fields(user_id = query.user.id, data = %query.data))]
    pub async fn handle_callback(&self, query: &CallbackQuery) -> Result<()> {
        let (chat, message_id) = match (&query.chat, &query.message_id) {
            (Some(chat), Some(id)) => (chat, id.as_str()),
            _ => {
                warn!(user_id = query.user.id, data = %query.data, "Callback for a message that no longer exists");
                self.answer(query, Some(TOAST_OUTDATED)).await;
                return Ok(());
            }
        };

        let Some(action) = CallbackAction::parse(&query.data) else {
            warn!(chat_id = chat.id, data = %query.data, "Unknown callback data");
            self.answer(query, Some(TOAST_UNEXPECTED)).await;
            return Ok(());
        };

        let session = self.sessions.get(chat.id);
        info!(
            chat_id = chat.id,
            action = %action,
            step = ?session.as_ref().map(|s| s.step()),
            "Callback received"
        );

        match action {
            CallbackAction::Cancel => self.cancel(query, chat, message_id, session).await,
            CallbackAction::BackToTypeSelection => {
                self.back_to_type_selection(query, chat, message_id, session)
                    .await
            }
            CallbackAction::BackToColorOptions => {
                self.back_to_color_options(query, chat, message_id, session)
                    .await
            }
            CallbackAction::SelectType(variant) => {
                self.select_type(query, chat, message_id, session, variant)
                    .await
            }
            CallbackAction::SelectColor(method) => {
                self.select_color(query, chat, message_id, session, method)
                    .await
            }
            CallbackAction::RegenerateColors
            | CallbackAction::ChangeStyle
            | CallbackAction::GetCurrentSvg => {
                self.preview_action(query, chat, message_id, session, action)
                    .await
            }
        }
    }

    async fn cancel(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
    ) -> Result<()> {
        self.answer(query, None).await;
        self.sessions.remove(chat.id);
        info!(chat_id = chat.id, "Session cancelled");

        match session.as_ref().and_then(|s| s.preview_message_id()) {
            Some(preview_id) => {
                // A photo cannot become a text message.
                self.delete_quietly(chat, preview_id).await;
                if preview_id != message_id {
                    self.strip_keyboard(chat, message_id).await;
                }
                self.notify(chat, MSG_CANCELLED).await;
            }
            None => {
                if let Err(e) = self
                    .bot
                    .edit_message(chat, message_id, MSG_CANCELLED, None)
                    .await
                {
                    debug!(chat_id = chat.id, error = %e, "Cancel edit failed, sending notice");
                    self.strip_keyboard(chat, message_id).await;
                    self.notify(chat, MSG_CANCELLED).await;
                }
            }
        }
        Ok(())
    }

    async fn back_to_type_selection(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
    ) -> Result<()> {
        let Some(mut session) = session else {
            return self.no_previous_step(query, chat, message_id).await;
        };
        self.answer(query, None).await;
        let preview = session.preview_message_id().map(str::to_owned);
        session.state = DialogState::TypeSelection;
        let text = messages::back_to_style(&session.name);
        self.sessions.insert(chat.id, session);
        self.show_screen(chat, message_id, preview.as_deref(), &text, &style_keyboard())
            .await
    }

    async fn back_to_color_options(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
    ) -> Result<()> {
        let Some(mut session) = session else {
            return self.no_previous_step(query, chat, message_id).await;
        };
        self.answer(query, None).await;
        let preview = session.preview_message_id().map(str::to_owned);

        match session.variant() {
            Some(variant) => {
                session.state = DialogState::ColorMethodSelection { variant };
                self.sessions.insert(chat.id, session);
                self.show_screen(
                    chat,
                    message_id,
                    preview.as_deref(),
                    &messages::choose_colors(variant),
                    &color_method_keyboard(),
                )
                .await
            }
            None => {
                self.notify(chat, MSG_STYLE_FIRST).await;
                session.state = DialogState::TypeSelection;
                let text = messages::back_to_style(&session.name);
                self.sessions.insert(chat.id, session);
                self.show_screen(chat, message_id, preview.as_deref(), &text, &style_keyboard())
                    .await
            }
        }
    }

    async fn select_type(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
        variant: AvatarVariant,
    ) -> Result<()> {
        match session {
            Some(Session {
                name,
                state: DialogState::TypeSelection,
            }) => {
                self.answer(query, None).await;
                info!(chat_id = chat.id, variant = %variant, "Style selected");
                self.sessions.insert(
                    chat.id,
                    Session {
                        name,
                        state: DialogState::ColorMethodSelection { variant },
                    },
                );
                self.show_screen(
                    chat,
                    message_id,
                    None,
                    &messages::choose_colors(variant),
                    &color_method_keyboard(),
                )
                .await
            }
            Some(Session {
                name,
                state: DialogState::SelectingNewStyle { previous },
            }) => {
                self.answer(query, None).await;
                info!(chat_id = chat.id, from = %previous.variant, to = %variant, "Restyling");
                self.restyle(chat, message_id, name, previous, variant).await
            }
            _ => self.unexpected(query, chat, message_id).await,
        }
    }

    async fn select_color(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
        method: ColorMethod,
    ) -> Result<()> {
        let Some(Session {
            name,
            state: DialogState::ColorMethodSelection { variant },
        }) = session
        else {
            return self.unexpected(query, chat, message_id).await;
        };
        self.answer(query, None).await;
        info!(chat_id = chat.id, method = method.as_str(), "Color method selected");

        match method {
            ColorMethod::Random => {
                let palette = Palette::random(self.palette_size);
                self.generate_preview(chat, name, variant, palette, Some(message_id))
                    .await
            }
            ColorMethod::Default => {
                self.generate_preview(
                    chat,
                    name,
                    variant,
                    Palette::default_palette(),
                    Some(message_id),
                )
                .await
            }
            ColorMethod::Custom => {
                self.sessions.insert(
                    chat.id,
                    Session {
                        name,
                        state: DialogState::AwaitingCustomColors { variant },
                    },
                );
                self.show_screen(
                    chat,
                    message_id,
                    None,
                    MSG_CUSTOM_COLORS_PROMPT,
                    &custom_colors_keyboard(),
                )
                .await
            }
        }
    }

    /// Regenerate / change style / export. Only valid on the current preview message.
    async fn preview_action(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
        session: Option<Session>,
        action: CallbackAction,
    ) -> Result<()> {
        let (name, render, preview_id) = match session {
            Some(Session {
                name,
                state:
                    DialogState::Preview {
                        render,
                        preview_message_id,
                    },
            }) if preview_message_id == message_id => (name, render, preview_message_id),
            _ => {
                self.unexpected(query, chat, message_id).await?;
                if action == CallbackAction::GetCurrentSvg {
                    self.notify(chat, MSG_NO_SVG).await;
                }
                return Ok(());
            }
        };

        match action {
            CallbackAction::RegenerateColors => {
                self.answer(query, Some(TOAST_REGENERATING)).await;
                self.regenerate_colors(chat, name, render, preview_id).await
            }
            CallbackAction::ChangeStyle => {
                self.answer(query, None).await;
                self.delete_quietly(chat, &preview_id).await;
                let text = messages::change_style(&name, &render.palette);
                self.sessions.insert(
                    chat.id,
                    Session {
                        name,
                        state: DialogState::SelectingNewStyle { previous: render },
                    },
                );
                self.bot
                    .send_message_with_keyboard(chat, &text, &style_keyboard())
                    .await?;
                Ok(())
            }
            _ => {
                self.answer(query, None).await;
                self.export_svg(chat, name, render, preview_id).await
            }
        }
    }

    async fn regenerate_colors(
        &self,
        chat: &Chat,
        name: String,
        render: RenderedAvatar,
        preview_id: String,
    ) -> Result<()> {
        let palette = Palette::random(self.palette_size);
        let (fresh, png) = match self.render_avatar(&name, render.variant, palette).await {
            Ok(out) => out,
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "Regenerate render failed; keeping preview");
                self.notify(chat, MSG_REGENERATE_FAILED).await;
                return Ok(());
            }
        };

        let keyboard = preview_keyboard();
        let caption = messages::regenerated_caption(&name, fresh.variant);
        let preview_message_id = match self
            .bot
            .edit_photo(chat, &preview_id, png.clone(), &caption, &keyboard)
            .await
        {
            Ok(()) => preview_id,
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Preview edit failed, resending");
                self.delete_quietly(chat, &preview_id).await;
                let caption = messages::preview_caption(&name, fresh.variant);
                match self.bot.send_photo(chat, png, &caption, &keyboard).await {
                    Ok(id) => id,
                    Err(e) => {
                        error!(chat_id = chat.id, error = %e, "Preview resend failed");
                        self.sessions.remove(chat.id);
                        self.notify(chat, MSG_PREVIEW_SEND_FAILED).await;
                        return Ok(());
                    }
                }
            }
        };

        info!(chat_id = chat.id, colors = %fresh.palette, "Colors regenerated");
        self.sessions.insert(
            chat.id,
            Session {
                name,
                state: DialogState::Preview {
                    render: fresh,
                    preview_message_id,
                },
            },
        );
        Ok(())
    }

    async fn export_svg(
        &self,
        chat: &Chat,
        name: String,
        render: RenderedAvatar,
        preview_id: String,
    ) -> Result<()> {
        let document = Document {
            file_name: export_file_name(&name, render.variant),
            mime_type: SVG_MIME.to_string(),
            bytes: render.svg.into_bytes(),
        };
        let file_name = document.file_name.clone();
        match self
            .bot
            .send_document(chat, document, &messages::svg_ready(&name))
            .await
        {
            Ok(()) => {
                info!(chat_id = chat.id, file_name = %file_name, "SVG exported, session finished");
                self.sessions.remove(chat.id);
                self.strip_keyboard(chat, &preview_id).await;
            }
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "SVG export failed; session kept for retry");
                self.notify(chat, MSG_SVG_SEND_FAILED).await;
            }
        }
        Ok(())
    }

    /// New style with the previous palette. On render failure the chat stays in style selection.
    async fn restyle(
        &self,
        chat: &Chat,
        message_id: &str,
        name: String,
        previous: RenderedAvatar,
        variant: AvatarVariant,
    ) -> Result<()> {
        let status = self
            .show_status(chat, Some(message_id), &messages::generating(&name, variant))
            .await;
        match self
            .render_avatar(&name, variant, previous.palette.clone())
            .await
        {
            Ok((render, png)) => {
                self.publish_preview(chat, name, render, png, status.as_deref())
                    .await
            }
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "Restyle render failed");
                if let Some(id) = &status {
                    self.delete_quietly(chat, id).await;
                }
                self.bot
                    .send_message_with_keyboard(chat, MSG_STYLE_RENDER_FAILED, &style_keyboard())
                    .await?;
                Ok(())
            }
        }
    }

    /// First render of a session. Any failure destroys the session.
    async fn generate_preview(
        &self,
        chat: &Chat,
        name: String,
        variant: AvatarVariant,
        palette: Palette,
        status_target: Option<&str>,
    ) -> Result<()> {
        let status = self
            .show_status(chat, status_target, &messages::generating(&name, variant))
            .await;
        match self.render_avatar(&name, variant, palette).await {
            Ok((render, png)) => {
                self.publish_preview(chat, name, render, png, status.as_deref())
                    .await
            }
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "Render failed, session dropped");
                self.sessions.remove(chat.id);
                self.report_status(chat, status.as_deref(), MSG_RENDER_FAILED)
                    .await;
                Ok(())
            }
        }
    }

    /// Vector render then rasterize.
    async fn render_avatar(
        &self,
        name: &str,
        variant: AvatarVariant,
        palette: Palette,
    ) -> Result<(RenderedAvatar, Vec<u8>)> {
        let svg = self
            .renderer
            .render(name, variant, palette.colors(), self.avatar_size, true)
            .await?;
        let png = self.rasterizer.rasterize(&svg).await?;
        debug!(variant = %variant, svg_len = svg.len(), png_len = png.len(), "Avatar rendered");
        Ok((
            RenderedAvatar {
                variant,
                palette,
                svg,
            },
            png,
        ))
    }

    /// Removes the status message and sends the preview photo, moving the session to `Preview`.
    async fn publish_preview(
        &self,
        chat: &Chat,
        name: String,
        render: RenderedAvatar,
        png: Vec<u8>,
        status: Option<&str>,
    ) -> Result<()> {
        if let Some(id) = status {
            self.delete_quietly(chat, id).await;
        }
        let caption = messages::preview_caption(&name, render.variant);
        match self
            .bot
            .send_photo(chat, png, &caption, &preview_keyboard())
            .await
        {
            Ok(preview_message_id) => {
                info!(
                    chat_id = chat.id,
                    variant = %render.variant,
                    colors = %render.palette,
                    preview_message_id = %preview_message_id,
                    "Preview sent"
                );
                self.sessions.insert(
                    chat.id,
                    Session {
                        name,
                        state: DialogState::Preview {
                            render,
                            preview_message_id,
                        },
                    },
                );
            }
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "Preview send failed, session dropped");
                self.sessions.remove(chat.id);
                self.notify(chat, MSG_PREVIEW_SEND_FAILED).await;
            }
        }
        Ok(())
    }

    /// Replaces the pressed message with `text` + `keyboard`. If the pressed message is the
    /// preview photo (or editing fails) a new message is sent instead.
    async fn show_screen(
        &self,
        chat: &Chat,
        message_id: &str,
        preview: Option<&str>,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        if let Some(preview_id) = preview {
            self.delete_quietly(chat, preview_id).await;
            if preview_id == message_id {
                self.bot
                    .send_message_with_keyboard(chat, text, keyboard)
                    .await?;
                return Ok(());
            }
        }
        if let Err(e) = self
            .bot
            .edit_message(chat, message_id, text, Some(keyboard))
            .await
        {
            debug!(chat_id = chat.id, error = %e, "Edit failed, sending a new message");
            self.bot
                .send_message_with_keyboard(chat, text, keyboard)
                .await?;
        }
        Ok(())
    }

    /// Shows a transient status line; returns its message id when one is on screen.
    async fn show_status(&self, chat: &Chat, target: Option<&str>, text: &str) -> Option<String> {
        if let Some(id) = target {
            match self.bot.edit_message(chat, id, text, None).await {
                Ok(()) => return Some(id.to_string()),
                Err(e) => {
                    debug!(chat_id = chat.id, error = %e, "Status edit failed");
                    self.strip_keyboard(chat, id).await;
                }
            }
        }
        match self.bot.send_message_and_return_id(chat, text).await {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(chat_id = chat.id, error = %e, "Status message failed");
                None
            }
        }
    }

    /// Turns the status message into `text`, or sends `text` when there is none.
    async fn report_status(&self, chat: &Chat, status: Option<&str>, text: &str) {
        if let Some(id) = status {
            if self.bot.edit_message(chat, id, text, None).await.is_ok() {
                return;
            }
        }
        self.notify(chat, text).await;
    }

    async fn no_previous_step(
        &self,
        query: &CallbackQuery,
        chat: &Chat,
        message_id: &str,
    ) -> Result<()> {
        self.unexpected(query, chat, message_id).await?;
        self.notify(chat, MSG_NO_PREVIOUS_STEP).await;
        Ok(())
    }

    /// Neutral answer for a button that does not fit the session; state is left alone.
    async fn unexpected(&self, query: &CallbackQuery, chat: &Chat, message_id: &str) -> Result<()> {
        warn!(
            chat_id = chat.id,
            data = %query.data,
            step = ?self.sessions.get(chat.id).map(|s| s.step()),
            "Unexpected callback"
        );
        self.answer(query, Some(TOAST_UNEXPECTED)).await;
        self.strip_keyboard(chat, message_id).await;
        Ok(())
    }

    async fn answer(&self, query: &CallbackQuery, toast: Option<&str>) {
        if let Err(e) = self.bot.answer_callback(&query.id, toast).await {
            debug!(error = %e, "answer_callback failed");
        }
    }

    async fn notify(&self, chat: &Chat, text: &str) {
        if let Err(e) = self.bot.send_message(chat, text).await {
            warn!(chat_id = chat.id, error = %e, "Failed to notify user");
        }
    }

    async fn delete_quietly(&self, chat: &Chat, message_id: &str) {
        if let Err(e) = self.bot.delete_message(chat, message_id).await {
            debug!(chat_id = chat.id, message_id, error = %e, "delete_message failed");
        }
    }

    async fn strip_keyboard(&self, chat: &Chat, message_id: &str) {
        if let Err(e) = self.bot.edit_keyboard(chat, message_id, None).await {
            debug!(chat_id = chat.id, message_id, error = %e, "Removing buttons failed");
        }
    }
}
