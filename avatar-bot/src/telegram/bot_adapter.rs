//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Photos and documents are uploaded from memory.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{
        CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, InputMedia,
        InputMediaPhoto, MessageId,
    },
    RequestError,
};
use tracing::debug;

use crate::core::{
    parse_message_id, Bot as CoreBot, BotError, Chat, Document, InlineKeyboard, Result,
};

const PREVIEW_FILE_NAME: &str = "avatar.png";

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Underlying teloxide::Bot for direct API use.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn transport(e: RequestError) -> BotError {
    BotError::Transport(e.to_string())
}

fn message_id(s: &str) -> Result<MessageId> {
    parse_message_id(s).map(MessageId)
}

/// Core keyboard → Telegram inline markup (callback buttons only).
pub fn to_inline_markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text)
            .await
            .map_err(transport)?;
        Ok(sent.id.to_string())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text)
            .reply_markup(to_inline_markup(keyboard))
            .await
            .map_err(transport)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        let mut req = self
            .bot
            .edit_message_text(ChatId(chat.id), self::message_id(message_id)?, text);
        // Omitting the markup removes existing buttons.
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_inline_markup(kb));
        }
        req.await.map_err(transport)?;
        Ok(())
    }

    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        let mut req = self
            .bot
            .edit_message_reply_markup(ChatId(chat.id), self::message_id(message_id)?);
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_inline_markup(kb));
        }
        req.await.map_err(transport)?;
        Ok(())
    }

    async fn edit_photo(
        &self,
        chat: &Chat,
        message_id: &str,
        png: Vec<u8>,
        caption: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        let photo = InputFile::memory(png).file_name(PREVIEW_FILE_NAME);
        let media = InputMedia::Photo(InputMediaPhoto::new(photo).caption(caption));
        self.bot
            .edit_message_media(ChatId(chat.id), self::message_id(message_id)?, media)
            .reply_markup(to_inline_markup(keyboard))
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.bot
            .delete_message(ChatId(chat.id), self::message_id(message_id)?)
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        png: Vec<u8>,
        caption: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        let photo = InputFile::memory(png).file_name(PREVIEW_FILE_NAME);
        let sent = self
            .bot
            .send_photo(ChatId(chat.id), photo)
            .caption(caption)
            .reply_markup(to_inline_markup(keyboard))
            .await
            .map_err(transport)?;
        Ok(sent.id.to_string())
    }

    async fn send_document(&self, chat: &Chat, document: Document, caption: &str) -> Result<()> {
        debug!(
            chat_id = chat.id,
            file_name = %document.file_name,
            mime_type = %document.mime_type,
            size = document.bytes.len(),
            "Uploading document"
        );
        // Telegram derives the MIME type from the file name extension.
        let file = InputFile::memory(document.bytes).file_name(document.file_name);
        self.bot
            .send_document(ChatId(chat.id), file)
            .caption(caption)
            .await
            .map_err(transport)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut req = self
            .bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()));
        if let Some(t) = text {
            req = req.text(t);
        }
        req.await.map_err(transport)?;
        Ok(())
    }
}
