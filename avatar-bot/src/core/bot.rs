//! Bot abstraction for the chat transport.
//!
//! [`Bot`] is transport-agnostic; `telegram::TelegramBotAdapter` implements it via teloxide.
//! Message ids are transport-specific strings (Telegram: numeric).

use async_trait::async_trait;

use crate::core::error::{BotError, Result};
use crate::core::types::{Chat, Document, InlineKeyboard};

/// Sending, editing and deleting messages, uploading files and answering button presses.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message and returns its id.
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Sends a text message with inline buttons and returns its id.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String>;
    /// Replaces the text of a message; `keyboard: None` removes its buttons.
    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()>;
    /// Replaces only the buttons of a message; `None` removes them.
    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()>;
    /// Swaps the image and caption of a photo message in place, keeping `keyboard` attached.
    async fn edit_photo(
        &self,
        chat: &Chat,
        message_id: &str,
        png: Vec<u8>,
        caption: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()>;
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
    /// Sends a PNG photo with caption and buttons; returns the message id.
    async fn send_photo(
        &self,
        chat: &Chat,
        png: Vec<u8>,
        caption: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String>;
    /// Uploads a named file.
    async fn send_document(&self, chat: &Chat, document: Document, caption: &str) -> Result<()>;
    /// Acknowledges a button press, optionally showing a short toast.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32 (Telegram message ids).
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Transport(format!("Invalid message_id: {}", s)))
}
