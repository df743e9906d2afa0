use crate::core::{CallbackQuery, Chat, Message, ToCoreCallback, ToCoreMessage, ToCoreUser, User};

/// Converts a Telegram user into a core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: if chat.is_private() {
            "private".to_string()
        } else {
            "group".to_string()
        },
    }
}

/// Converts a Telegram message into a core message. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Converts a button press. Chat and message id are dropped when the message is inaccessible.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallback for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        let message = self.0.message.as_ref();
        CallbackQuery {
            id: self.0.id.0.clone(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            chat: message.map(|m| core_chat(m.chat())),
            message_id: message.map(|m| m.id().to_string()),
            data: self.0.data.clone().unwrap_or_default(),
        }
    }
}
