//! Inline button press.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A button press. `chat` and `message_id` are `None` when the message carrying the
/// button is no longer accessible to the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    pub chat: Option<Chat>,
    pub message_id: Option<String>,
    pub data: String,
}
