//! Incoming text message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single incoming message with user, chat and text content (empty for non-text messages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True for slash commands (`/start`, `/avatar ...`).
    pub fn is_command(&self) -> bool {
        self.content.starts_with('/')
    }
}
