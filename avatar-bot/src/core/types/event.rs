//! Event fed to the handler chain: either a text message or a button press.

use super::{callback::CallbackQuery, message::Message};

#[derive(Debug, Clone)]
pub enum Event {
    Message(Message),
    Callback(CallbackQuery),
}

impl Event {
    /// Chat the event belongs to; `None` for callbacks whose message is gone.
    pub fn chat_id(&self) -> Option<i64> {
        match self {
            Event::Message(m) => Some(m.chat.id),
            Event::Callback(q) => q.chat.as_ref().map(|c| c.id),
        }
    }

    pub fn user_id(&self) -> i64 {
        match self {
            Event::Message(m) => m.user.id,
            Event::Callback(q) => q.user.id,
        }
    }

    /// Key used to serialize processing: the chat id, or the user id when the chat is unknown.
    pub fn queue_key(&self) -> i64 {
        self.chat_id().unwrap_or_else(|| self.user_id())
    }

    /// Short tag for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(m) if m.is_command() => "command",
            Event::Message(_) => "message",
            Event::Callback(_) => "callback",
        }
    }
}
