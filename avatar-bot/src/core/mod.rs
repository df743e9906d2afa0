//! Core types and traits: Handler, Bot, Event, keyboards, error, logger.
//! Transport-agnostic; the Telegram layer converts into these types.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, DialogError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackQuery, Chat, Document, Event, Handler, HandlerResponse, InlineButton, InlineKeyboard,
    Message, ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};
