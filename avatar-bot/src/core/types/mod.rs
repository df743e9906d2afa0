//! Core types: user, chat, message, callback, event, keyboard, document, handler response, and Handler trait.
//!
//! One file per main type.

mod callback;
mod chat;
mod document;
mod event;
mod handler;
mod keyboard;
mod message;
mod response;
mod user;

pub use callback::CallbackQuery;
pub use chat::Chat;
pub use document::Document;
pub use event::Event;
pub use handler::{Handler, ToCoreCallback, ToCoreMessage, ToCoreUser};
pub use keyboard::{InlineButton, InlineKeyboard};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
