//! Telegram transport: teloxide → core adapters, [`crate::core::Bot`] implementation, dispatcher runner.

mod adapters;
mod bot_adapter;
mod error_handler;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_inline_markup, TelegramBotAdapter};
pub use error_handler::PollingErrorHandler;
pub use runner::run_dispatcher;
