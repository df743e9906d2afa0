//! # Avatar bot
//!
//! Telegram bot that walks a user through naming, styling and coloring a geometric avatar,
//! then sends a PNG preview and the SVG source on request.
//!
//! Core (Handler, Bot, Event), chain (HandlerChain), telegram (dispatcher, adapters) and dialog
//! (session state machine) are wired together by components and runner.

pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dialog;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use crate::core::{
    init_tracing, parse_message_id, Bot, BotError, CallbackQuery, Chat, DialogError, Document,
    Event, Handler, HandlerResponse, InlineButton, InlineKeyboard, Message, Result, ToCoreCallback,
    ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    run_dispatcher, PollingErrorHandler, TelegramBotAdapter, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};

pub use config::{AvatarConfig, BaseConfig, BotConfig};
pub use runner::run_bot;

pub use components::{build_bot_components, build_dialog, build_handler_chain, BotComponents};
pub use dialog::{ChatQueues, DialogManager, DialogState, Palette, Session, SessionStore, Step};
pub use handlers::{DialogHandler, LoggingHandler};
