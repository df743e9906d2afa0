//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use avatar_render::{GeometricRenderer, Rasterizer, ResvgRasterizer, VectorRenderer};
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::core::Bot as CoreBot;
use crate::dialog::{ChatQueues, DialogManager, SessionStore};
use crate::handlers::{DialogHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;

/// Everything run_bot needs; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub bot_username: Arc<RwLock<Option<String>>>,
    pub sessions: Arc<SessionStore>,
    pub queues: Arc<ChatQueues>,
}

/// Teloxide bot with the optional custom API URL applied.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => {
                info!(url = %url_str, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Wires the dialog manager to a transport and render backends. Tests pass a mock `bot`.
pub fn build_dialog(
    config: &BotConfig,
    bot: Arc<dyn CoreBot>,
    renderer: Arc<dyn VectorRenderer>,
    rasterizer: Arc<dyn Rasterizer>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> (Arc<SessionStore>, Arc<ChatQueues>) {
    let sessions = Arc::new(SessionStore::new());
    let manager = DialogManager::new(bot, renderer, rasterizer, sessions.clone())
        .with_bot_username(bot_username)
        .with_avatar_size(config.avatar_size())
        .with_palette_size(config.palette_size());
    let queues = Arc::new(ChatQueues::new(Arc::new(manager)));
    (sessions, queues)
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> BotComponents {
    let teloxide_bot = build_teloxide_bot(config);
    let bot_username = Arc::new(RwLock::new(None));
    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let (sessions, queues) = build_dialog(
        config,
        adapter,
        Arc::new(GeometricRenderer::new()),
        Arc::new(ResvgRasterizer::new()),
        bot_username.clone(),
    );
    info!(
        avatar_size = config.avatar_size(),
        palette_size = config.palette_size(),
        "Bot components built"
    );
    BotComponents {
        teloxide_bot,
        bot_username,
        sessions,
        queues,
    }
}

/// Logging first, then the dialog.
pub fn build_handler_chain(queues: Arc<ChatQueues>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(DialogHandler::new(queues)))
}
