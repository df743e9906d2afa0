//! Dispatcher runner: verifies the token, caches the bot username, then feeds messages and button
//! presses to the HandlerChain as core events until Ctrl-C.

use std::sync::Arc;

use anyhow::Result;
use teloxide::{prelude::*, update_listeners, ApiError, RequestError};
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::error_handler::PollingErrorHandler;
use crate::chain::HandlerChain;
use crate::core::{Event, ToCoreCallback, ToCoreMessage};

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    if msg.text().is_none() {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message"
        );
        return Ok(());
    }
    let event = Event::Message(core_msg);
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id = event.user_id(), "Handler chain failed");
    }
    Ok(())
}

async fn on_callback(query: teloxide::types::CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    let event = Event::Callback(TelegramCallbackWrapper(&query).to_core());
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id = event.user_id(), "Handler chain failed");
    }
    Ok(())
}

/// Starts long polling. Calls get_me() first: an invalid token is returned as an error, other
/// failures are logged and polling starts anyway. The username is written into `bot_username`.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(RequestError::Api(ApiError::InvalidToken)) => {
            anyhow::bail!("Telegram rejected the bot token (401); check BOT_TOKEN");
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing without bot username"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build();

    info!("Polling started");
    let listener = update_listeners::polling_default(bot).await;
    dispatcher
        .dispatch_with_listener(listener, Arc::new(PollingErrorHandler))
        .await;
    info!("Dispatcher stopped");

    Ok(())
}
