//! Application entry: init logging, validate config, build components, run the dispatcher.

use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::init_tracing;
use crate::telegram::run_dispatcher;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        api_url = ?config.telegram_api_url(),
        "Initializing bot"
    );

    let components = build_bot_components(&config);
    let handler_chain = build_handler_chain(components.queues.clone());

    info!("Bot started successfully");

    run_dispatcher(
        components.teloxide_bot.clone(),
        handler_chain,
        components.bot_username.clone(),
    )
    .await?;

    info!(open_sessions = components.sessions.len(), "Bot stopped");
    Ok(())
}
