//! Logs every incoming event in `before` and the chain result in `after`.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::core::{Event, Handler, HandlerResponse, Result};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        match event {
            Event::Message(m) => info!(
                user_id = m.user.id,
                chat_id = m.chat.id,
                username = %m.user.username.as_deref().unwrap_or("unknown"),
                message_content = %m.content,
                "Received message"
            ),
            Event::Callback(q) => info!(
                user_id = q.user.id,
                chat_id = ?q.chat.as_ref().map(|c| c.id),
                username = %q.user.username.as_deref().unwrap_or("unknown"),
                data = %q.data,
                "Received callback"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(kind = event.kind(), response = ?response, "Processed event");
        Ok(())
    }
}
