//! Chain entry for the avatar dialog: hands each event to its chat's queue and returns at once.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, instrument};

use crate::core::{Event, Handler, HandlerResponse, Result};
use crate::dialog::ChatQueues;

pub struct DialogHandler {
    queues: Arc<ChatQueues>,
}

impl DialogHandler {
    pub fn new(queues: Arc<ChatQueues>) -> Self {
        Self { queues }
    }
}

#[async_trait]
impl Handler for DialogHandler {
    #[instrument(skip(self, event), fields(kind = event.kind(), queue_key = event.queue_key()))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        if !self.queues.enqueue(event.clone()) {
            error!(user_id = event.user_id(), "Failed to queue event");
        }
        Ok(HandlerResponse::Stop)
    }
}
