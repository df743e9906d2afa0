//! Per-chat serial queues: every event of a chat is processed to completion before the next one
//! starts; different chats run concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{error, info};

use super::manager::DialogManager;
use crate::core::Event;

/// Sender to one chat's worker.
type QueueSender = mpsc::UnboundedSender<Event>;

pub struct ChatQueues {
    manager: Arc<DialogManager>,
    queues: DashMap<i64, QueueSender>,
}

impl ChatQueues {
    pub fn new(manager: Arc<DialogManager>) -> Self {
        Self {
            manager,
            queues: DashMap::new(),
        }
    }

    pub fn manager(&self) -> &Arc<DialogManager> {
        &self.manager
    }

    /// Queues `event` on its chat's worker, spawning the worker on first use.
    /// Returns false if the worker is gone.
    pub fn enqueue(&self, event: Event) -> bool {
        let key = event.queue_key();
        let tx = self
            .queues
            .entry(key)
            .or_insert_with(|| self.spawn_worker(key))
            .clone();
        match tx.send(event) {
            Ok(()) => true,
            Err(_) => {
                error!(queue_key = key, "Chat queue receiver dropped");
                self.queues.remove(&key);
                false
            }
        }
    }

    /// Number of chats that have a worker.
    pub fn active_chats(&self) -> usize {
        self.queues.len()
    }

    fn spawn_worker(&self, key: i64) -> QueueSender {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        tokio::spawn(Self::process_queue_loop(rx, self.manager.clone(), key));
        tx
    }

    async fn process_queue_loop(
        mut rx: mpsc::UnboundedReceiver<Event>,
        manager: Arc<DialogManager>,
        key: i64,
    ) {
        while let Some(event) = rx.recv().await {
            info!(queue_key = key, kind = event.kind(), "Processing queued event");
            if let Err(e) = manager.handle_event(&event).await {
                error!(queue_key = key, error = %e, "Failed to process queued event");
            }
        }
    }
}
