//! Shared test support: a recording MockBot, mockall renderer/rasterizer mocks, event builders.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use avatar_bot::{
    Bot, BotError, CallbackQuery, Chat, DialogManager, Document, Event, InlineKeyboard, Message,
    Result, SessionStore, User,
};
use avatar_render::{AvatarVariant, Rasterizer, VectorRenderer};
use mockall::mock;

mock! {
    pub Renderer {}
    #[async_trait]
    impl VectorRenderer for Renderer {
        async fn render(
            &self,
            name: &str,
            variant: AvatarVariant,
            colors: &[String],
            size: u32,
            square: bool,
        ) -> avatar_render::Result<String>;
    }
}

mock! {
    pub Raster {}
    #[async_trait]
    impl Rasterizer for Raster {
        async fn rasterize(&self, svg: &str) -> avatar_render::Result<Vec<u8>>;
    }
}

/// Transport operations the MockBot can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Send,
    Edit,
    EditKeyboard,
    EditPhoto,
    Delete,
    Photo,
    Document,
}

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Send {
        chat_id: i64,
        id: String,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
    EditKeyboard {
        chat_id: i64,
        message_id: String,
        keyboard: Option<InlineKeyboard>,
    },
    EditPhoto {
        chat_id: i64,
        message_id: String,
        caption: String,
    },
    Delete {
        chat_id: i64,
        message_id: String,
    },
    Photo {
        chat_id: i64,
        id: String,
        caption: String,
        keyboard: InlineKeyboard,
    },
    Document {
        chat_id: i64,
        file_name: String,
        mime_type: String,
        body: String,
        caption: String,
    },
    Answer {
        callback_id: String,
        text: Option<String>,
    },
}

/// Mock Bot that records every call and hands out increasing message ids starting at 100.
pub struct MockBot {
    calls: Mutex<Vec<BotCall>>,
    next_id: AtomicI64,
    failing: Mutex<HashSet<Op>>,
    delay_ms: u64,
}

impl MockBot {
    pub fn new() -> Self {
        Self::with_delay(0)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(100),
            failing: Mutex::new(HashSet::new()),
            delay_ms,
        }
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Texts of plain sent messages, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn photos(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, BotCall::Photo { .. }))
            .collect()
    }

    pub fn documents(&self) -> Vec<BotCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, BotCall::Document { .. }))
            .collect()
    }

    /// Toasts shown for callback answers (`None` for plain acks).
    pub fn answers(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                BotCall::Answer { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Id of the most recent message sent with a keyboard or photo.
    pub fn last_sent_id(&self) -> Option<String> {
        self.calls().into_iter().rev().find_map(|c| match c {
            BotCall::Send { id, .. } | BotCall::Photo { id, .. } => Some(id),
            _ => None,
        })
    }

    async fn record(&self, op: Op, call: BotCall) -> Result<()> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if self.failing.lock().unwrap().contains(&op) {
            return Err(BotError::Transport(format!("{:?} rejected", op)));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }

    fn new_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_message_and_return_id(chat, text).await.map(|_| ())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let id = self.new_id();
        self.record(
            Op::Send,
            BotCall::Send {
                chat_id: chat.id,
                id: id.clone(),
                text: text.to_string(),
                keyboard: None,
            },
        )
        .await?;
        Ok(id)
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        let id = self.new_id();
        self.record(
            Op::Send,
            BotCall::Send {
                chat_id: chat.id,
                id: id.clone(),
                text: text.to_string(),
                keyboard: Some(keyboard.clone()),
            },
        )
        .await?;
        Ok(id)
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        self.record(
            Op::Edit,
            BotCall::Edit {
                chat_id: chat.id,
                message_id: message_id.to_string(),
                text: text.to_string(),
                keyboard: keyboard.cloned(),
            },
        )
        .await
    }

    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<()> {
        self.record(
            Op::EditKeyboard,
            BotCall::EditKeyboard {
                chat_id: chat.id,
                message_id: message_id.to_string(),
                keyboard: keyboard.cloned(),
            },
        )
        .await
    }

    async fn edit_photo(
        &self,
        chat: &Chat,
        message_id: &str,
        _png: Vec<u8>,
        caption: &str,
        _keyboard: &InlineKeyboard,
    ) -> Result<()> {
        self.record(
            Op::EditPhoto,
            BotCall::EditPhoto {
                chat_id: chat.id,
                message_id: message_id.to_string(),
                caption: caption.to_string(),
            },
        )
        .await
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        self.record(
            Op::Delete,
            BotCall::Delete {
                chat_id: chat.id,
                message_id: message_id.to_string(),
            },
        )
        .await
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        _png: Vec<u8>,
        caption: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<String> {
        let id = self.new_id();
        self.record(
            Op::Photo,
            BotCall::Photo {
                chat_id: chat.id,
                id: id.clone(),
                caption: caption.to_string(),
                keyboard: keyboard.clone(),
            },
        )
        .await?;
        Ok(id)
    }

    async fn send_document(&self, chat: &Chat, document: Document, caption: &str) -> Result<()> {
        self.record(
            Op::Document,
            BotCall::Document {
                chat_id: chat.id,
                file_name: document.file_name,
                mime_type: document.mime_type,
                body: String::from_utf8_lossy(&document.bytes).into_owned(),
                caption: caption.to_string(),
            },
        )
        .await
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        self.calls.lock().unwrap().push(BotCall::Answer {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("user_{}", id)),
        first_name: Some(format!("User{}", id)),
        last_name: None,
    }
}

pub fn chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

/// Text message (commands included) from user == chat.
pub fn text(chat_id: i64, content: &str) -> Event {
    Event::Message(Message {
        id: format!("in_{}", chat_id),
        user: user(chat_id),
        chat: chat(chat_id),
        content: content.to_string(),
        created_at: chrono::Utc::now(),
    })
}

/// Button press on `message_id`.
pub fn press(chat_id: i64, message_id: &str, data: &str) -> Event {
    Event::Callback(CallbackQuery {
        id: format!("cb_{}_{}", message_id, data),
        user: user(chat_id),
        chat: Some(chat(chat_id)),
        message_id: Some(message_id.to_string()),
        data: data.to_string(),
    })
}

/// Button press whose message is no longer accessible.
pub fn press_orphan(user_id: i64, data: &str) -> Event {
    Event::Callback(CallbackQuery {
        id: format!("cb_orphan_{}", data),
        user: user(user_id),
        chat: None,
        message_id: None,
        data: data.to_string(),
    })
}

/// Renderer that echoes its inputs into the SVG so tests can inspect them.
pub struct EchoRenderer;

#[async_trait]
impl VectorRenderer for EchoRenderer {
    async fn render(
        &self,
        name: &str,
        variant: AvatarVariant,
        colors: &[String],
        size: u32,
        _square: bool,
    ) -> avatar_render::Result<String> {
        Ok(format!(
            "<svg data-name=\"{}\" data-variant=\"{}\" data-colors=\"{}\" width=\"{}\"/>",
            name,
            variant,
            colors.join(","),
            size
        ))
    }
}

/// Rasterizer returning a fixed fake PNG.
pub struct FakeRaster;

#[async_trait]
impl Rasterizer for FakeRaster {
    async fn rasterize(&self, _svg: &str) -> avatar_render::Result<Vec<u8>> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

pub fn manager_with(
    bot: Arc<MockBot>,
    renderer: Arc<dyn VectorRenderer>,
    rasterizer: Arc<dyn Rasterizer>,
) -> DialogManager {
    DialogManager::new(bot, renderer, rasterizer, Arc::new(SessionStore::new()))
}

/// Manager with the echo renderer and fake rasterizer.
pub fn manager(bot: Arc<MockBot>) -> DialogManager {
    manager_with(bot, Arc::new(EchoRenderer), Arc::new(FakeRaster))
}
