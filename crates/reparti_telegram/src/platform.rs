//! The chat platform seam.
//!
//! Handlers talk to the chat through [`ChatPlatform`] so they can run against
//! Telegram in production and against a recording fake in tests.

use async_trait::async_trait;

use crate::TelegramResult;
use crate::message::MessageMeta;

/// How reply text should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyFormat {
    /// Sent verbatim.
    Plain,
    /// Telegram MarkdownV2; callers escape the text themselves.
    Markdown,
}

/// Operations the bot needs from the chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Reply to the message described by `meta`.
    async fn reply(
        &self,
        meta: &MessageMeta,
        text: &str,
        format: ReplyFormat,
    ) -> TelegramResult<()>;

    /// User ids of the current administrators of a chat.
    async fn chat_administrators(&self, chat_id: i64) -> TelegramResult<Vec<i64>>;
}
