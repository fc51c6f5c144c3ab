//! [`ChatPlatform`] backed by the Telegram Bot API.

use async_trait::async_trait;
use teloxide::Bot;
use teloxide::payloads::SendMessageSetters;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, MessageId, ParseMode, ReplyParameters};
use tracing::instrument;

use super::conversions::to_db_id;
use crate::message::MessageMeta;
use crate::platform::{ChatPlatform, ReplyFormat};
use crate::{TelegramError, TelegramErrorKind, TelegramResult};

/// Telegram implementation of [`ChatPlatform`].
#[derive(Clone)]
pub struct TelegramPlatform {
    bot: Bot,
}

impl TelegramPlatform {
    /// Wrap a teloxide bot.
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatPlatform for TelegramPlatform {
    #[instrument(skip(self, meta, text), fields(chat_id = meta.chat_id()))]
    async fn reply(
        &self,
        meta: &MessageMeta,
        text: &str,
        format: ReplyFormat,
    ) -> TelegramResult<()> {
        let request = self
            .bot
            .send_message(ChatId(*meta.chat_id()), text)
            .reply_parameters(ReplyParameters::new(MessageId(*meta.message_id())));

        let request = match format {
            ReplyFormat::Plain => request,
            ReplyFormat::Markdown => request.parse_mode(ParseMode::MarkdownV2),
        };

        request.await.map_err(|e| {
            TelegramError::new(TelegramErrorKind::MessageSendFailed(e.to_string()))
        })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn chat_administrators(&self, chat_id: i64) -> TelegramResult<Vec<i64>> {
        let admins = self
            .bot
            .get_chat_administrators(ChatId(chat_id))
            .await
            .map_err(|e| {
                TelegramError::new(TelegramErrorKind::AdministratorLookup(e.to_string()))
            })?;

        Ok(admins.iter().map(|member| to_db_id(member.user.id)).collect())
    }
}
