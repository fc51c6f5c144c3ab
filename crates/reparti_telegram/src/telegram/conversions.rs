//! Conversions from teloxide types to the bot's message model.

use teloxide::types::{Message, User, UserId};

use crate::commands::{ChatCommand, is_command};
use crate::message::{ChatKind, ChatUser, IncomingMessage, MessageMeta};

/// Convert a Telegram user id (u64) to a database id (i64).
///
/// Telegram user ids fit in 52 bits, PostgreSQL stores them as signed bigints.
pub fn to_db_id(id: UserId) -> i64 {
    id.0 as i64
}

/// The bot's view of a Telegram user.
pub fn chat_user(user: &User) -> ChatUser {
    ChatUser::new(to_db_id(user.id), user.full_name())
}

/// Classify a Telegram message.
///
/// Returns `None` for messages without text (media, service messages) and
/// for commands that are not the bot's own.
pub fn incoming_message(msg: &Message, bot_username: Option<&str>) -> Option<IncomingMessage> {
    let text = msg.text()?;

    let chat_kind = if msg.chat.is_private() {
        ChatKind::Private
    } else {
        ChatKind::Group
    };
    let meta = MessageMeta::new(
        msg.chat.id.0,
        chat_kind,
        msg.id.0,
        msg.from.as_ref().map(chat_user),
    );

    if !is_command(text) {
        return Some(IncomingMessage::Text {
            meta,
            text: text.to_string(),
        });
    }

    let command = ChatCommand::parse(text, bot_username)?;
    let reply_to = msg
        .reply_to_message()
        .and_then(|replied| replied.from.as_ref())
        .map(chat_user);

    Some(IncomingMessage::Command {
        meta,
        command,
        reply_to,
    })
}
