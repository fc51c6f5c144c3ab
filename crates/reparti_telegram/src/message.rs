//! Platform-neutral view of an inbound chat message.
//!
//! A message either carries one of the bot's commands or is free text for the
//! tag scanner. Whether the message replies to another user is explicit in
//! the command variant.

use derive_getters::Getters;

use crate::commands::ChatCommand;

/// Kind of chat a message arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    /// One-to-one conversation with the bot.
    Private,
    /// Group, supergroup or channel.
    Group,
}

/// A user as seen by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ChatUser {
    user_id: i64,
    display_name: String,
}

impl ChatUser {
    /// Create a user entry.
    pub fn new(user_id: i64, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }
}

/// Where a message came from and how to answer it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MessageMeta {
    chat_id: i64,
    chat_kind: ChatKind,
    message_id: i32,
    sender: Option<ChatUser>,
}

impl MessageMeta {
    /// Create message metadata.
    pub fn new(
        chat_id: i64,
        chat_kind: ChatKind,
        message_id: i32,
        sender: Option<ChatUser>,
    ) -> Self {
        Self {
            chat_id,
            chat_kind,
            message_id,
            sender,
        }
    }
}

/// An inbound message the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingMessage {
    /// One of the bot's commands.
    Command {
        /// Origin of the message.
        meta: MessageMeta,
        /// Parsed command and argument.
        command: ChatCommand,
        /// Author of the message being replied to, if any.
        reply_to: Option<ChatUser>,
    },
    /// Free text to scan for department tags.
    Text {
        /// Origin of the message.
        meta: MessageMeta,
        /// Raw message text.
        text: String,
    },
}

impl IncomingMessage {
    /// Origin of the message.
    pub fn meta(&self) -> &MessageMeta {
        match self {
            Self::Command { meta, .. } | Self::Text { meta, .. } => meta,
        }
    }
}
