//! Shared helpers for reparti_telegram integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use reparti_database::{
    AddMemberOutcome, DatabaseResult, DepartmentStore, Member, RemoveMemberOutcome,
};
use reparti_error::{DatabaseError, DatabaseErrorKind};
use reparti_telegram::{
    ChatCommand, ChatKind, ChatPlatform, ChatUser, IncomingMessage, MessageMeta, ReplyFormat,
    TelegramError, TelegramErrorKind, TelegramResult,
};
use tokio::sync::Mutex;

pub const GROUP_CHAT: i64 = -100_555;
pub const ADMIN_ID: i64 = 1;
pub const MEMBER_ID: i64 = 2;
pub const OTHER_ID: i64 = 3;

/// A reply captured by [`RecordingPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReply {
    pub chat_id: i64,
    pub message_id: i32,
    pub text: String,
    pub format: ReplyFormat,
}

/// Chat platform fake that records replies and serves a fixed admin list.
pub struct RecordingPlatform {
    admins: Option<Vec<i64>>,
    replies: Mutex<Vec<SentReply>>,
}

impl RecordingPlatform {
    /// Platform whose administrator lookup returns `admins`.
    pub fn with_admins(admins: &[i64]) -> Self {
        Self {
            admins: Some(admins.to_vec()),
            replies: Mutex::new(Vec::new()),
        }
    }

    /// Platform whose administrator lookup always fails.
    pub fn failing_admin_lookup() -> Self {
        Self {
            admins: None,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub async fn replies(&self) -> Vec<SentReply> {
        self.replies.lock().await.clone()
    }

    pub async fn texts(&self) -> Vec<String> {
        self.replies().await.into_iter().map(|r| r.text).collect()
    }
}

#[async_trait]
impl ChatPlatform for RecordingPlatform {
    async fn reply(
        &self,
        meta: &MessageMeta,
        text: &str,
        format: ReplyFormat,
    ) -> TelegramResult<()> {
        self.replies.lock().await.push(SentReply {
            chat_id: *meta.chat_id(),
            message_id: *meta.message_id(),
            text: text.to_string(),
            format,
        });
        Ok(())
    }

    async fn chat_administrators(&self, _chat_id: i64) -> TelegramResult<Vec<i64>> {
        self.admins.clone().ok_or_else(|| {
            TelegramError::new(TelegramErrorKind::AdministratorLookup(
                "Bad Request: member list is inaccessible".into(),
            ))
        })
    }
}

/// Department store whose every operation fails with a connection error.
pub struct FailingStore;

fn unavailable<T>() -> DatabaseResult<T> {
    Err(DatabaseError::new(DatabaseErrorKind::Connection("connection refused".into())))
}

#[async_trait]
impl DepartmentStore for FailingStore {
    async fn create_department(&self, _chat_id: i64, _name: &str) -> DatabaseResult<bool> {
        unavailable()
    }

    async fn department_exists(&self, _chat_id: i64, _name: &str) -> DatabaseResult<bool> {
        unavailable()
    }

    async fn add_member(
        &self,
        _chat_id: i64,
        _name: &str,
        _user_id: i64,
        _display_name: Option<&str>,
    ) -> DatabaseResult<AddMemberOutcome> {
        unavailable()
    }

    async fn remove_member(
        &self,
        _chat_id: i64,
        _name: &str,
        _user_id: i64,
    ) -> DatabaseResult<RemoveMemberOutcome> {
        unavailable()
    }

    async fn list_departments(&self, _chat_id: i64) -> DatabaseResult<Vec<String>> {
        unavailable()
    }

    async fn list_members(&self, _chat_id: i64, _name: &str) -> DatabaseResult<Vec<Member>> {
        unavailable()
    }

    async fn delete_department(&self, _chat_id: i64, _name: &str) -> DatabaseResult<bool> {
        unavailable()
    }
}

pub fn user(id: i64) -> ChatUser {
    ChatUser::new(id, format!("User {id}"))
}

pub fn group_meta(sender: i64, message_id: i32) -> MessageMeta {
    MessageMeta::new(GROUP_CHAT, ChatKind::Group, message_id, Some(user(sender)))
}

pub fn private_meta(sender: i64, message_id: i32) -> MessageMeta {
    MessageMeta::new(sender, ChatKind::Private, message_id, Some(user(sender)))
}

/// A command message; panics if `text` is not one of the bot's commands.
pub fn command(meta: MessageMeta, text: &str, reply_to: Option<ChatUser>) -> IncomingMessage {
    IncomingMessage::Command {
        meta,
        command: ChatCommand::parse(text, None).expect("not a bot command"),
        reply_to,
    }
}

pub fn text(meta: MessageMeta, text: &str) -> IncomingMessage {
    IncomingMessage::Text {
        meta,
        text: text.to_string(),
    }
}
