//! Telegram front end for reparti.
//!
//! Group administrators define departments (tags such as `@aero`) and assign
//! members to them; any message mentioning a department tag gets a reply
//! that mentions every member of that department.
//!
//! # Layers
//!
//! - [`IncomingMessage`] - platform-neutral model of a command or text message
//! - [`ChatCommand`] - command parsing with explicit missing-argument handling
//! - [`check_admin`] - authorization against the chat's administrator list
//! - [`handle_command`] / [`scan_message`] - command handlers and tag scanner
//! - [`UpdateRouter`] - dispatches a message to one of the above
//! - [`RepartiBot`] / [`TelegramPlatform`] - teloxide dispatcher and Bot API
//!
//! Handlers only see the [`ChatPlatform`] and
//! [`DepartmentStore`](reparti_database::DepartmentStore) traits.

#![warn(missing_docs)]

mod auth;
mod commands;
mod error;
mod handlers;
mod message;
mod platform;
mod router;
mod scanner;
mod telegram;

pub mod replies;

pub use auth::{Authorization, check_admin};
pub use commands::{ChatCommand, CommandArgument, CommandKind, TAG_MARKER, is_command};
pub use error::{TelegramError, TelegramErrorKind, TelegramResult};
pub use handlers::handle_command;
pub use message::{ChatKind, ChatUser, IncomingMessage, MessageMeta};
pub use platform::{ChatPlatform, ReplyFormat};
pub use router::UpdateRouter;
pub use scanner::{find_department, mention_token, notification_text, scan_message};
pub use telegram::{RepartiBot, TelegramPlatform, chat_user, incoming_message, to_db_id};
