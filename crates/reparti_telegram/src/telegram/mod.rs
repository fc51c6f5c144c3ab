//! Telegram integration.
//!
//! - **conversions**: teloxide messages to [`IncomingMessage`](crate::IncomingMessage)
//! - **platform**: [`ChatPlatform`](crate::ChatPlatform) over the Bot API
//! - **client**: dispatcher setup and lifecycle

mod client;
mod conversions;
mod platform;

pub use client::RepartiBot;
pub use conversions::{chat_user, incoming_message, to_db_id};
pub use platform::TelegramPlatform;
