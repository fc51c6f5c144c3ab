//! Department tag scanner.
//!
//! Every free-text message is lower-cased and checked against the
//! departments of its chat. The first department (in store order) that
//! occurs as a substring is notified; any later matches are ignored.

use reparti_database::{DepartmentStore, Member};
use teloxide::utils::markdown;
use tracing::{debug, error, info, instrument};

use crate::message::MessageMeta;
use crate::platform::{ChatPlatform, ReplyFormat};

/// First department name contained in `text`.
///
/// `text` must already be lower case; department names are stored lower case.
pub fn find_department<'a>(text: &str, departments: &'a [String]) -> Option<&'a str> {
    departments
        .iter()
        .map(String::as_str)
        .find(|name| text.contains(name))
}

/// Invisible MarkdownV2 link that mentions a user by id.
pub fn mention_token(user_id: i64) -> String {
    format!("[\u{200B}](tg://user?id={user_id})")
}

/// MarkdownV2 notification for a department, or `None` when it has no members.
pub fn notification_text(department: &str, members: &[Member]) -> Option<String> {
    if members.is_empty() {
        return None;
    }

    let header = markdown::escape(&format!("🔔 Chiamata per {department}:"));
    let mentions = members
        .iter()
        .map(|member| mention_token(*member.user_id()))
        .collect::<Vec<_>>()
        .join(" ");

    Some(format!("{header}\n{mentions}"))
}

/// Scan a text message and notify the first matching department.
///
/// Errors are logged and swallowed.
#[instrument(skip_all, fields(chat_id = meta.chat_id()))]
pub async fn scan_message(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    text: &str,
) {
    if let Err(e) = notify_first_match(platform, store, meta, text).await {
        error!(error = %e, "Tag scan failed");
    }
}

async fn notify_first_match(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    text: &str,
) -> Result<(), ScanError> {
    let text = text.to_lowercase();
    let chat_id = *meta.chat_id();

    let departments = store.list_departments(chat_id).await?;
    let Some(department) = find_department(&text, &departments) else {
        return Ok(());
    };

    let members = store.list_members(chat_id, department).await?;
    let Some(notification) = notification_text(department, &members) else {
        debug!(department, "Matched department has no members");
        return Ok(());
    };

    platform
        .reply(meta, &notification, ReplyFormat::Markdown)
        .await?;
    info!(department, members = members.len(), "Department notified");
    Ok(())
}

/// Either side of a scan can fail.
#[derive(Debug, derive_more::Display, derive_more::From)]
enum ScanError {
    #[display("{_0}")]
    Database(reparti_error::DatabaseError),
    #[display("{_0}")]
    Telegram(crate::TelegramError),
}
