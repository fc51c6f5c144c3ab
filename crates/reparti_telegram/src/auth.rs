//! Authorization for administrative commands.

use tracing::{error, instrument};

use crate::message::{ChatKind, MessageMeta};
use crate::platform::{ChatPlatform, ReplyFormat};
use crate::replies;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// The sender may run administrative commands.
    Granted,
    /// The sender is not an administrator of the chat.
    Denied,
    /// The administrator list could not be fetched. The sender has already
    /// been told to make the bot an administrator and is treated as denied.
    Unverifiable,
}

/// Decide whether the sender of `meta` may run administrative commands.
///
/// Private chats are always authorized. In groups the sender must appear in
/// the live administrator list. A failed lookup counts as unauthorized and
/// posts a diagnostic reply.
#[instrument(skip(platform, meta), fields(chat_id = meta.chat_id()))]
pub async fn check_admin(platform: &dyn ChatPlatform, meta: &MessageMeta) -> Authorization {
    if *meta.chat_kind() == ChatKind::Private {
        return Authorization::Granted;
    }

    let Some(sender) = meta.sender() else {
        return Authorization::Denied;
    };

    match platform.chat_administrators(*meta.chat_id()).await {
        Ok(admins) if admins.contains(sender.user_id()) => Authorization::Granted,
        Ok(_) => Authorization::Denied,
        Err(e) => {
            error!(error = %e, "Failed to check administrator permissions");
            if let Err(e) = platform
                .reply(meta, replies::CANNOT_VERIFY_PERMISSIONS, ReplyFormat::Plain)
                .await
            {
                error!(error = %e, "Failed to send permission diagnostic");
            }
            Authorization::Unverifiable
        }
    }
}
