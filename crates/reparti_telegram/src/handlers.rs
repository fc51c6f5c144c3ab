//! Command handlers.
//!
//! Each handler checks authorization where required, validates the single
//! department argument, runs one store operation and replies. Store errors
//! are logged and turned into replies; nothing propagates to the dispatcher.

use reparti_database::{AddMemberOutcome, DepartmentStore, RemoveMemberOutcome};
use tracing::{error, info, instrument};

use crate::auth::{Authorization, check_admin};
use crate::commands::{ChatCommand, CommandArgument, CommandKind, TAG_MARKER};
use crate::message::{ChatUser, MessageMeta};
use crate::platform::{ChatPlatform, ReplyFormat};
use crate::replies;

/// Send a plain reply, logging delivery failures.
pub(crate) async fn send(platform: &dyn ChatPlatform, meta: &MessageMeta, text: &str) {
    if let Err(e) = platform.reply(meta, text, ReplyFormat::Plain).await {
        error!(chat_id = meta.chat_id(), error = %e, "Failed to send reply");
    }
}

/// Run one of the bot's commands.
#[instrument(
    skip_all,
    fields(chat_id = meta.chat_id(), command = %command.kind())
)]
pub async fn handle_command(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    command: &ChatCommand,
    reply_to: Option<&ChatUser>,
) {
    let kind = command.kind();

    if kind.requires_admin() {
        match check_admin(platform, meta).await {
            Authorization::Granted => {}
            Authorization::Denied | Authorization::Unverifiable => {
                send(platform, meta, replies::ADMIN_ONLY).await;
                return;
            }
        }
    }

    match kind {
        CommandKind::CreateDepartment => {
            create_department(platform, store, meta, command.argument()).await
        }
        CommandKind::AddMember | CommandKind::RemoveMember => {
            let Some(target) = reply_to else {
                send(platform, meta, &replies::reply_required(kind)).await;
                return;
            };
            let CommandArgument::Department(name) = command.argument() else {
                send(platform, meta, &replies::usage(kind)).await;
                return;
            };
            if kind == CommandKind::AddMember {
                add_member(platform, store, meta, name, target).await
            } else {
                remove_member(platform, store, meta, name, target).await
            }
        }
        CommandKind::ListMembers => list_members(platform, store, meta, command.argument()).await,
    }
}

async fn create_department(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    argument: &CommandArgument,
) {
    let CommandArgument::Department(name) = argument else {
        send(platform, meta, &replies::usage(CommandKind::CreateDepartment)).await;
        return;
    };

    if !name.starts_with(TAG_MARKER) {
        send(platform, meta, &replies::malformed_department()).await;
        return;
    }

    let text = match store.create_department(*meta.chat_id(), name).await {
        Ok(inserted) => {
            info!(department = %name, inserted, "Department created");
            replies::department_created(name)
        }
        Err(e) => {
            error!(department = %name, error = %e, "Failed to create department");
            replies::department_create_failed(name)
        }
    };
    send(platform, meta, &text).await;
}

async fn add_member(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    name: &str,
    target: &ChatUser,
) {
    let result = store
        .add_member(
            *meta.chat_id(),
            name,
            *target.user_id(),
            Some(target.display_name().as_str()),
        )
        .await;

    let text = match result {
        Ok(AddMemberOutcome::Added | AddMemberOutcome::AlreadyMember) => {
            info!(department = %name, user_id = target.user_id(), "Member added");
            replies::member_added(target.display_name(), name)
        }
        Ok(AddMemberOutcome::DepartmentNotFound) => replies::department_not_found(name),
        Err(e) => {
            error!(department = %name, error = %e, "Failed to add member");
            replies::GENERIC_ERROR.to_string()
        }
    };
    send(platform, meta, &text).await;
}

async fn remove_member(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    name: &str,
    target: &ChatUser,
) {
    let text = match store
        .remove_member(*meta.chat_id(), name, *target.user_id())
        .await
    {
        Ok(RemoveMemberOutcome::Removed) => {
            info!(department = %name, user_id = target.user_id(), "Member removed");
            replies::member_removed(target.display_name(), name)
        }
        Ok(RemoveMemberOutcome::NotAMember) => replies::not_a_member(target.display_name(), name),
        Err(e) => {
            error!(department = %name, error = %e, "Failed to remove member");
            replies::GENERIC_ERROR.to_string()
        }
    };
    send(platform, meta, &text).await;
}

async fn list_members(
    platform: &dyn ChatPlatform,
    store: &dyn DepartmentStore,
    meta: &MessageMeta,
    argument: &CommandArgument,
) {
    let CommandArgument::Department(name) = argument else {
        send(platform, meta, &replies::usage(CommandKind::ListMembers)).await;
        return;
    };

    let text = match store.list_members(*meta.chat_id(), name).await {
        Ok(members) if members.is_empty() => replies::no_members(name),
        Ok(members) => replies::member_list(name, &members),
        Err(e) => {
            error!(department = %name, error = %e, "Failed to list members");
            replies::GENERIC_ERROR.to_string()
        }
    };
    send(platform, meta, &text).await;
}
