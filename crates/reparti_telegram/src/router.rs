//! Routes inbound messages to the command handlers or the tag scanner.

use std::sync::Arc;

use reparti_database::DepartmentStore;

use crate::handlers::handle_command;
use crate::message::IncomingMessage;
use crate::platform::ChatPlatform;
use crate::scanner::scan_message;

/// Shared state for every update.
///
/// Holds no connections; each handler call goes through the store, which
/// opens and releases its own.
#[derive(Clone)]
pub struct UpdateRouter {
    store: Arc<dyn DepartmentStore>,
}

impl UpdateRouter {
    /// Create a router over the given store.
    pub fn new(store: Arc<dyn DepartmentStore>) -> Self {
        Self { store }
    }

    /// The store handlers run against.
    pub fn store(&self) -> &Arc<dyn DepartmentStore> {
        &self.store
    }

    /// Handle one inbound message.
    pub async fn route(&self, platform: &dyn ChatPlatform, message: &IncomingMessage) {
        match message {
            IncomingMessage::Command {
                meta,
                command,
                reply_to,
            } => {
                handle_command(
                    platform,
                    self.store.as_ref(),
                    meta,
                    command,
                    reply_to.as_ref(),
                )
                .await
            }
            IncomingMessage::Text { meta, text } => {
                scan_message(platform, self.store.as_ref(), meta, text).await
            }
        }
    }
}
