//! Telegram bot client setup and lifecycle management.

use std::sync::Arc;

use reparti_database::DepartmentStore;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::prelude::Requester;
use teloxide::types::{BotCommand, Message, Update};
use teloxide::Bot;
use tracing::{debug, info, instrument, warn};

use super::conversions::incoming_message;
use super::platform::TelegramPlatform;
use crate::TelegramResult;
use crate::commands::CommandKind;
use crate::router::UpdateRouter;

/// Username the bot answers to in `/command@username`.
#[derive(Debug, Clone, Default)]
struct BotIdentity {
    username: Option<String>,
}

/// Main Telegram bot client for reparti.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use reparti_database::PostgresDepartmentStore;
/// use reparti_telegram::RepartiBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("TELEGRAM_TOKEN")?;
///     let store = PostgresDepartmentStore::new(std::env::var("DATABASE_URL")?);
///
///     let bot = RepartiBot::new(token, Arc::new(store)).await;
///     bot.start().await;
///     Ok(())
/// }
/// ```
pub struct RepartiBot {
    bot: Bot,
    router: UpdateRouter,
    identity: BotIdentity,
}

impl RepartiBot {
    /// Create the bot, look up its username and register the command menu.
    ///
    /// Both lookups are best effort; failures are logged and the bot still
    /// starts.
    #[instrument(skip(token, store), fields(token_len = token.len()))]
    pub async fn new(token: String, store: Arc<dyn DepartmentStore>) -> Self {
        info!("Initializing reparti Telegram bot");
        let bot = Bot::new(token);

        let identity = match bot.get_me().await {
            Ok(me) => {
                info!(username = %me.username(), bot_id = %me.id, "Bot identity resolved");
                BotIdentity {
                    username: Some(me.username().to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "Could not resolve bot identity");
                BotIdentity::default()
            }
        };

        let commands = CommandKind::ALL
            .into_iter()
            .map(|kind| BotCommand::new(kind.name(), kind.description()))
            .collect::<Vec<_>>();
        if let Err(e) = bot.set_my_commands(commands).await {
            warn!(error = %e, "Failed to register command menu");
        }

        Self {
            bot,
            router: UpdateRouter::new(store),
            identity,
        }
    }

    /// Poll for updates until the process is interrupted (Ctrl+C).
    ///
    /// Updates from different chats are handled concurrently, updates from
    /// the same chat in arrival order.
    pub async fn start(self) {
        info!("Starting Telegram long polling");

        let handler = Update::filter_message().endpoint(on_message);

        Dispatcher::builder(self.bot, handler)
            .dependencies(dptree::deps![self.router, self.identity])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram bot stopped");
    }
}

async fn on_message(
    bot: Bot,
    msg: Message,
    router: UpdateRouter,
    identity: BotIdentity,
) -> TelegramResult<()> {
    let Some(incoming) = incoming_message(&msg, identity.username.as_deref()) else {
        debug!(chat_id = %msg.chat.id, "Ignoring message");
        return Ok(());
    };

    router.route(&TelegramPlatform::new(bot), &incoming).await;
    Ok(())
}
