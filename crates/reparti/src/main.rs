//! reparti binary.
//!
//! Loads configuration, makes sure the database tables exist and runs the
//! Telegram bot until interrupted.

use std::sync::Arc;

use clap::Parser;
use reparti::{
    LogFormat, ObservabilityConfig, PostgresDepartmentStore, RepartiBot, RepartiConfig,
    init_observability,
};
use tracing::{error, info};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    // Load errors are logged only after the subscriber is installed.
    let config = RepartiConfig::load(cli.config.as_deref());
    let json_logs = cli.json_logs
        || matches!(&config, Ok(config) if *config.log_format() == LogFormat::Json);

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability(ObservabilityConfig::new(log_level).with_json_logs(json_logs))?;

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration, not starting");
            return Err(e.into());
        }
    };

    let store = Arc::new(PostgresDepartmentStore::new(config.database_url().clone()));

    info!("Setting up database");
    if let Err(e) = store.ensure_schema().await {
        // Keep serving; handlers that need the database fail individually.
        error!(error = %e, "Database setup failed, continuing without verified tables");
    }

    let bot = RepartiBot::new(config.telegram_token().clone(), store).await;
    bot.start().await;

    Ok(())
}
