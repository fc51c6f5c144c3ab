//! CLI definitions.

use clap::Parser;
use std::path::PathBuf;

/// reparti - department notifications for Telegram groups
///
/// The bot token and database URL come from `TELEGRAM_TOKEN` and
/// `DATABASE_URL` (a `.env` file is honoured) or from the configuration file.
#[derive(Parser, Debug)]
#[command(name = "reparti")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./reparti.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, env = "REPARTI_JSON_LOGS")]
    pub json_logs: bool,
}
