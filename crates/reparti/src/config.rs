//! Process configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. `reparti.toml` in the working directory (optional), or the file given
//!    with `--config` (required when given)
//! 2. `TELEGRAM_TOKEN`, `DATABASE_URL` and `REPARTI_LOG_FORMAT` from the
//!    environment
//!
//! ```toml
//! telegram_token = "123456:ABC..."
//! database_url = "postgres://reparti@localhost/reparti"
//! log_format = "json"
//! ```

use std::path::Path;

use config::{Config, File};
use derive_getters::Getters;
use reparti_error::{ConfigError, RepartiResult};
use serde::Deserialize;

/// Name (without extension) of the optional configuration file.
pub const DEFAULT_CONFIG_NAME: &str = "reparti";

/// Environment variable holding the bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "REPARTI_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    telegram_token: Option<String>,
    database_url: Option<String>,
    log_format: Option<LogFormat>,
}

/// Validated configuration. Token and database URL are required.
#[derive(Clone, Getters)]
pub struct RepartiConfig {
    telegram_token: String,
    database_url: String,
    log_format: LogFormat,
}

impl std::fmt::Debug for RepartiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepartiConfig")
            .field("telegram_token", &"<redacted>")
            .field("database_url", &"<redacted>")
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl RepartiConfig {
    /// Load configuration from the optional file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file cannot be read or parsed,
    /// or if the token or database URL is missing.
    pub fn load(path: Option<&Path>) -> RepartiResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load configuration, reading environment values through `lookup`.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RepartiResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let raw: RawConfig = Config::builder()
            .add_source(file)
            .set_override_option("telegram_token", lookup(TELEGRAM_TOKEN_VAR))
            .and_then(|builder| {
                builder.set_override_option("database_url", lookup(DATABASE_URL_VAR))
            })
            .and_then(|builder| builder.set_override_option("log_format", lookup(LOG_FORMAT_VAR)))
            .and_then(|builder| builder.build())
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

        Ok(Self {
            telegram_token: required(raw.telegram_token, TELEGRAM_TOKEN_VAR)?,
            database_url: required(raw.database_url, DATABASE_URL_VAR)?,
            log_format: raw.log_format.unwrap_or_default(),
        })
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::new(format!("{} is not set", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        assert!(required(Some("  ".into()), TELEGRAM_TOKEN_VAR).is_err());
        assert!(required(None, TELEGRAM_TOKEN_VAR).is_err());
        assert_eq!(required(Some("x".into()), TELEGRAM_TOKEN_VAR).unwrap(), "x");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = RepartiConfig {
            telegram_token: "123:secret".into(),
            database_url: "postgres://user:pw@host/db".into(),
            log_format: LogFormat::Text,
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(!debug.contains("pw"));
    }
}
