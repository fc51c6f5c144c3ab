//! Telegram-specific error types.

use derive_getters::Getters;

/// Telegram error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum TelegramErrorKind {
    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// The administrator list of a chat could not be fetched.
    #[display("Administrator lookup failed: {_0}")]
    AdministratorLookup(String),
}

/// Telegram error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Telegram Error: {} at line {} in {}", kind, line, file)]
pub struct TelegramError {
    kind: TelegramErrorKind,
    line: u32,
    #[getter(skip)]
    file: &'static str,
}

impl TelegramError {
    /// Get field `file` from instance of `TelegramError`.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Create a new TelegramError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use reparti_telegram::{TelegramError, TelegramErrorKind};
    ///
    /// let err = TelegramError::new(TelegramErrorKind::MessageSendFailed("Unauthorized".into()));
    /// assert!(err.to_string().contains("Unauthorized"));
    /// ```
    #[track_caller]
    pub fn new(kind: TelegramErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Telegram operations.
pub type TelegramResult<T> = Result<T, TelegramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_request() {
        let err = TelegramError::new(TelegramErrorKind::AdministratorLookup(
            "Bad Request: chat not found".into(),
        ));
        let text = err.to_string();
        assert!(text.starts_with("Telegram Error: Administrator lookup failed"));
        assert!(text.contains("chat not found"));
        assert!(err.file().ends_with("error.rs"));
    }
}
