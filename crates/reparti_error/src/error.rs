//! Top-level error wrapper types.

use crate::ConfigError;
#[cfg(feature = "database")]
use crate::DatabaseError;

/// Every error the reparti crates can surface to the binary.
///
/// # Examples
///
/// ```
/// use reparti_error::{ConfigError, RepartiError};
///
/// let err: RepartiError = ConfigError::new("missing token").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RepartiErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Reparti error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reparti Error: {}", _0)]
pub struct RepartiError(Box<RepartiErrorKind>);

impl RepartiError {
    /// Create a new error from a kind.
    pub fn new(kind: RepartiErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RepartiErrorKind {
        &self.0
    }
}

impl<T> From<T> for RepartiError
where
    T: Into<RepartiErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for reparti operations.
pub type RepartiResult<T> = std::result::Result<T, RepartiError>;
