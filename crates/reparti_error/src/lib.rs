//! Error types for the reparti bot.
//!
//! This crate provides the error types shared by the reparti workspace.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use reparti_error::{ConfigError, RepartiResult};
//!
//! fn load_token() -> RepartiResult<String> {
//!     Err(ConfigError::new("TELEGRAM_TOKEN is not set"))?
//! }
//!
//! assert!(load_token().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{RepartiError, RepartiErrorKind, RepartiResult};
