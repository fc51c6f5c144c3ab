//! reparti: department notifications for Telegram groups.
//!
//! Administrators create departments such as `@aero` and add members by
//! replying to their messages; whenever a message mentions a department,
//! the bot replies with a mention of every member.
//!
//! This crate wires the pieces together for the `reparti` binary:
//! configuration, logging and the re-exports of the workspace crates.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod observability;

pub use config::{LogFormat, RepartiConfig};
pub use observability::{ObservabilityConfig, init_observability};

pub use reparti_database::PostgresDepartmentStore;
pub use reparti_error::RepartiErrorKind;
pub use reparti_telegram::RepartiBot;
