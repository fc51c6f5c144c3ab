//! PostgreSQL persistence for reparti.
//!
//! This crate owns the two-table schema (`reparti` for departments, `membri`
//! for memberships, linked by a cascading foreign key) and the operations the
//! bot runs against it.
//!
//! # Features
//!
//! - Diesel-based PostgreSQL integration with embedded migrations
//! - Connection-per-operation store, no pooling
//! - An in-memory store with the same semantics for tests
//!
//! # Example
//!
//! ```rust,ignore
//! use reparti_database::{DepartmentStore, PostgresDepartmentStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostgresDepartmentStore::new(std::env::var("DATABASE_URL")?);
//! store.ensure_schema().await?;
//! for name in store.list_departments(-100123).await? {
//!     println!("{name}");
//! }
//! # Ok(())
//! # }
//! ```

mod connection;
mod memory;
mod models;
mod setup;
mod store;

pub mod queries;
pub mod schema;

pub use connection::{connect, establish_connection};
pub use memory::MemoryDepartmentStore;
pub use models::{
    AddMemberOutcome, DepartmentRow, Member, MemberRow, NewDepartment, NewMember,
    RemoveMemberOutcome,
};
pub use setup::ensure_schema;
pub use store::{DepartmentStore, PostgresDepartmentStore};

// Diesel connection type, re-exported for callers driving `queries` directly
pub use diesel::pg::PgConnection;

use reparti_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
