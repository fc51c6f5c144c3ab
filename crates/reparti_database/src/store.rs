//! The department store seam and its PostgreSQL implementation.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::Connection;
use diesel::pg::PgConnection;
use reparti_error::{DatabaseError, DatabaseErrorKind};
use tracing::instrument;

use crate::models::{AddMemberOutcome, Member, RemoveMemberOutcome};
use crate::{DatabaseResult, connection, queries, setup};

/// Department and membership storage, scoped per chat.
///
/// Department names are passed already normalised (lower case); the store
/// does not alter them.
#[async_trait]
pub trait DepartmentStore: Send + Sync {
    /// Insert a department. Returns `false` when it already existed.
    async fn create_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool>;

    /// Whether the department exists in the chat.
    async fn department_exists(&self, chat_id: i64, name: &str) -> DatabaseResult<bool>;

    /// Add a member to an existing department.
    async fn add_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
        display_name: Option<&str>,
    ) -> DatabaseResult<AddMemberOutcome>;

    /// Remove a member from a department.
    async fn remove_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
    ) -> DatabaseResult<RemoveMemberOutcome>;

    /// Department names of the chat, in store order.
    async fn list_departments(&self, chat_id: i64) -> DatabaseResult<Vec<String>>;

    /// Members of a department.
    async fn list_members(&self, chat_id: i64, name: &str) -> DatabaseResult<Vec<Member>>;

    /// Delete a department together with its memberships.
    async fn delete_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool>;
}

/// PostgreSQL-backed department store.
///
/// Holds only the connection string. Each operation opens its own connection
/// on a blocking thread, runs inside a transaction and drops the connection
/// before returning, whether the operation succeeded or not.
///
/// # Example
/// ```no_run
/// use reparti_database::{DepartmentStore, PostgresDepartmentStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = PostgresDepartmentStore::new("postgres://localhost/reparti");
/// store.ensure_schema().await?;
/// store.create_department(-100123, "@aero").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PostgresDepartmentStore {
    database_url: Arc<str>,
}

impl std::fmt::Debug for PostgresDepartmentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDepartmentStore")
            .field("database_url", &"<redacted>")
            .finish()
    }
}

impl PostgresDepartmentStore {
    /// Create a store for the given connection string.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: Arc::from(database_url.into()),
        }
    }

    /// Create the tables if they do not exist yet.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> DatabaseResult<()> {
        let url = Arc::clone(&self.database_url);
        tokio::task::spawn_blocking(move || {
            let mut conn = connection::connect(&url)?;
            setup::ensure_schema(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
    }

    /// Run `op` in a transaction on a freshly opened connection.
    async fn with_transaction<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
    {
        let url = Arc::clone(&self.database_url);
        tokio::task::spawn_blocking(move || {
            let mut conn = connection::connect(&url)?;
            conn.transaction(op)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
    }
}

#[async_trait]
impl DepartmentStore for PostgresDepartmentStore {
    #[instrument(skip(self))]
    async fn create_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let name = name.to_string();
        self.with_transaction(move |conn| queries::create_department(conn, chat_id, &name))
            .await
    }

    #[instrument(skip(self))]
    async fn department_exists(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let name = name.to_string();
        self.with_transaction(move |conn| queries::department_exists(conn, chat_id, &name))
            .await
    }

    #[instrument(skip(self, display_name))]
    async fn add_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
        display_name: Option<&str>,
    ) -> DatabaseResult<AddMemberOutcome> {
        let name = name.to_string();
        let display_name = display_name.map(str::to_string);
        self.with_transaction(move |conn| {
            queries::add_member(conn, chat_id, &name, user_id, display_name.as_deref())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
    ) -> DatabaseResult<RemoveMemberOutcome> {
        let name = name.to_string();
        self.with_transaction(move |conn| queries::remove_member(conn, chat_id, &name, user_id))
            .await
    }

    #[instrument(skip(self))]
    async fn list_departments(&self, chat_id: i64) -> DatabaseResult<Vec<String>> {
        self.with_transaction(move |conn| queries::list_departments(conn, chat_id))
            .await
    }

    #[instrument(skip(self))]
    async fn list_members(&self, chat_id: i64, name: &str) -> DatabaseResult<Vec<Member>> {
        let name = name.to_string();
        self.with_transaction(move |conn| queries::list_members(conn, chat_id, &name))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let name = name.to_string();
        self.with_transaction(move |conn| queries::delete_department(conn, chat_id, &name))
            .await
    }
}
