//! In-process department store.
//!
//! Mirrors the PostgreSQL semantics (idempotent inserts, foreign-key check on
//! membership, cascade on department deletion, name and user-id ordering) so
//! handlers can be exercised without a database.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::DatabaseResult;
use crate::models::{AddMemberOutcome, Member, RemoveMemberOutcome};
use crate::store::DepartmentStore;

#[derive(Debug, Default)]
struct Tables {
    departments: BTreeSet<(i64, String)>,
    members: BTreeMap<(i64, String, i64), Option<String>>,
}

/// Department store kept in memory.
#[derive(Debug, Default)]
pub struct MemoryDepartmentStore {
    tables: Mutex<Tables>,
}

impl MemoryDepartmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored departments across all chats.
    pub async fn department_count(&self) -> usize {
        self.tables.lock().await.departments.len()
    }

    /// Number of stored memberships across all chats.
    pub async fn membership_count(&self) -> usize {
        self.tables.lock().await.members.len()
    }
}

#[async_trait]
impl DepartmentStore for MemoryDepartmentStore {
    async fn create_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let mut tables = self.tables.lock().await;
        Ok(tables.departments.insert((chat_id, name.to_string())))
    }

    async fn department_exists(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let tables = self.tables.lock().await;
        Ok(tables.departments.contains(&(chat_id, name.to_string())))
    }

    async fn add_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
        display_name: Option<&str>,
    ) -> DatabaseResult<AddMemberOutcome> {
        let mut tables = self.tables.lock().await;
        if !tables.departments.contains(&(chat_id, name.to_string())) {
            return Ok(AddMemberOutcome::DepartmentNotFound);
        }

        let key = (chat_id, name.to_string(), user_id);
        if tables.members.contains_key(&key) {
            return Ok(AddMemberOutcome::AlreadyMember);
        }
        tables.members.insert(key, display_name.map(str::to_string));
        Ok(AddMemberOutcome::Added)
    }

    async fn remove_member(
        &self,
        chat_id: i64,
        name: &str,
        user_id: i64,
    ) -> DatabaseResult<RemoveMemberOutcome> {
        let mut tables = self.tables.lock().await;
        let removed = tables
            .members
            .remove(&(chat_id, name.to_string(), user_id))
            .map_or(0, |_| 1);
        Ok(RemoveMemberOutcome::from_affected_rows(removed))
    }

    async fn list_departments(&self, chat_id: i64) -> DatabaseResult<Vec<String>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .departments
            .iter()
            .filter(|(chat, _)| *chat == chat_id)
            .map(|(_, name)| name.clone())
            .collect())
    }

    async fn list_members(&self, chat_id: i64, name: &str) -> DatabaseResult<Vec<Member>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .members
            .iter()
            .filter(|((chat, department, _), _)| *chat == chat_id && department == name)
            .map(|((_, _, user_id), display_name)| Member::new(*user_id, display_name.clone()))
            .collect())
    }

    async fn delete_department(&self, chat_id: i64, name: &str) -> DatabaseResult<bool> {
        let mut tables = self.tables.lock().await;
        let deleted = tables.departments.remove(&(chat_id, name.to_string()));
        if deleted {
            tables
                .members
                .retain(|(chat, department, _), _| !(*chat == chat_id && department == name));
        }
        Ok(deleted)
    }
}
