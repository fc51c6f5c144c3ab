//! Row types for the `reparti` and `membri` tables and the outcomes of
//! membership changes.

use derive_getters::Getters;
use diesel::prelude::*;

use crate::schema::{membri, reparti};

/// Database row for the `reparti` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = reparti)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentRow {
    pub chat_id: i64,
    pub reparto_nome: String,
}

/// Insertable struct for the `reparti` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reparti)]
pub struct NewDepartment<'a> {
    pub chat_id: i64,
    pub reparto_nome: &'a str,
}

/// Database row for the `membri` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = membri)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    pub chat_id: i64,
    pub reparto_nome: String,
    pub user_id: i64,
    pub user_name: Option<String>,
}

/// Insertable struct for the `membri` table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = membri)]
pub struct NewMember<'a> {
    pub chat_id: i64,
    pub reparto_nome: &'a str,
    pub user_id: i64,
    pub user_name: Option<&'a str>,
}

/// A department member as listed to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Member {
    user_id: i64,
    display_name: Option<String>,
}

impl Member {
    /// Create a member entry.
    pub fn new(user_id: i64, display_name: Option<String>) -> Self {
        Self {
            user_id,
            display_name,
        }
    }
}

impl From<(i64, Option<String>)> for Member {
    fn from((user_id, display_name): (i64, Option<String>)) -> Self {
        Self::new(user_id, display_name)
    }
}

/// Result of adding a user to a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AddMemberOutcome {
    /// A new membership row was stored.
    #[display("added")]
    Added,
    /// The user was already a member; nothing changed.
    #[display("already a member")]
    AlreadyMember,
    /// The department does not exist in this chat; nothing was stored.
    #[display("department not found")]
    DepartmentNotFound,
}

/// Result of removing a user from a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RemoveMemberOutcome {
    /// Exactly one membership row was deleted.
    #[display("removed")]
    Removed,
    /// No row matched; the user was not in the department.
    #[display("not a member")]
    NotAMember,
}

impl RemoveMemberOutcome {
    /// Classify the affected-row count of the DELETE that ran.
    pub fn from_affected_rows(rows: usize) -> Self {
        if rows == 0 {
            Self::NotAMember
        } else {
            Self::Removed
        }
    }
}
