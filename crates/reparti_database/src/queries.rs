//! Synchronous department and membership queries.
//!
//! Every function takes an open connection and is scoped to a single chat.
//! All values travel as bound parameters through the Diesel query builder.

use crate::DatabaseResult;
use crate::models::{AddMemberOutcome, Member, NewDepartment, NewMember, RemoveMemberOutcome};
use crate::schema::{membri, reparti};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{debug, instrument};

/// Insert a department. Returns `false` when it already existed.
#[instrument(skip(conn))]
pub fn create_department(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
) -> DatabaseResult<bool> {
    let inserted = diesel::insert_into(reparti::table)
        .values(&NewDepartment {
            chat_id,
            reparto_nome: name,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;

    debug!(inserted, "Department insert finished");
    Ok(inserted > 0)
}

/// Whether the department exists in the chat.
#[instrument(skip(conn))]
pub fn department_exists(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
) -> DatabaseResult<bool> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        reparti::table
            .filter(reparti::chat_id.eq(chat_id))
            .filter(reparti::reparto_nome.eq(name)),
    ))
    .get_result(conn)?;

    Ok(exists)
}

/// Add a member to an existing department.
///
/// Checks for the department first so a missing department is reported as an
/// outcome rather than a foreign-key violation.
#[instrument(skip(conn, display_name))]
pub fn add_member(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
    user_id: i64,
    display_name: Option<&str>,
) -> DatabaseResult<AddMemberOutcome> {
    if !department_exists(conn, chat_id, name)? {
        return Ok(AddMemberOutcome::DepartmentNotFound);
    }

    let inserted = diesel::insert_into(membri::table)
        .values(&NewMember {
            chat_id,
            reparto_nome: name,
            user_id,
            user_name: display_name,
        })
        .on_conflict_do_nothing()
        .execute(conn)?;

    Ok(if inserted > 0 {
        AddMemberOutcome::Added
    } else {
        AddMemberOutcome::AlreadyMember
    })
}

/// Remove a member, classifying the outcome from the DELETE's own row count.
#[instrument(skip(conn))]
pub fn remove_member(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
    user_id: i64,
) -> DatabaseResult<RemoveMemberOutcome> {
    let deleted = diesel::delete(
        membri::table
            .filter(membri::chat_id.eq(chat_id))
            .filter(membri::reparto_nome.eq(name))
            .filter(membri::user_id.eq(user_id)),
    )
    .execute(conn)?;

    Ok(RemoveMemberOutcome::from_affected_rows(deleted))
}

/// Names of every department registered in the chat, ordered by name.
#[instrument(skip(conn))]
pub fn list_departments(conn: &mut PgConnection, chat_id: i64) -> DatabaseResult<Vec<String>> {
    let names = reparti::table
        .filter(reparti::chat_id.eq(chat_id))
        .select(reparti::reparto_nome)
        .order(reparti::reparto_nome.asc())
        .load::<String>(conn)?;

    Ok(names)
}

/// Members of a department, ordered by user id.
#[instrument(skip(conn))]
pub fn list_members(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
) -> DatabaseResult<Vec<Member>> {
    let rows = membri::table
        .filter(membri::chat_id.eq(chat_id))
        .filter(membri::reparto_nome.eq(name))
        .select((membri::user_id, membri::user_name))
        .order(membri::user_id.asc())
        .load::<(i64, Option<String>)>(conn)?;

    Ok(rows.into_iter().map(Member::from).collect())
}

/// Delete a department; its memberships go with it through the cascade.
#[instrument(skip(conn))]
pub fn delete_department(
    conn: &mut PgConnection,
    chat_id: i64,
    name: &str,
) -> DatabaseResult<bool> {
    let deleted = diesel::delete(
        reparti::table
            .filter(reparti::chat_id.eq(chat_id))
            .filter(reparti::reparto_nome.eq(name)),
    )
    .execute(conn)?;

    Ok(deleted > 0)
}
