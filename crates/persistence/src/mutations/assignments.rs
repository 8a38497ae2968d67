// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment and slot binding mutations.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use tracing::debug;
use unisched_domain::{AssignmentKey, RoomId, SlotRequest};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{assignments, slot_bindings};
use crate::error::PersistenceError;

/// Inserts an assignment row.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `key` - Teacher, subject, group and period
///
/// # Returns
///
/// The assignment ID assigned by the database.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the key already exists.
pub fn create_assignment(
    conn: &mut SqliteConnection,
    key: &AssignmentKey,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(assignments::table)
        .values((
            assignments::teacher_id.eq(key.teacher_id.value()),
            assignments::career_id.eq(key.subject.career_id().value()),
            assignments::subject_code.eq(key.subject.code()),
            assignments::group_id.eq(key.group_id.value()),
            assignments::period_id.eq(key.period_id.value()),
        ))
        .execute(conn)?;

    let assignment_id: i64 = conn.get_last_insert_rowid()?;
    debug!(assignment_id, %key, "Inserted assignment");
    Ok(assignment_id)
}

/// Rewrites the key of an existing assignment and bumps `updated_at`.
///
/// # Errors
///
/// Returns `PersistenceError::AssignmentNotFound` if no row was updated.
pub fn update_assignment_key(
    conn: &mut SqliteConnection,
    assignment_id: i64,
    key: &AssignmentKey,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        assignments::table.filter(assignments::assignment_id.eq(assignment_id)),
    )
    .set((
        assignments::teacher_id.eq(key.teacher_id.value()),
        assignments::career_id.eq(key.subject.career_id().value()),
        assignments::subject_code.eq(key.subject.code()),
        assignments::group_id.eq(key.group_id.value()),
        assignments::period_id.eq(key.period_id.value()),
        assignments::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::AssignmentNotFound(assignment_id));
    }
    Ok(())
}

/// Inserts one slot binding.
///
/// `teacher_id` must be the owning assignment's teacher; the unique index
/// on `(teacher_id, day_id, timeslot_id)` relies on it.
///
/// # Returns
///
/// The slot binding ID assigned by the database.
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the teacher or room is
/// already bound at that day and timeslot.
pub fn insert_slot_binding(
    conn: &mut SqliteConnection,
    assignment_id: i64,
    teacher_id: i64,
    slot: &SlotRequest,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(slot_bindings::table)
        .values((
            slot_bindings::assignment_id.eq(assignment_id),
            slot_bindings::teacher_id.eq(teacher_id),
            slot_bindings::day_id.eq(slot.day_id.value()),
            slot_bindings::timeslot_id.eq(slot.timeslot_id.value()),
            slot_bindings::room_id.eq(slot.room_id.map(RoomId::value)),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}

/// Deletes every slot binding of an assignment.
///
/// # Returns
///
/// The number of bindings removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_slot_bindings(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<usize, PersistenceError> {
    Ok(
        diesel::delete(slot_bindings::table.filter(slot_bindings::assignment_id.eq(assignment_id)))
            .execute(conn)?,
    )
}

/// Deletes an assignment. Its slot bindings go with it via `ON DELETE CASCADE`.
///
/// # Returns
///
/// `true` if a row was deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<bool, PersistenceError> {
    let deleted: usize =
        diesel::delete(assignments::table.filter(assignments::assignment_id.eq(assignment_id)))
            .execute(conn)?;
    Ok(deleted > 0)
}
