// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog (reference data) mutations.
//!
//! Identifiers are supplied by the caller. Inserting an id that already
//! exists fails with `PersistenceError::UniqueViolation`.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::Time;
use unisched_domain::{Career, Group, ManagementPeriod, Room, Subject, Teacher, Timeslot};

use crate::diesel_schema::{
    careers, class_groups, management_periods, rooms, subjects, teachers, timeslots,
};
use crate::error::PersistenceError;

/// Formats a time as zero-padded `HH:MM:SS` so text order matches time order.
fn storage_time(clock: Time) -> Result<String, PersistenceError> {
    clock
        .format(&time::macros::format_description!(
            "[hour]:[minute]:[second]"
        ))
        .map_err(|e| PersistenceError::Database(format!("Cannot format time {clock}: {e}")))
}

/// Inserts a career.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_career(conn: &mut SqliteConnection, career: &Career) -> Result<(), PersistenceError> {
    diesel::insert_into(careers::table)
        .values((
            careers::career_id.eq(career.career_id.value()),
            careers::name.eq(&career.name),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a subject. Its career must already exist.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_subject(
    conn: &mut SqliteConnection,
    subject: &Subject,
) -> Result<(), PersistenceError> {
    diesel::insert_into(subjects::table)
        .values((
            subjects::career_id.eq(subject.key.career_id().value()),
            subjects::code.eq(subject.key.code()),
            subjects::name.eq(&subject.name),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a teacher profile.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_teacher(
    conn: &mut SqliteConnection,
    teacher: &Teacher,
) -> Result<(), PersistenceError> {
    let contract_date: Option<String> = teacher.contract_date.map(|d| d.to_string());
    diesel::insert_into(teachers::table)
        .values((
            teachers::teacher_id.eq(teacher.teacher_id.value()),
            teachers::first_name.eq(&teacher.first_name),
            teachers::last_name.eq(&teacher.last_name),
            teachers::email.eq(teacher.email.as_deref()),
            teachers::specialty.eq(teacher.specialty.as_deref()),
            teachers::contract_date.eq(contract_date),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a class group.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_group(conn: &mut SqliteConnection, group: &Group) -> Result<(), PersistenceError> {
    diesel::insert_into(class_groups::table)
        .values((
            class_groups::group_id.eq(group.group_id.value()),
            class_groups::name.eq(&group.name),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a management period.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_period(
    conn: &mut SqliteConnection,
    period: &ManagementPeriod,
) -> Result<(), PersistenceError> {
    diesel::insert_into(management_periods::table)
        .values((
            management_periods::period_id.eq(period.period_id().value()),
            management_periods::year.eq(i32::from(period.year())),
            management_periods::term.eq(i32::from(period.term())),
            management_periods::start_date.eq(period.start_date().to_string()),
            management_periods::end_date.eq(period.end_date().to_string()),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a timeslot.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_timeslot(
    conn: &mut SqliteConnection,
    timeslot: &Timeslot,
) -> Result<(), PersistenceError> {
    diesel::insert_into(timeslots::table)
        .values((
            timeslots::timeslot_id.eq(timeslot.timeslot_id().value()),
            timeslots::start_time.eq(storage_time(timeslot.start_time())?),
            timeslots::end_time.eq(storage_time(timeslot.end_time())?),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts a room. Room codes are unique.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_room(conn: &mut SqliteConnection, room: &Room) -> Result<(), PersistenceError> {
    diesel::insert_into(rooms::table)
        .values((
            rooms::room_id.eq(room.room_id.value()),
            rooms::code.eq(&room.code),
            rooms::name.eq(&room.name),
        ))
        .execute(conn)?;
    Ok(())
}
