// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment, slot binding and schedule view queries.

use std::collections::HashMap;

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use tracing::debug;
use unisched_domain::{
    Assignment, AssignmentFilter, AssignmentId, AssignmentKey, AssignmentView, CareerId, DayId,
    GroupId, PeriodId, RoomId, ScheduleEntry, SlotBinding, SlotBindingId, SubjectKey, TeacherId,
    TimeslotId, group_by_day, parse_clock_time, period_label,
};

use crate::diesel_schema::{
    assignments, careers, class_groups, days, management_periods, rooms, slot_bindings, subjects,
    teachers, timeslots,
};
use crate::error::PersistenceError;

/// Diesel Queryable struct for assignment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = assignments)]
struct AssignmentRow {
    assignment_id: i64,
    teacher_id: i64,
    career_id: i64,
    subject_code: String,
    group_id: i64,
    period_id: i64,
}

impl AssignmentRow {
    fn into_assignment(self) -> Result<Assignment, PersistenceError> {
        let subject: SubjectKey = SubjectKey::new(CareerId::new(self.career_id), &self.subject_code)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?;
        Ok(Assignment::new(
            AssignmentId::new(self.assignment_id),
            AssignmentKey::new(
                TeacherId::new(self.teacher_id),
                subject,
                GroupId::new(self.group_id),
                PeriodId::new(self.period_id),
            ),
        ))
    }
}

/// Diesel Queryable struct for slot binding rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = slot_bindings)]
struct SlotBindingRow {
    slot_binding_id: i64,
    assignment_id: i64,
    day_id: i64,
    timeslot_id: i64,
    room_id: Option<i64>,
}

/// An assignment joined with the display names of everything it references.
#[derive(Queryable)]
struct AssignmentHeaderRow {
    assignment_id: i64,
    teacher_id: i64,
    first_name: String,
    last_name: String,
    career_id: i64,
    career_name: String,
    subject_code: String,
    subject_name: String,
    group_id: i64,
    group_name: String,
    period_id: i64,
    year: i32,
    term: i32,
}

/// A slot binding joined with its day, timeslot and (optional) room.
#[derive(Queryable)]
struct ScheduleRow {
    assignment_id: i64,
    day_id: i64,
    day_name: String,
    day_abbreviation: String,
    day_sort_order: i32,
    timeslot_id: i64,
    start_time: String,
    end_time: String,
    room_id: Option<i64>,
    room_code: Option<String>,
    room_name: Option<String>,
}

impl ScheduleRow {
    fn into_entry(self) -> Result<ScheduleEntry, PersistenceError> {
        Ok(ScheduleEntry {
            day_id: DayId::new(self.day_id),
            day_name: self.day_name,
            day_abbreviation: self.day_abbreviation,
            day_sort_order: self.day_sort_order,
            timeslot_id: TimeslotId::new(self.timeslot_id),
            start_time: parse_clock_time(&self.start_time)
                .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
            end_time: parse_clock_time(&self.end_time)
                .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
            room_id: self.room_id.map(RoomId::new),
            room_code: self.room_code,
            room_name: self.room_name,
        })
    }
}

/// Finds the assignment with exactly this key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - Teacher, subject, group and period
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_assignment(
    conn: &mut SqliteConnection,
    key: &AssignmentKey,
) -> Result<Option<Assignment>, PersistenceError> {
    let row: Option<AssignmentRow> = assignments::table
        .filter(assignments::teacher_id.eq(key.teacher_id.value()))
        .filter(assignments::career_id.eq(key.subject.career_id().value()))
        .filter(assignments::subject_code.eq(key.subject.code()))
        .filter(assignments::group_id.eq(key.group_id.value()))
        .filter(assignments::period_id.eq(key.period_id.value()))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(AssignmentRow::into_assignment).transpose()
}

/// Loads an assignment by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    let row: Option<AssignmentRow> = assignments::table
        .filter(assignments::assignment_id.eq(assignment_id))
        .select(AssignmentRow::as_select())
        .first(conn)
        .optional()?;

    row.map(AssignmentRow::into_assignment).transpose()
}

/// Lists the slot bindings of an assignment in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_slot_bindings(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<Vec<SlotBinding>, PersistenceError> {
    let rows: Vec<SlotBindingRow> = slot_bindings::table
        .filter(slot_bindings::assignment_id.eq(assignment_id))
        .select(SlotBindingRow::as_select())
        .order(slot_bindings::slot_binding_id.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| SlotBinding {
            slot_binding_id: SlotBindingId::new(row.slot_binding_id),
            assignment_id: AssignmentId::new(row.assignment_id),
            day_id: DayId::new(row.day_id),
            timeslot_id: TimeslotId::new(row.timeslot_id),
            room_id: row.room_id.map(RoomId::new),
        })
        .collect())
}

/// Returns whether the teacher already teaches at this day and timeslot.
///
/// The check spans every assignment of the teacher in every management
/// period. Bindings of `exclude_id` are ignored.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `teacher_id` - The teacher to check
/// * `day_id` - The day
/// * `timeslot_id` - The timeslot
/// * `exclude_id` - Optional assignment whose bindings are ignored
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn is_teacher_busy(
    conn: &mut SqliteConnection,
    teacher_id: i64,
    day_id: i64,
    timeslot_id: i64,
    exclude_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let mut query = slot_bindings::table
        .inner_join(assignments::table)
        .filter(assignments::teacher_id.eq(teacher_id))
        .filter(slot_bindings::day_id.eq(day_id))
        .filter(slot_bindings::timeslot_id.eq(timeslot_id))
        .into_boxed();

    if let Some(id) = exclude_id {
        query = query.filter(slot_bindings::assignment_id.ne(id));
    }

    let count: i64 = query.count().get_result::<i64>(conn)?;
    debug!(teacher_id, day_id, timeslot_id, count, "Teacher availability checked");
    Ok(count > 0)
}

/// Returns whether the room is already taken at this day and timeslot.
///
/// Bindings of `exclude_id` are ignored.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn is_room_busy(
    conn: &mut SqliteConnection,
    day_id: i64,
    timeslot_id: i64,
    room_id: i64,
    exclude_id: Option<i64>,
) -> Result<bool, PersistenceError> {
    let mut query = slot_bindings::table
        .filter(slot_bindings::day_id.eq(day_id))
        .filter(slot_bindings::timeslot_id.eq(timeslot_id))
        .filter(slot_bindings::room_id.eq(room_id))
        .into_boxed();

    if let Some(id) = exclude_id {
        query = query.filter(slot_bindings::assignment_id.ne(id));
    }

    let count: i64 = query.count().get_result::<i64>(conn)?;
    debug!(day_id, timeslot_id, room_id, count, "Room availability checked");
    Ok(count > 0)
}

/// Loads the display view of one assignment.
///
/// # Errors
///
/// Returns `PersistenceError::AssignmentNotFound` if no such assignment exists.
pub fn get_assignment_view(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<AssignmentView, PersistenceError> {
    let filter: AssignmentFilter = AssignmentFilter::default();
    let mut views: Vec<AssignmentView> = load_views(conn, &filter, Some(assignment_id))?;
    views
        .pop()
        .ok_or(PersistenceError::AssignmentNotFound(assignment_id))
}

/// Lists assignment views matching every criterion set in `filter`.
///
/// Results are ordered by period id (highest first), then career id,
/// subject code, group id and assignment id.
///
/// # Errors
///
/// Returns an error if the query fails or stored data is invalid.
pub fn list_assignment_views(
    conn: &mut SqliteConnection,
    filter: &AssignmentFilter,
) -> Result<Vec<AssignmentView>, PersistenceError> {
    load_views(conn, filter, None)
}

fn load_views(
    conn: &mut SqliteConnection,
    filter: &AssignmentFilter,
    only_id: Option<i64>,
) -> Result<Vec<AssignmentView>, PersistenceError> {
    let mut query = assignments::table
        .inner_join(teachers::table)
        .inner_join(careers::table)
        .inner_join(
            subjects::table.on(subjects::career_id
                .eq(assignments::career_id)
                .and(subjects::code.eq(assignments::subject_code))),
        )
        .inner_join(class_groups::table)
        .inner_join(management_periods::table)
        .select((
            assignments::assignment_id,
            assignments::teacher_id,
            teachers::first_name,
            teachers::last_name,
            assignments::career_id,
            careers::name,
            assignments::subject_code,
            subjects::name,
            assignments::group_id,
            class_groups::name,
            assignments::period_id,
            management_periods::year,
            management_periods::term,
        ))
        .order((
            assignments::period_id.desc(),
            assignments::career_id.asc(),
            assignments::subject_code.asc(),
            assignments::group_id.asc(),
            assignments::assignment_id.asc(),
        ))
        .into_boxed();

    if let Some(id) = only_id {
        query = query.filter(assignments::assignment_id.eq(id));
    }
    if let Some(teacher_id) = filter.teacher_id {
        query = query.filter(assignments::teacher_id.eq(teacher_id.value()));
    }
    if let Some(period_id) = filter.period_id {
        query = query.filter(assignments::period_id.eq(period_id.value()));
    }
    if let Some(group_id) = filter.group_id {
        query = query.filter(assignments::group_id.eq(group_id.value()));
    }
    if let Some(career_id) = filter.career_id {
        query = query.filter(assignments::career_id.eq(career_id.value()));
    }

    let headers: Vec<AssignmentHeaderRow> = query.load::<AssignmentHeaderRow>(conn)?;
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = headers.iter().map(|h| h.assignment_id).collect();
    let mut schedules: HashMap<i64, Vec<ScheduleEntry>> = HashMap::new();
    for row in load_schedule_rows(conn, &ids)? {
        let assignment_id: i64 = row.assignment_id;
        schedules
            .entry(assignment_id)
            .or_default()
            .push(row.into_entry()?);
    }

    headers
        .into_iter()
        .map(|header| {
            let entries: Vec<ScheduleEntry> = schedules
                .remove(&header.assignment_id)
                .unwrap_or_default();
            build_view(header, entries)
        })
        .collect()
}

fn load_schedule_rows(
    conn: &mut SqliteConnection,
    assignment_ids: &[i64],
) -> Result<Vec<ScheduleRow>, PersistenceError> {
    Ok(slot_bindings::table
        .inner_join(days::table)
        .inner_join(timeslots::table)
        .left_join(rooms::table)
        .filter(slot_bindings::assignment_id.eq_any(assignment_ids))
        .select((
            slot_bindings::assignment_id,
            days::day_id,
            days::name,
            days::abbreviation,
            days::sort_order,
            timeslots::timeslot_id,
            timeslots::start_time,
            timeslots::end_time,
            rooms::room_id.nullable(),
            rooms::code.nullable(),
            rooms::name.nullable(),
        ))
        .order((days::sort_order.asc(), timeslots::start_time.asc()))
        .load::<ScheduleRow>(conn)?)
}

fn build_view(
    header: AssignmentHeaderRow,
    entries: Vec<ScheduleEntry>,
) -> Result<AssignmentView, PersistenceError> {
    let year: u16 = header
        .year
        .to_u16()
        .ok_or_else(|| PersistenceError::CorruptRow("Year out of range".to_string()))?;
    let term: u8 = header
        .term
        .to_u8()
        .ok_or_else(|| PersistenceError::CorruptRow("Term out of range".to_string()))?;

    Ok(AssignmentView {
        assignment_id: AssignmentId::new(header.assignment_id),
        teacher_id: TeacherId::new(header.teacher_id),
        teacher_name: format!("{} {}", header.first_name, header.last_name),
        career_id: CareerId::new(header.career_id),
        career_name: header.career_name,
        subject_code: header.subject_code,
        subject_name: header.subject_name,
        group_id: GroupId::new(header.group_id),
        group_name: header.group_name,
        period_id: PeriodId::new(header.period_id),
        period_label: period_label(year, term),
        schedule: group_by_day(entries)
            .map_err(|e| PersistenceError::CorruptRow(e.to_string()))?,
    })
}
