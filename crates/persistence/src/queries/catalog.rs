// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog (reference data) queries.

use diesel::SqliteConnection;
use diesel::dsl::exists;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use unisched::CatalogEntity;
use unisched_domain::{
    Day, DayId, ManagementPeriod, PeriodId, Room, RoomId, Teacher, TeacherId, Timeslot,
    TimeslotId, parse_clock_time, parse_iso_date,
};

use crate::diesel_schema::{
    class_groups, days, management_periods, rooms, subjects, teachers, timeslots,
};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = days)]
struct DayRow {
    day_id: i64,
    name: String,
    abbreviation: String,
    sort_order: i32,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = timeslots)]
struct TimeslotRow {
    timeslot_id: i64,
    start_time: String,
    end_time: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
struct RoomRow {
    room_id: i64,
    code: String,
    name: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = teachers)]
struct TeacherRow {
    teacher_id: i64,
    first_name: String,
    last_name: String,
    email: Option<String>,
    specialty: Option<String>,
    contract_date: Option<String>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = management_periods)]
struct PeriodRow {
    period_id: i64,
    year: i32,
    term: i32,
    start_date: String,
    end_date: String,
}

fn reconstruction<E: std::fmt::Display>(err: E) -> PersistenceError {
    PersistenceError::CorruptRow(err.to_string())
}

/// Checks whether a catalog entity exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `entity` - The entity reference to look up
///
/// # Errors
///
/// Returns an error if the query fails. A missing entity is `Ok(false)`.
pub fn entity_exists(
    conn: &mut SqliteConnection,
    entity: &CatalogEntity,
) -> Result<bool, PersistenceError> {
    let found: bool = match entity {
        CatalogEntity::Teacher(id) => diesel::select(exists(
            teachers::table.filter(teachers::teacher_id.eq(id.value())),
        ))
        .get_result(conn)?,
        CatalogEntity::Subject(key) => diesel::select(exists(
            subjects::table
                .filter(subjects::career_id.eq(key.career_id().value()))
                .filter(subjects::code.eq(key.code())),
        ))
        .get_result(conn)?,
        CatalogEntity::Group(id) => diesel::select(exists(
            class_groups::table.filter(class_groups::group_id.eq(id.value())),
        ))
        .get_result(conn)?,
        CatalogEntity::Period(id) => diesel::select(exists(
            management_periods::table.filter(management_periods::period_id.eq(id.value())),
        ))
        .get_result(conn)?,
        CatalogEntity::Day(id) => {
            diesel::select(exists(days::table.filter(days::day_id.eq(id.value()))))
                .get_result(conn)?
        }
        CatalogEntity::Timeslot(id) => diesel::select(exists(
            timeslots::table.filter(timeslots::timeslot_id.eq(id.value())),
        ))
        .get_result(conn)?,
        CatalogEntity::Room(id) => {
            diesel::select(exists(rooms::table.filter(rooms::room_id.eq(id.value()))))
                .get_result(conn)?
        }
    };
    Ok(found)
}

/// Lists all days in display order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_days(conn: &mut SqliteConnection) -> Result<Vec<Day>, PersistenceError> {
    let rows: Vec<DayRow> = days::table
        .select(DayRow::as_select())
        .order((days::sort_order.asc(), days::day_id.asc()))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| Day {
            day_id: DayId::new(row.day_id),
            name: row.name,
            abbreviation: row.abbreviation,
            sort_order: row.sort_order,
        })
        .collect())
}

/// Lists all timeslots ordered by start time.
///
/// # Errors
///
/// Returns an error if the query fails or a stored time cannot be parsed.
pub fn list_timeslots(conn: &mut SqliteConnection) -> Result<Vec<Timeslot>, PersistenceError> {
    let rows: Vec<TimeslotRow> = timeslots::table
        .select(TimeslotRow::as_select())
        .order((timeslots::start_time.asc(), timeslots::timeslot_id.asc()))
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            Timeslot::new(
                TimeslotId::new(row.timeslot_id),
                parse_clock_time(&row.start_time).map_err(reconstruction)?,
                parse_clock_time(&row.end_time).map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        })
        .collect()
}

/// Lists all rooms ordered by code.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>, PersistenceError> {
    let rows: Vec<RoomRow> = rooms::table
        .select(RoomRow::as_select())
        .order(rooms::code.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| Room {
            room_id: RoomId::new(row.room_id),
            code: row.code,
            name: row.name,
        })
        .collect())
}

/// Lists all teachers ordered by last name, then first name.
///
/// # Errors
///
/// Returns an error if the query fails or a stored date cannot be parsed.
pub fn list_teachers(conn: &mut SqliteConnection) -> Result<Vec<Teacher>, PersistenceError> {
    let rows: Vec<TeacherRow> = teachers::table
        .select(TeacherRow::as_select())
        .order((teachers::last_name.asc(), teachers::first_name.asc()))
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let contract_date: Option<time::Date> = row
                .contract_date
                .as_deref()
                .map(parse_iso_date)
                .transpose()
                .map_err(reconstruction)?;
            Ok(Teacher {
                teacher_id: TeacherId::new(row.teacher_id),
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                specialty: row.specialty,
                contract_date,
            })
        })
        .collect()
}

/// Lists management periods, most recent first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is invalid.
pub fn list_periods(
    conn: &mut SqliteConnection,
) -> Result<Vec<ManagementPeriod>, PersistenceError> {
    let rows: Vec<PeriodRow> = management_periods::table
        .select(PeriodRow::as_select())
        .order((
            management_periods::year.desc(),
            management_periods::term.desc(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            let year: u16 = row.year.to_u16().ok_or_else(|| {
                PersistenceError::CorruptRow("Year out of range".to_string())
            })?;
            let term: u8 = row.term.to_u8().ok_or_else(|| {
                PersistenceError::CorruptRow("Term out of range".to_string())
            })?;
            ManagementPeriod::new(
                PeriodId::new(row.period_id),
                year,
                term,
                parse_iso_date(&row.start_date).map_err(reconstruction)?,
                parse_iso_date(&row.end_date).map_err(reconstruction)?,
            )
            .map_err(reconstruction)
        })
        .collect()
}
