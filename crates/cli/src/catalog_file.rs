// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON catalog file format.
//!
//! ```json
//! {
//!   "careers": [{ "id": 1, "name": "Systems Engineering" }],
//!   "subjects": [{ "career_id": 1, "code": "INF-110", "name": "Introduction to Programming" }],
//!   "teachers": [{ "id": 1, "first_name": "Ana", "last_name": "Rojas" }],
//!   "groups": [{ "id": 1, "name": "A" }],
//!   "periods": [{ "id": 1, "year": 2026, "term": 1, "start_date": "2026-02-01", "end_date": "2026-06-30" }],
//!   "timeslots": [{ "id": 1, "start_time": "08:00", "end_time": "09:30" }],
//!   "rooms": [{ "id": 1, "code": "A-101", "name": "Lab A" }]
//! }
//! ```
//!
//! Every section is optional. Days are seeded by the schema and cannot be
//! loaded from a file.

use std::path::Path;

use serde::Deserialize;
use unisched_domain::{
    Career, CareerId, DomainError, Group, GroupId, ManagementPeriod, PeriodId, Room, RoomId,
    Subject, SubjectKey, Teacher, TeacherId, Timeslot, TimeslotId, parse_clock_time,
    parse_iso_date,
};
use unisched_persistence::CatalogImport;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
pub struct CareerEntry {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectEntry {
    pub career_id: i64,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherEntry {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub contract_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupEntry {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeriodEntry {
    pub id: i64,
    pub year: u16,
    pub term: u8,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeslotEntry {
    pub id: i64,
    /// `HH:MM` or `HH:MM:SS`.
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomEntry {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// The contents of a catalog file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub careers: Vec<CareerEntry>,
    pub subjects: Vec<SubjectEntry>,
    pub teachers: Vec<TeacherEntry>,
    pub groups: Vec<GroupEntry>,
    pub periods: Vec<PeriodEntry>,
    pub timeslots: Vec<TimeslotEntry>,
    pub rooms: Vec<RoomEntry>,
}

impl CatalogFile {
    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let contents: String =
            std::fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&contents).map_err(|source| CliError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates every entry into domain types.
    ///
    /// # Errors
    ///
    /// Returns the first entry that fails domain validation.
    pub fn into_import(self) -> Result<CatalogImport, DomainError> {
        Ok(CatalogImport {
            careers: self
                .careers
                .into_iter()
                .map(|c| Career::new(CareerId::parse(c.id)?, &c.name))
                .collect::<Result<Vec<Career>, DomainError>>()?,
            subjects: self
                .subjects
                .into_iter()
                .map(|s| {
                    Subject::new(
                        SubjectKey::new(CareerId::parse(s.career_id)?, &s.code)?,
                        &s.name,
                    )
                })
                .collect::<Result<Vec<Subject>, DomainError>>()?,
            teachers: self
                .teachers
                .into_iter()
                .map(|t| {
                    Teacher::new(
                        TeacherId::parse(t.id)?,
                        &t.first_name,
                        &t.last_name,
                        t.email,
                        t.specialty,
                        t.contract_date.as_deref().map(parse_iso_date).transpose()?,
                    )
                })
                .collect::<Result<Vec<Teacher>, DomainError>>()?,
            groups: self
                .groups
                .into_iter()
                .map(|g| Group::new(GroupId::parse(g.id)?, &g.name))
                .collect::<Result<Vec<Group>, DomainError>>()?,
            periods: self
                .periods
                .into_iter()
                .map(|p| {
                    ManagementPeriod::new(
                        PeriodId::parse(p.id)?,
                        p.year,
                        p.term,
                        parse_iso_date(&p.start_date)?,
                        parse_iso_date(&p.end_date)?,
                    )
                })
                .collect::<Result<Vec<ManagementPeriod>, DomainError>>()?,
            timeslots: self
                .timeslots
                .into_iter()
                .map(|t| {
                    Timeslot::new(
                        TimeslotId::parse(t.id)?,
                        parse_clock_time(&t.start_time)?,
                        parse_clock_time(&t.end_time)?,
                    )
                })
                .collect::<Result<Vec<Timeslot>, DomainError>>()?,
            rooms: self
                .rooms
                .into_iter()
                .map(|r| Room::new(RoomId::parse(r.id)?, &r.code, &r.name))
                .collect::<Result<Vec<Room>, DomainError>>()?,
        })
    }
}
