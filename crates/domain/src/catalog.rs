// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data that assignments point at.
//!
//! Catalog entities are owned by other parts of the institution's systems.
//! The scheduling core only needs to know that they exist and, for the
//! read views, how to display them.

use crate::error::DomainError;
use crate::types::{CareerId, DayId, GroupId, PeriodId, RoomId, SubjectKey, TeacherId, TimeslotId};
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Earliest year a management period may belong to.
pub const MIN_PERIOD_YEAR: u16 = 2000;
/// Latest year a management period may belong to.
pub const MAX_PERIOD_YEAR: u16 = 2100;

fn require_name(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName { field });
    }
    Ok(trimmed.to_string())
}

/// A degree programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub career_id: CareerId,
    pub name: String,
}

impl Career {
    /// Creates a career.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(career_id: CareerId, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            career_id,
            name: require_name("career_name", name)?,
        })
    }
}

/// A subject taught within a career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub key: SubjectKey,
    pub name: String,
}

impl Subject {
    /// Creates a subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(key: SubjectKey, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            key,
            name: require_name("subject_name", name)?,
        })
    }
}

/// A class group (section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: GroupId,
    pub name: String,
}

impl Group {
    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn new(group_id: GroupId, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            group_id,
            name: require_name("group_name", name)?,
        })
    }
}

/// A teacher as seen by the scheduling core.
///
/// Credentials and login live in the identity subsystem; only the profile
/// fields needed for display are kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub specialty: Option<String>,
    pub contract_date: Option<Date>,
}

impl Teacher {
    /// Creates a teacher profile.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is empty.
    pub fn new(
        teacher_id: TeacherId,
        first_name: &str,
        last_name: &str,
        email: Option<String>,
        specialty: Option<String>,
        contract_date: Option<Date>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            teacher_id,
            first_name: require_name("first_name", first_name)?,
            last_name: require_name("last_name", last_name)?,
            email,
            specialty,
            contract_date,
        })
    }

    /// Returns the display name, first name then last name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An academic term ("gestion"), identified by year and term number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementPeriod {
    period_id: PeriodId,
    year: u16,
    term: u8,
    start_date: Date,
    end_date: Date,
}

impl ManagementPeriod {
    /// Creates a management period.
    ///
    /// # Arguments
    ///
    /// * `period_id` - The period identifier
    /// * `year` - Calendar year, 2000..=2100
    /// * `term` - Term number, 1 or 2
    /// * `start_date` - First day of the term
    /// * `end_date` - Last day of the term, strictly after `start_date`
    ///
    /// # Errors
    ///
    /// Returns an error if the year, term or date range is invalid.
    pub fn new(
        period_id: PeriodId,
        year: u16,
        term: u8,
        start_date: Date,
        end_date: Date,
    ) -> Result<Self, DomainError> {
        if !(MIN_PERIOD_YEAR..=MAX_PERIOD_YEAR).contains(&year) {
            return Err(DomainError::InvalidPeriodYear(year));
        }
        if !(1..=2).contains(&term) {
            return Err(DomainError::InvalidPeriodTerm(term));
        }
        if end_date <= start_date {
            return Err(DomainError::InvalidPeriodDates {
                start_date,
                end_date,
            });
        }
        Ok(Self {
            period_id,
            year,
            term,
            start_date,
            end_date,
        })
    }

    #[must_use]
    pub const fn period_id(&self) -> PeriodId {
        self.period_id
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn term(&self) -> u8 {
        self.term
    }

    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the display label, e.g. `2026-1`.
    #[must_use]
    pub fn label(&self) -> String {
        period_label(self.year, self.term)
    }
}

/// Formats a year and term as a period label, e.g. `2026-1`.
#[must_use]
pub fn period_label(year: u16, term: u8) -> String {
    format!("{year}-{term}")
}

/// A weekday, ordered by `sort_order` for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub day_id: DayId,
    pub name: String,
    pub abbreviation: String,
    pub sort_order: i32,
}

/// A fixed weekly timeslot.
///
/// Conflicts are detected on timeslot identity, not on overlapping times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeslot {
    timeslot_id: TimeslotId,
    start_time: Time,
    end_time: Time,
}

impl Timeslot {
    /// Creates a timeslot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeslotRange` unless `end_time > start_time`.
    pub fn new(
        timeslot_id: TimeslotId,
        start_time: Time,
        end_time: Time,
    ) -> Result<Self, DomainError> {
        if end_time <= start_time {
            return Err(DomainError::InvalidTimeslotRange {
                start_time,
                end_time,
            });
        }
        Ok(Self {
            timeslot_id,
            start_time,
            end_time,
        })
    }

    #[must_use]
    pub const fn timeslot_id(&self) -> TimeslotId {
        self.timeslot_id
    }

    #[must_use]
    pub const fn start_time(&self) -> Time {
        self.start_time
    }

    #[must_use]
    pub const fn end_time(&self) -> Time {
        self.end_time
    }

    /// Returns the range label, e.g. `08:00-09:30`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeFormatError` if a bound cannot be formatted.
    pub fn range_label(&self) -> Result<String, DomainError> {
        Ok(format!(
            "{}-{}",
            clock_label(self.start_time)?,
            clock_label(self.end_time)?
        ))
    }
}

/// Formats a time of day as `HH:MM`.
///
/// # Errors
///
/// Returns `DomainError::TimeFormatError` if formatting fails.
pub fn clock_label(clock: Time) -> Result<String, DomainError> {
    clock
        .format(&time::macros::format_description!("[hour]:[minute]"))
        .map_err(|e| DomainError::TimeFormatError {
            error: e.to_string(),
        })
}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub code: String,
    pub name: String,
}

impl Room {
    /// Creates a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or name is empty.
    pub fn new(room_id: RoomId, code: &str, name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            room_id,
            code: require_name("room_code", code)?,
            name: require_name("room_name", name)?,
        })
    }
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Parses a clock time given as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns `DomainError::TimeParseError` if the string is not a valid time.
pub fn parse_clock_time(value: &str) -> Result<Time, DomainError> {
    let trimmed: &str = value.trim();
    let result = if trimmed.len() > 5 {
        Time::parse(
            trimmed,
            &time::macros::format_description!("[hour]:[minute]:[second]"),
        )
    } else {
        Time::parse(trimmed, &time::macros::format_description!("[hour]:[minute]"))
    };
    result.map_err(|e| DomainError::TimeParseError {
        time_string: value.to_string(),
        error: e.to_string(),
    })
}
