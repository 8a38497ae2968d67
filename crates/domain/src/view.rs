// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read models for displaying assignments with their weekly schedule.

use crate::catalog::clock_label;
use crate::error::DomainError;
use crate::types::{AssignmentId, CareerId, DayId, GroupId, PeriodId, RoomId, TeacherId, TimeslotId};
use serde::{Deserialize, Serialize};
use time::Time;

/// A flattened slot binding joined with its day, timeslot and room.
///
/// This is the shape storage returns before grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub day_id: DayId,
    pub day_name: String,
    pub day_abbreviation: String,
    pub day_sort_order: i32,
    pub timeslot_id: TimeslotId,
    pub start_time: Time,
    pub end_time: Time,
    pub room_id: Option<RoomId>,
    pub room_code: Option<String>,
    pub room_name: Option<String>,
}

/// One slot within a day of an assignment's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    pub timeslot_id: TimeslotId,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Range as `HH:MM-HH:MM`.
    pub range: String,
    pub room_id: Option<RoomId>,
    pub room_code: Option<String>,
    pub room_name: Option<String>,
}

/// All slots an assignment occupies on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day_id: DayId,
    pub day_name: String,
    pub day_abbreviation: String,
    pub slots: Vec<ScheduledSlot>,
}

/// An assignment joined with display names and its grouped schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentView {
    pub assignment_id: AssignmentId,
    pub teacher_id: TeacherId,
    pub teacher_name: String,
    pub career_id: CareerId,
    pub career_name: String,
    pub subject_code: String,
    pub subject_name: String,
    pub group_id: GroupId,
    pub group_name: String,
    pub period_id: PeriodId,
    pub period_label: String,
    pub schedule: Vec<DaySchedule>,
}

/// Groups flattened schedule entries by day.
///
/// Days are ordered by their sort order, and slots within a day by start
/// time. The input order is irrelevant. An empty input yields an empty
/// schedule.
///
/// # Arguments
///
/// * `entries` - The joined slot bindings of a single assignment
///
/// # Errors
///
/// Returns `DomainError::TimeFormatError` if a slot time cannot be formatted.
pub fn group_by_day(mut entries: Vec<ScheduleEntry>) -> Result<Vec<DaySchedule>, DomainError> {
    entries.sort_by(|a, b| {
        a.day_sort_order
            .cmp(&b.day_sort_order)
            .then(a.day_id.cmp(&b.day_id))
            .then(a.start_time.cmp(&b.start_time))
            .then(a.timeslot_id.cmp(&b.timeslot_id))
    });

    let mut schedule: Vec<DaySchedule> = Vec::new();
    for entry in entries {
        let start_time: String = clock_label(entry.start_time)?;
        let end_time: String = clock_label(entry.end_time)?;
        let slot: ScheduledSlot = ScheduledSlot {
            timeslot_id: entry.timeslot_id,
            range: format!("{start_time}-{end_time}"),
            start_time,
            end_time,
            room_id: entry.room_id,
            room_code: entry.room_code,
            room_name: entry.room_name,
        };

        match schedule.last_mut() {
            Some(day) if day.day_id == entry.day_id => day.slots.push(slot),
            _ => schedule.push(DaySchedule {
                day_id: entry.day_id,
                day_name: entry.day_name,
                day_abbreviation: entry.day_abbreviation,
                slots: vec![slot],
            }),
        }
    }

    Ok(schedule)
}
