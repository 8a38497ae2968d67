// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod types;
mod validation;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types
pub use catalog::{
    Career, Day, Group, MAX_PERIOD_YEAR, MIN_PERIOD_YEAR, ManagementPeriod, Room, Subject,
    Teacher, Timeslot, clock_label, parse_clock_time, parse_iso_date, period_label,
};
pub use error::DomainError;
pub use types::{
    Assignment, AssignmentFilter, AssignmentId, AssignmentKey, CareerId, DayId, GroupId, PeriodId,
    RoomId, SlotBinding, SlotBindingId, SlotRequest, SubjectKey, TeacherId, TimeslotId,
};
pub use validation::validate_slot_requests;
pub use view::{AssignmentView, DaySchedule, ScheduleEntry, ScheduledSlot, group_by_day};
