// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod view_tests;

use time::macros::{date, time};
use unisched::SchedulingEngine;
use unisched_audit::{Actor, Cause};
use unisched_domain::{
    AssignmentKey, Career, CareerId, DayId, Group, GroupId, ManagementPeriod, PeriodId, Room,
    RoomId, SlotRequest, Subject, SubjectKey, Teacher, TeacherId, Timeslot, TimeslotId,
};

use crate::{CatalogImport, Persistence};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

/// Builds the reference data used across persistence tests.
///
/// - careers 1 (Systems Engineering) and 2 (Mathematics)
/// - subjects 1/INF-110, 1/INF-120 and 2/MAT-101
/// - teachers 1..=3
/// - groups 1 (A) and 2 (B)
/// - periods 1 (2026-1) and 2 (2025-2)
/// - timeslots 1..=4 starting 08:00, 09:45, 11:30, 14:00
/// - rooms 1 (A-101), 2 (B-202), 3 (C-303)
pub fn test_catalog() -> CatalogImport {
    let subject = |career: i64, code: &str, name: &str| {
        Subject::new(SubjectKey::new(CareerId::new(career), code).unwrap(), name).unwrap()
    };

    CatalogImport {
        careers: vec![
            Career::new(CareerId::new(1), "Systems Engineering").unwrap(),
            Career::new(CareerId::new(2), "Mathematics").unwrap(),
        ],
        subjects: vec![
            subject(1, "INF-110", "Introduction to Programming"),
            subject(1, "INF-120", "Data Structures"),
            subject(2, "MAT-101", "Calculus I"),
        ],
        teachers: vec![
            Teacher::new(
                TeacherId::new(1),
                "Ana",
                "Rojas",
                Some(String::from("ana.rojas@example.edu")),
                Some(String::from("Software Engineering")),
                Some(date!(2019 - 03 - 01)),
            )
            .unwrap(),
            Teacher::new(TeacherId::new(2), "Bruno", "Vargas", None, None, None).unwrap(),
            Teacher::new(TeacherId::new(3), "Carla", "Mendez", None, None, None).unwrap(),
        ],
        groups: vec![
            Group::new(GroupId::new(1), "A").unwrap(),
            Group::new(GroupId::new(2), "B").unwrap(),
        ],
        periods: vec![
            ManagementPeriod::new(
                PeriodId::new(1),
                2026,
                1,
                date!(2026 - 02 - 01),
                date!(2026 - 06 - 30),
            )
            .unwrap(),
            ManagementPeriod::new(
                PeriodId::new(2),
                2025,
                2,
                date!(2025 - 07 - 15),
                date!(2025 - 12 - 15),
            )
            .unwrap(),
        ],
        timeslots: vec![
            Timeslot::new(TimeslotId::new(1), time!(08:00), time!(09:30)).unwrap(),
            Timeslot::new(TimeslotId::new(2), time!(09:45), time!(11:15)).unwrap(),
            Timeslot::new(TimeslotId::new(3), time!(11:30), time!(13:00)).unwrap(),
            Timeslot::new(TimeslotId::new(4), time!(14:00), time!(15:30)).unwrap(),
        ],
        rooms: vec![
            Room::new(RoomId::new(1), "A-101", "Lab A").unwrap(),
            Room::new(RoomId::new(2), "B-202", "Hall B").unwrap(),
            Room::new(RoomId::new(3), "C-303", "Seminar C").unwrap(),
        ],
    }
}

/// Creates an isolated in-memory database loaded with `test_catalog()`.
pub fn seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.load_catalog(&test_catalog()).unwrap();
    persistence
}

/// Creates a scheduling engine over a seeded in-memory database.
pub fn seeded_engine() -> SchedulingEngine<Persistence> {
    SchedulingEngine::new(seeded_persistence())
}

pub fn key(teacher: i64, career: i64, code: &str, group: i64, period: i64) -> AssignmentKey {
    AssignmentKey::new(
        TeacherId::new(teacher),
        SubjectKey::new(CareerId::new(career), code).unwrap(),
        GroupId::new(group),
        PeriodId::new(period),
    )
}

pub fn slot(day: i64, timeslot: i64, room: Option<i64>) -> SlotRequest {
    SlotRequest::new(
        DayId::new(day),
        TimeslotId::new(timeslot),
        room.map(RoomId::new),
    )
}
