// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::macros::{date, time};
use unisched_audit::Cause;
use unisched_domain::{
    Career, CareerId, Group, GroupId, ManagementPeriod, PeriodId, Room, RoomId, Subject,
    SubjectKey, Teacher, TeacherId, Timeslot, TimeslotId,
};
use unisched_persistence::{CatalogImport, Persistence};

use crate::{
    AuthenticatedActor, CreateAssignmentRequest, CreateAssignmentResponse, Role, SlotInput,
    create_assignment,
};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_teacher() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("teacher-456"), Role::Teacher)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

/// Two careers, two teachers, two groups, one period, two timeslots, two rooms.
pub fn setup_test_persistence() -> Persistence {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create persistence");
    let import: CatalogImport = CatalogImport {
        careers: vec![
            Career::new(CareerId::new(1), "Systems Engineering").unwrap(),
            Career::new(CareerId::new(2), "Mathematics").unwrap(),
        ],
        subjects: vec![
            Subject::new(
                SubjectKey::new(CareerId::new(1), "INF-110").unwrap(),
                "Introduction to Programming",
            )
            .unwrap(),
            Subject::new(
                SubjectKey::new(CareerId::new(2), "MAT-101").unwrap(),
                "Calculus I",
            )
            .unwrap(),
        ],
        teachers: vec![
            Teacher::new(TeacherId::new(1), "Ana", "Rojas", None, None, None).unwrap(),
            Teacher::new(TeacherId::new(2), "Bruno", "Vargas", None, None, None).unwrap(),
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
        ],
        timeslots: vec![
            Timeslot::new(TimeslotId::new(1), time!(08:00), time!(09:30)).unwrap(),
            Timeslot::new(TimeslotId::new(2), time!(09:45), time!(11:15)).unwrap(),
        ],
        rooms: vec![
            Room::new(RoomId::new(1), "A-101", "Lab A").unwrap(),
            Room::new(RoomId::new(2), "B-202", "Hall B").unwrap(),
        ],
    };
    persistence
        .load_catalog(&import)
        .expect("Failed to load catalog");
    persistence
}

pub const fn slot(day_id: i64, timeslot_id: i64, room_id: Option<i64>) -> SlotInput {
    SlotInput {
        day_id,
        timeslot_id,
        room_id,
    }
}

/// Teacher 1 teaching 1/INF-110 to group 1 in period 1.
pub fn create_valid_request(slots: Vec<SlotInput>) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        teacher_id: 1,
        career_id: 1,
        subject_code: String::from("INF-110"),
        group_id: 1,
        period_id: 1,
        slots,
    }
}

pub fn create_seeded_assignment(persistence: &mut Persistence) -> CreateAssignmentResponse {
    create_assignment(
        persistence,
        &create_valid_request(vec![slot(1, 1, Some(1)), slot(3, 1, Some(1))]),
        &create_test_admin(),
        create_test_cause(),
    )
    .expect("Failed to create assignment")
}
