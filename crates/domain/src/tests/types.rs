// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentId, CareerId, DayId, DomainError, RoomId, SlotBinding, SlotBindingId, SlotRequest,
    SubjectKey, TeacherId, TimeslotId,
};

#[test]
fn test_id_parse_accepts_positive_values() {
    let teacher_id: TeacherId = TeacherId::parse(7).unwrap();
    assert_eq!(teacher_id.value(), 7);
    assert_eq!(teacher_id.to_string(), "7");
}

#[test]
fn test_id_parse_rejects_zero_and_negative_values() {
    assert_eq!(
        TeacherId::parse(0),
        Err(DomainError::InvalidIdentifier {
            field: "teacher_id",
            value: 0
        })
    );
    assert!(matches!(
        RoomId::parse(-3),
        Err(DomainError::InvalidIdentifier {
            field: "room_id",
            value: -3
        })
    ));
}

#[test]
fn test_ids_serialize_transparently() {
    let json: String = serde_json::to_string(&AssignmentId::new(42)).unwrap();
    assert_eq!(json, "42");

    let parsed: DayId = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, DayId::new(3));
}

#[test]
fn test_subject_key_trims_code() {
    let key: SubjectKey = SubjectKey::new(CareerId::new(1), "  INF-110 ").unwrap();
    assert_eq!(key.code(), "INF-110");
    assert_eq!(key.career_id(), CareerId::new(1));
    assert_eq!(key.to_string(), "1/INF-110");
}

#[test]
fn test_subject_key_rejects_blank_code() {
    let result: Result<SubjectKey, DomainError> = SubjectKey::new(CareerId::new(1), "   ");
    assert!(matches!(result, Err(DomainError::InvalidSubjectCode(_))));
}

#[test]
fn test_slot_binding_round_trips_to_request() {
    let binding: SlotBinding = SlotBinding {
        slot_binding_id: SlotBindingId::new(9),
        assignment_id: AssignmentId::new(1),
        day_id: DayId::new(2),
        timeslot_id: TimeslotId::new(3),
        room_id: None,
    };

    let request: SlotRequest = binding.as_request();
    assert_eq!(
        request,
        SlotRequest::new(DayId::new(2), TimeslotId::new(3), None)
    );
    assert_eq!(request.to_string(), "day 2 timeslot 3");
}
