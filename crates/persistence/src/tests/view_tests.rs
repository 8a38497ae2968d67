// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unisched::{ScheduleOutcome, SchedulingEngine};
use unisched_domain::{
    AssignmentFilter, AssignmentId, AssignmentView, CareerId, DayId, GroupId, PeriodId,
    ScheduledSlot, SlotRequest, TeacherId, TimeslotId,
};

use crate::tests::{create_test_actor, create_test_cause, key, seeded_engine, slot};
use crate::{Persistence, PersistenceError};

fn create(
    engine: &mut SchedulingEngine<Persistence>,
    assignment: (i64, i64, &str, i64, i64),
    slots: Vec<SlotRequest>,
) -> AssignmentId {
    let (teacher, career, code, group, period) = assignment;
    let outcome: ScheduleOutcome = engine
        .create_assignment(
            key(teacher, career, code, group, period),
            slots,
            create_test_actor(),
            create_test_cause(),
        )
        .unwrap();
    outcome.assignment_id
}

#[test]
fn test_view_joins_display_names() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();
    let id: AssignmentId = create(
        &mut engine,
        (1, 1, "INF-110", 1, 1),
        vec![slot(1, 1, Some(1))],
    );

    let view: AssignmentView = engine.store_mut().get_assignment_view(id).unwrap();

    assert_eq!(view.assignment_id, id);
    assert_eq!(view.teacher_id, TeacherId::new(1));
    assert_eq!(view.teacher_name, "Ana Rojas");
    assert_eq!(view.career_id, CareerId::new(1));
    assert_eq!(view.career_name, "Systems Engineering");
    assert_eq!(view.subject_code, "INF-110");
    assert_eq!(view.subject_name, "Introduction to Programming");
    assert_eq!(view.group_id, GroupId::new(1));
    assert_eq!(view.group_name, "A");
    assert_eq!(view.period_id, PeriodId::new(1));
    assert_eq!(view.period_label, "2026-1");
}

#[test]
fn test_schedule_grouped_by_day_then_start_time() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();
    let id: AssignmentId = create(
        &mut engine,
        (2, 1, "INF-120", 2, 1),
        vec![slot(3, 1, Some(1)), slot(1, 2, None), slot(1, 1, Some(2))],
    );

    let view: AssignmentView = engine.store_mut().get_assignment_view(id).unwrap();

    let days: Vec<DayId> = view.schedule.iter().map(|d| d.day_id).collect();
    assert_eq!(days, vec![DayId::new(1), DayId::new(3)]);
    assert_eq!(view.schedule[0].day_name, "Monday");
    assert_eq!(view.schedule[0].day_abbreviation, "MON");
    assert_eq!(view.schedule[1].day_name, "Wednesday");

    let monday: &[ScheduledSlot] = &view.schedule[0].slots;
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0].timeslot_id, TimeslotId::new(1));
    assert_eq!(monday[0].start_time, "08:00");
    assert_eq!(monday[0].end_time, "09:30");
    assert_eq!(monday[0].range, "08:00-09:30");
    assert_eq!(monday[0].room_code.as_deref(), Some("B-202"));
    assert_eq!(monday[0].room_name.as_deref(), Some("Hall B"));
    assert_eq!(monday[1].range, "09:45-11:15");
    assert_eq!(monday[1].room_id, None);
    assert_eq!(monday[1].room_code, None);
    assert_eq!(monday[1].room_name, None);

    assert_eq!(view.schedule[1].slots[0].room_code.as_deref(), Some("A-101"));
}

#[test]
fn test_missing_assignment_view_is_not_found() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();

    let result: Result<AssignmentView, PersistenceError> = engine
        .store_mut()
        .get_assignment_view(AssignmentId::new(12));

    assert_eq!(result, Err(PersistenceError::AssignmentNotFound(12)));
}

#[test]
fn test_list_orders_by_period_then_career_subject_group_ids() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();
    let older: AssignmentId = create(
        &mut engine,
        (3, 1, "INF-110", 1, 2),
        vec![slot(5, 4, None)],
    );
    let maths: AssignmentId = create(
        &mut engine,
        (2, 2, "MAT-101", 1, 1),
        vec![slot(2, 1, None)],
    );
    let inf120: AssignmentId = create(
        &mut engine,
        (1, 1, "INF-120", 1, 1),
        vec![slot(2, 2, None)],
    );
    let inf110_b: AssignmentId = create(
        &mut engine,
        (1, 1, "INF-110", 2, 1),
        vec![slot(3, 1, None)],
    );
    let inf110_a: AssignmentId = create(
        &mut engine,
        (2, 1, "INF-110", 1, 1),
        vec![slot(4, 1, None)],
    );

    let ids: Vec<AssignmentId> = engine
        .store_mut()
        .list_assignment_views(&AssignmentFilter::default())
        .unwrap()
        .into_iter()
        .map(|v| v.assignment_id)
        .collect();

    // Period 2 before period 1. Career 1 (Systems Engineering) sorts before
    // career 2 (Mathematics) by id, then subject code, then group id.
    assert_eq!(ids, vec![older, inf110_a, inf110_b, inf120, maths]);
}

#[test]
fn test_list_filters_are_conjunctive() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();
    let a: AssignmentId = create(
        &mut engine,
        (1, 1, "INF-110", 1, 1),
        vec![slot(1, 1, None)],
    );
    create(
        &mut engine,
        (1, 1, "INF-120", 2, 2),
        vec![slot(1, 2, None)],
    );
    create(
        &mut engine,
        (2, 2, "MAT-101", 1, 1),
        vec![slot(1, 3, None)],
    );

    let by_teacher: AssignmentFilter = AssignmentFilter {
        teacher_id: Some(TeacherId::new(1)),
        ..AssignmentFilter::default()
    };
    let by_teacher_and_period: AssignmentFilter = AssignmentFilter {
        period_id: Some(PeriodId::new(1)),
        ..by_teacher
    };
    let by_career: AssignmentFilter = AssignmentFilter {
        career_id: Some(CareerId::new(2)),
        ..AssignmentFilter::default()
    };
    let by_group_and_career: AssignmentFilter = AssignmentFilter {
        group_id: Some(GroupId::new(2)),
        career_id: Some(CareerId::new(2)),
        ..AssignmentFilter::default()
    };

    let store: &mut Persistence = engine.store_mut();
    assert_eq!(store.list_assignment_views(&by_teacher).unwrap().len(), 2);
    let narrowed: Vec<AssignmentView> = store.list_assignment_views(&by_teacher_and_period).unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].assignment_id, a);
    assert_eq!(store.list_assignment_views(&by_career).unwrap().len(), 1);
    assert!(
        store
            .list_assignment_views(&by_group_and_career)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_list_is_empty_without_assignments() {
    let mut engine: SchedulingEngine<Persistence> = seeded_engine();

    let views: Vec<AssignmentView> = engine
        .store_mut()
        .list_assignment_views(&AssignmentFilter::default())
        .unwrap();

    assert!(views.is_empty());
}
