// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{key, slot};
use crate::{AssignmentChanges, Command};
use unisched_domain::{AssignmentId, AssignmentKey, CareerId, PeriodId, SubjectKey, TeacherId};

#[test]
fn test_action_names_are_stable() {
    let create: Command = Command::CreateAssignment {
        key: key(1, "INF-110", 1, 1),
        slots: vec![slot(1, 1, None)],
    };
    let delete: Command = Command::DeleteAssignment {
        assignment_id: AssignmentId::new(1),
    };

    assert_eq!(create.action_name(), "CreateAssignment");
    assert_eq!(delete.action_name(), "DeleteAssignment");
}

#[test]
fn test_changes_apply_only_requested_fields() {
    let current: AssignmentKey = key(1, "INF-110", 1, 1);
    let changes: AssignmentChanges = AssignmentChanges {
        teacher_id: Some(TeacherId::new(2)),
        subject: Some(SubjectKey::new(CareerId::new(1), "INF-120").unwrap()),
        period_id: Some(PeriodId::new(2)),
        ..AssignmentChanges::default()
    };

    assert_eq!(changes.apply_to(&current), key(2, "INF-120", 1, 2));
    assert!(!changes.is_empty());
}

#[test]
fn test_default_changes_are_empty() {
    let changes: AssignmentChanges = AssignmentChanges::default();

    assert!(changes.is_empty());
    assert_eq!(changes.apply_to(&key(1, "INF-110", 1, 1)), key(1, "INF-110", 1, 1));
    assert!(!AssignmentChanges::slots_only(Vec::new()).is_empty());
}
