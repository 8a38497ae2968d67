// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unisched_domain::{
    AssignmentId, AssignmentKey, GroupId, PeriodId, SlotRequest, SubjectKey, TeacherId,
};

/// A command represents scheduling intent as data only.
///
/// Commands are the only way to change assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create an assignment together with its weekly slots.
    CreateAssignment {
        /// The identifying tuple.
        key: AssignmentKey,
        /// The requested slots, checked in order. Must not be empty.
        slots: Vec<SlotRequest>,
    },
    /// Change the identifying fields and/or the slots of an assignment.
    UpdateAssignment {
        /// The assignment to change.
        assignment_id: AssignmentId,
        /// The requested changes.
        changes: AssignmentChanges,
    },
    /// Delete an assignment and all of its slots.
    DeleteAssignment {
        /// The assignment to delete.
        assignment_id: AssignmentId,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::CreateAssignment { .. } => "CreateAssignment",
            Self::UpdateAssignment { .. } => "UpdateAssignment",
            Self::DeleteAssignment { .. } => "DeleteAssignment",
        }
    }
}

/// Partial changes to an assignment. `None` keeps the current value.
///
/// When `slots` is present the binding set is replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentChanges {
    pub teacher_id: Option<TeacherId>,
    pub subject: Option<SubjectKey>,
    pub group_id: Option<GroupId>,
    pub period_id: Option<PeriodId>,
    pub slots: Option<Vec<SlotRequest>>,
}

impl AssignmentChanges {
    /// Changes that only replace the slot set.
    #[must_use]
    pub const fn slots_only(slots: Vec<SlotRequest>) -> Self {
        Self {
            teacher_id: None,
            subject: None,
            group_id: None,
            period_id: None,
            slots: Some(slots),
        }
    }

    /// Returns whether no change was requested at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.teacher_id.is_none()
            && self.subject.is_none()
            && self.group_id.is_none()
            && self.period_id.is_none()
            && self.slots.is_none()
    }

    /// Returns `current` with the requested identifying fields applied.
    #[must_use]
    pub fn apply_to(&self, current: &AssignmentKey) -> AssignmentKey {
        AssignmentKey {
            teacher_id: self.teacher_id.unwrap_or(current.teacher_id),
            subject: self
                .subject
                .clone()
                .unwrap_or_else(|| current.subject.clone()),
            group_id: self.group_id.unwrap_or(current.group_id),
            period_id: self.period_id.unwrap_or(current.period_id),
        }
    }
}
