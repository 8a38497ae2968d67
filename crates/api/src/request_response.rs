// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw identifiers as received from a client. They are
//! validated once, at the boundary, when the handler turns them into
//! domain types.

use serde::{Deserialize, Serialize};
use unisched_domain::AssignmentView;

/// One requested weekly slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInput {
    /// The day identifier.
    pub day_id: i64,
    /// The timeslot identifier.
    pub timeslot_id: i64,
    /// The room identifier, if the slot needs a room.
    #[serde(default)]
    pub room_id: Option<i64>,
}

/// API request to create an assignment with its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignmentRequest {
    /// The teacher identifier.
    pub teacher_id: i64,
    /// The career owning the subject.
    pub career_id: i64,
    /// The subject code within the career.
    pub subject_code: String,
    /// The class group identifier.
    pub group_id: i64,
    /// The management period identifier.
    pub period_id: i64,
    /// The slots to bind, checked in order. Must not be empty.
    pub slots: Vec<SlotInput>,
}

/// API response for a successful assignment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAssignmentResponse {
    /// The new assignment identifier.
    pub assignment_id: i64,
    /// The audit event recorded for the creation.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to change an assignment.
///
/// Every field is optional. The subject changes only when both
/// `career_id` and `subject_code` are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAssignmentRequest {
    /// The new teacher.
    #[serde(default)]
    pub teacher_id: Option<i64>,
    /// The career of the new subject.
    #[serde(default)]
    pub career_id: Option<i64>,
    /// The code of the new subject.
    #[serde(default)]
    pub subject_code: Option<String>,
    /// The new class group.
    #[serde(default)]
    pub group_id: Option<i64>,
    /// The new management period.
    #[serde(default)]
    pub period_id: Option<i64>,
    /// A replacement slot set.
    #[serde(default)]
    pub slots: Option<Vec<SlotInput>>,
}

/// API response for a successful assignment update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAssignmentResponse {
    /// The updated assignment identifier.
    pub assignment_id: i64,
    /// The audit event recorded for the update.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful assignment deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAssignmentResponse {
    /// The removed assignment identifier.
    pub assignment_id: i64,
    /// The audit event recorded for the deletion.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to list assignments. All set filters must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignmentsRequest {
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub period_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub career_id: Option<i64>,
}

/// API response listing assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAssignmentsResponse {
    /// The matching assignments, highest period id first.
    pub assignments: Vec<AssignmentView>,
}

/// One entry of an assignment's audit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntryResponse {
    pub event_id: i64,
    pub action: String,
    pub details: Option<String>,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub before: String,
    pub after: String,
}

/// API response carrying an assignment's audit history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentHistoryResponse {
    /// The assignment the history belongs to.
    pub assignment_id: i64,
    /// The recorded events.
    pub events: Vec<AuditEntryResponse>,
}
