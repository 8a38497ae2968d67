// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unisched_domain::{AssignmentId, DayId, DomainError, RoomId, TeacherId, TimeslotId};

/// The reason a scheduling request conflicts with existing data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    /// An assignment with the same teacher, subject, group and period exists.
    DuplicateAssignment,
    /// The teacher already has a slot at this day and timeslot.
    TeacherBusy {
        teacher_id: TeacherId,
        day_id: DayId,
        timeslot_id: TimeslotId,
    },
    /// The room is already taken at this day and timeslot.
    RoomBusy {
        room_id: RoomId,
        day_id: DayId,
        timeslot_id: TimeslotId,
    },
}

impl ConflictKind {
    /// Returns the short, stable name of this conflict.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateAssignment => "duplicate assignment",
            Self::TeacherBusy { .. } => "teacher busy",
            Self::RoomBusy { .. } => "room busy",
        }
    }
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors returned by the scheduling engine.
///
/// Every error aborts the enclosing transaction; no partial state is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// A field is malformed or references a catalog entity that does not exist.
    Validation {
        /// The offending request field.
        field: String,
        /// A human-readable description.
        message: String,
    },
    /// The request conflicts with existing assignments or bindings.
    Conflict(ConflictKind),
    /// The addressed assignment does not exist.
    NotFound(AssignmentId),
    /// The underlying store failed.
    Storage(String),
}

impl SchedulingError {
    /// Creates a validation error for a field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the conflict kind if this is a conflict.
    #[must_use]
    pub const fn conflict_kind(&self) -> Option<&ConflictKind> {
        match self {
            Self::Conflict(kind) => Some(kind),
            _ => None,
        }
    }
}

impl std::fmt::Display for SchedulingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Validation failed for {field}: {message}")
            }
            Self::Conflict(ConflictKind::DuplicateAssignment) => {
                write!(f, "Conflict: duplicate assignment")
            }
            Self::Conflict(ConflictKind::TeacherBusy {
                teacher_id,
                day_id,
                timeslot_id,
            }) => write!(
                f,
                "Conflict: teacher busy (teacher {teacher_id} already scheduled on day {day_id} timeslot {timeslot_id})"
            ),
            Self::Conflict(ConflictKind::RoomBusy {
                room_id,
                day_id,
                timeslot_id,
            }) => write!(
                f,
                "Conflict: room busy (room {room_id} already taken on day {day_id} timeslot {timeslot_id})"
            ),
            Self::NotFound(assignment_id) => write!(f, "Assignment {assignment_id} not found"),
            Self::Storage(msg) => write!(f, "Storage error: {msg}"),
        }
    }
}

impl std::error::Error for SchedulingError {}

impl From<DomainError> for SchedulingError {
    fn from(err: DomainError) -> Self {
        Self::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for SchedulingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(msg) => {
                Self::Storage(format!("Unexpected unique constraint violation: {msg}"))
            }
            StoreError::Backend(msg) => Self::Storage(msg),
        }
    }
}

/// Errors a store implementation reports to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    UniqueViolation(String),
    /// Any other storage failure.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UniqueViolation(msg) => write!(f, "Unique constraint violation: {msg}"),
            Self::Backend(msg) => write!(f, "Store backend error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
