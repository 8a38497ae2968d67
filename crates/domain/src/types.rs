// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Declares a numeric identifier newtype backed by the database row id.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier without validation.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Wraps a raw identifier, rejecting zero and negative values.
            ///
            /// # Errors
            ///
            /// Returns `DomainError::InvalidIdentifier` if `value` is not positive.
            pub const fn parse(value: i64) -> Result<Self, DomainError> {
                if value <= 0 {
                    return Err(DomainError::InvalidIdentifier {
                        field: $field,
                        value,
                    });
                }
                Ok(Self(value))
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifies a teacher.
    TeacherId,
    "teacher_id"
);
id_type!(
    /// Identifies a career (degree programme).
    CareerId,
    "career_id"
);
id_type!(
    /// Identifies a class group.
    GroupId,
    "group_id"
);
id_type!(
    /// Identifies a management period.
    PeriodId,
    "period_id"
);
id_type!(
    /// Identifies a weekday.
    DayId,
    "day_id"
);
id_type!(
    /// Identifies a timeslot.
    TimeslotId,
    "timeslot_id"
);
id_type!(
    /// Identifies a room.
    RoomId,
    "room_id"
);
id_type!(
    /// Identifies an assignment.
    AssignmentId,
    "assignment_id"
);
id_type!(
    /// Identifies a single slot binding row.
    SlotBindingId,
    "slot_binding_id"
);

/// The composite key of a subject: the owning career plus the subject code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectKey {
    career_id: CareerId,
    code: String,
}

impl SubjectKey {
    /// Creates a subject key.
    ///
    /// The code is trimmed of surrounding whitespace.
    ///
    /// # Arguments
    ///
    /// * `career_id` - The career the subject belongs to
    /// * `code` - The subject code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSubjectCode` if the trimmed code is empty.
    pub fn new(career_id: CareerId, code: &str) -> Result<Self, DomainError> {
        let trimmed: &str = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSubjectCode(String::from(
                "Subject code cannot be empty",
            )));
        }
        Ok(Self {
            career_id,
            code: trimmed.to_string(),
        })
    }

    #[must_use]
    pub const fn career_id(&self) -> CareerId {
        self.career_id
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.career_id, self.code)
    }
}

/// One requested weekly occurrence: a day, a timeslot and an optional room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRequest {
    pub day_id: DayId,
    pub timeslot_id: TimeslotId,
    pub room_id: Option<RoomId>,
}

impl SlotRequest {
    #[must_use]
    pub const fn new(day_id: DayId, timeslot_id: TimeslotId, room_id: Option<RoomId>) -> Self {
        Self {
            day_id,
            timeslot_id,
            room_id,
        }
    }
}

impl std::fmt::Display for SlotRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.room_id {
            Some(room_id) => write!(
                f,
                "day {} timeslot {} room {}",
                self.day_id, self.timeslot_id, room_id
            ),
            None => write!(f, "day {} timeslot {}", self.day_id, self.timeslot_id),
        }
    }
}

/// The identifying tuple of an assignment.
///
/// At most one assignment may exist for any given key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignmentKey {
    pub teacher_id: TeacherId,
    pub subject: SubjectKey,
    pub group_id: GroupId,
    pub period_id: PeriodId,
}

impl AssignmentKey {
    #[must_use]
    pub const fn new(
        teacher_id: TeacherId,
        subject: SubjectKey,
        group_id: GroupId,
        period_id: PeriodId,
    ) -> Self {
        Self {
            teacher_id,
            subject,
            group_id,
            period_id,
        }
    }
}

impl std::fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "teacher={} subject={} group={} period={}",
            self.teacher_id, self.subject, self.group_id, self.period_id
        )
    }
}

/// A persisted assignment of one teacher to one subject, group and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub assignment_id: AssignmentId,
    pub key: AssignmentKey,
}

impl Assignment {
    #[must_use]
    pub const fn new(assignment_id: AssignmentId, key: AssignmentKey) -> Self {
        Self { assignment_id, key }
    }
}

/// A persisted weekly occurrence attached to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotBinding {
    pub slot_binding_id: SlotBindingId,
    pub assignment_id: AssignmentId,
    pub day_id: DayId,
    pub timeslot_id: TimeslotId,
    pub room_id: Option<RoomId>,
}

impl SlotBinding {
    /// Returns the request that would recreate this binding.
    #[must_use]
    pub const fn as_request(&self) -> SlotRequest {
        SlotRequest::new(self.day_id, self.timeslot_id, self.room_id)
    }
}

/// Optional, conjunctive criteria for listing assignments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentFilter {
    pub teacher_id: Option<TeacherId>,
    pub period_id: Option<PeriodId>,
    pub group_id: Option<GroupId>,
    pub career_id: Option<CareerId>,
}
