// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams used by the scheduling engine.
//!
//! The engine never talks to a database directly. It receives a
//! `TransactionalStore` at construction time and performs every read and
//! write through the `AssignmentRepository` handed to it inside a
//! transaction.

use crate::apply::bind_slots;
use crate::error::{SchedulingError, StoreError};
use unisched_audit::AuditEvent;
use unisched_domain::{
    Assignment, AssignmentId, AssignmentKey, DayId, GroupId, PeriodId, RoomId, SlotBinding,
    SlotBindingId, SlotRequest, SubjectKey, TeacherId, TimeslotId,
};

/// A reference to one catalog entity, used for existence checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CatalogEntity {
    Teacher(TeacherId),
    Subject(SubjectKey),
    Group(GroupId),
    Period(PeriodId),
    Day(DayId),
    Timeslot(TimeslotId),
    Room(RoomId),
}

impl CatalogEntity {
    /// Returns the request field that carries this reference.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Teacher(_) => "teacher_id",
            Self::Subject(_) => "subject",
            Self::Group(_) => "group_id",
            Self::Period(_) => "period_id",
            Self::Day(_) => "day_id",
            Self::Timeslot(_) => "timeslot_id",
            Self::Room(_) => "room_id",
        }
    }
}

impl std::fmt::Display for CatalogEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Teacher(id) => write!(f, "teacher {id}"),
            Self::Subject(key) => write!(f, "subject {key}"),
            Self::Group(id) => write!(f, "group {id}"),
            Self::Period(id) => write!(f, "management period {id}"),
            Self::Day(id) => write!(f, "day {id}"),
            Self::Timeslot(id) => write!(f, "timeslot {id}"),
            Self::Room(id) => write!(f, "room {id}"),
        }
    }
}

/// Existence checks against reference data.
pub trait CatalogStore {
    /// Returns whether the referenced entity exists.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails. A missing entity
    /// is `Ok(false)`.
    fn exists(&mut self, entity: &CatalogEntity) -> Result<bool, StoreError>;
}

/// Reads and writes assignments and their slot bindings.
///
/// Implementations are handed out by `TransactionalStore::transaction`;
/// every call made through one repository belongs to the same transaction.
pub trait AssignmentRepository: CatalogStore {
    /// Finds the assignment with exactly this key.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn find_assignment(&mut self, key: &AssignmentKey) -> Result<Option<Assignment>, StoreError>;

    /// Loads an assignment by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError>;

    /// Inserts a new assignment row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` if the key is already taken.
    fn create_assignment(&mut self, key: &AssignmentKey) -> Result<AssignmentId, StoreError>;

    /// Rewrites the identifying fields of an existing assignment.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` if another assignment has the key.
    fn update_assignment_key(
        &mut self,
        assignment_id: AssignmentId,
        key: &AssignmentKey,
    ) -> Result<(), StoreError>;

    /// Lists the slot bindings of an assignment in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn list_slot_bindings(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Vec<SlotBinding>, StoreError>;

    /// Returns whether the teacher has any binding at this day and timeslot,
    /// across all assignments and periods, ignoring `exclude`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn is_teacher_busy(
        &mut self,
        teacher_id: TeacherId,
        day_id: DayId,
        timeslot_id: TimeslotId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError>;

    /// Returns whether the room has any binding at this day and timeslot,
    /// across all assignments and periods, ignoring `exclude`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn is_room_busy(
        &mut self,
        day_id: DayId,
        timeslot_id: TimeslotId,
        room_id: RoomId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError>;

    /// Inserts one slot binding for an assignment taught by `teacher_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UniqueViolation` if a storage-level uniqueness
    /// rule rejects the binding.
    fn insert_slot_binding(
        &mut self,
        assignment_id: AssignmentId,
        teacher_id: TeacherId,
        slot: &SlotRequest,
    ) -> Result<SlotBindingId, StoreError>;

    /// Deletes every binding of an assignment and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn delete_slot_bindings(&mut self, assignment_id: AssignmentId) -> Result<usize, StoreError>;

    /// Deletes an assignment and, by cascade, its bindings.
    ///
    /// Returns `false` if no such assignment existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn delete_assignment(&mut self, assignment_id: AssignmentId) -> Result<bool, StoreError>;

    /// Persists an audit event and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    fn record_audit_event(&mut self, event: &AuditEvent) -> Result<i64, StoreError>;

    /// Replaces all bindings of an assignment with `slots`.
    ///
    /// Prior bindings are removed first and every new slot goes through the
    /// teacher and room checks with the assignment itself excluded, so
    /// re-submitting the current set always succeeds. Must be called inside
    /// a transaction: on error the caller rolls back.
    ///
    /// # Errors
    ///
    /// Returns a `SchedulingError::Conflict` for the first slot that clashes
    /// with another assignment, or a storage error.
    fn replace_slot_bindings(
        &mut self,
        assignment_id: AssignmentId,
        teacher_id: TeacherId,
        slots: &[SlotRequest],
    ) -> Result<(), SchedulingError> {
        self.delete_slot_bindings(assignment_id)?;
        bind_slots(self, assignment_id, teacher_id, slots, Some(assignment_id))
    }
}

/// A store that can run a closure inside an all-or-nothing transaction.
///
/// The transaction commits when the closure returns `Ok` and rolls back
/// when it returns `Err`. Implementations serialize writers so that a
/// check followed by an insert cannot interleave with another writer.
pub trait TransactionalStore {
    /// Runs `f` in a transaction.
    ///
    /// # Errors
    ///
    /// Returns the closure's error, or `SchedulingError::Storage` if the
    /// transaction cannot be opened or committed.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, SchedulingError>
    where
        F: FnOnce(&mut dyn AssignmentRepository) -> Result<T, SchedulingError>;
}

impl<S: TransactionalStore + ?Sized> TransactionalStore for &mut S {
    fn transaction<T, F>(&mut self, f: F) -> Result<T, SchedulingError>
    where
        F: FnOnce(&mut dyn AssignmentRepository) -> Result<T, SchedulingError>,
    {
        (**self).transaction(f)
    }
}
