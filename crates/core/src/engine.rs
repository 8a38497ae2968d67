// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::{ScheduleOutcome, apply};
use crate::command::{AssignmentChanges, Command};
use crate::error::SchedulingError;
use crate::store::TransactionalStore;
use tracing::warn;
use unisched_audit::{Actor, Cause};
use unisched_domain::{AssignmentId, AssignmentKey, SlotRequest};

/// Allocates teachers and rooms to weekly slots without double-booking.
///
/// Each operation runs as a single transaction on the injected store:
/// either the assignment, all of its bindings and the audit event are
/// written, or nothing is.
pub struct SchedulingEngine<S> {
    store: S,
}

impl<S: TransactionalStore> SchedulingEngine<S> {
    /// Creates an engine over the given store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the engine and returns the underlying store.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Applies a command in its own transaction.
    ///
    /// # Errors
    ///
    /// Returns the first validation, conflict, not-found or storage error.
    /// Nothing is written when an error is returned.
    pub fn apply(
        &mut self,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<ScheduleOutcome, SchedulingError> {
        let action_name: &'static str = command.action_name();
        let result: Result<ScheduleOutcome, SchedulingError> = self
            .store
            .transaction(|repo| apply(repo, command, actor, cause));

        if let Err(err) = &result {
            warn!(action = action_name, error = %err, "Scheduling command rejected");
        }
        result
    }

    /// Creates an assignment and binds all of its slots.
    ///
    /// # Arguments
    ///
    /// * `key` - Teacher, subject, group and period
    /// * `slots` - Non-empty list of slots, checked in order
    /// * `actor` - The actor performing this action
    /// * `cause` - The cause or reason for this action
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A reference does not exist or the slot list is malformed
    /// - The key is already assigned (`duplicate assignment`)
    /// - The teacher is already scheduled at a requested slot (`teacher busy`)
    /// - The room is already taken at a requested slot (`room busy`)
    pub fn create_assignment(
        &mut self,
        key: AssignmentKey,
        slots: Vec<SlotRequest>,
        actor: Actor,
        cause: Cause,
    ) -> Result<ScheduleOutcome, SchedulingError> {
        self.apply(Command::CreateAssignment { key, slots }, actor, cause)
    }

    /// Replaces the slots of an existing assignment.
    ///
    /// The assignment's own current bindings never count as conflicts.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment does not exist, the slots are
    /// malformed, or a slot conflicts with another assignment.
    pub fn update_assignment_slots(
        &mut self,
        assignment_id: AssignmentId,
        slots: Vec<SlotRequest>,
        actor: Actor,
        cause: Cause,
    ) -> Result<ScheduleOutcome, SchedulingError> {
        self.update_assignment(
            assignment_id,
            AssignmentChanges::slots_only(slots),
            actor,
            cause,
        )
    }

    /// Applies partial changes to an assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment does not exist, no change was
    /// requested, the new key is taken, or a slot conflicts.
    pub fn update_assignment(
        &mut self,
        assignment_id: AssignmentId,
        changes: AssignmentChanges,
        actor: Actor,
        cause: Cause,
    ) -> Result<ScheduleOutcome, SchedulingError> {
        self.apply(
            Command::UpdateAssignment {
                assignment_id,
                changes,
            },
            actor,
            cause,
        )
    }

    /// Deletes an assignment and its slots.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::NotFound` if the assignment does not exist.
    pub fn delete_assignment(
        &mut self,
        assignment_id: AssignmentId,
        actor: Actor,
        cause: Cause,
    ) -> Result<ScheduleOutcome, SchedulingError> {
        self.apply(Command::DeleteAssignment { assignment_id }, actor, cause)
    }
}
