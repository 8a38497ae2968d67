// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use unisched_domain::{AssignmentId, AssignmentKey, SlotRequest};

#[cfg(test)]
mod tests;

/// Represents the entity performing an action.
///
/// An actor is whoever initiated a scheduling change: an administrator,
/// a teacher reading their own schedule, or an import job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "admin", "teacher", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`CreateAssignment`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A textual snapshot of one assignment at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Snapshot for an assignment that does not exist (before create, after delete).
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("absent"))
    }

    /// Describes an assignment key and its slots in request order.
    ///
    /// # Arguments
    ///
    /// * `key` - The assignment's identifying tuple
    /// * `slots` - The assignment's slot bindings
    #[must_use]
    pub fn of_assignment(key: &AssignmentKey, slots: &[SlotRequest]) -> Self {
        let slot_list: Vec<String> = slots.iter().map(ToString::to_string).collect();
        Self::new(format!("{key} slots=[{}]", slot_list.join("; ")))
    }
}

/// An immutable audit event representing one scheduling change.
///
/// Every successful create, update or delete of an assignment produces
/// exactly one audit event, written in the same transaction as the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The persisted event identifier. `None` until stored.
    pub event_id: Option<i64>,
    /// The actor who initiated this change.
    pub actor: Actor,
    /// The cause or reason for this change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The assignment before the change.
    pub before: StateSnapshot,
    /// The assignment after the change.
    pub after: StateSnapshot,
    /// The assignment the change applies to.
    pub assignment_id: AssignmentId,
}

impl AuditEvent {
    /// Creates a new, not yet persisted `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the change
    /// * `after` - The state after the change
    /// * `assignment_id` - The affected assignment
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        assignment_id: AssignmentId,
    ) -> Self {
        Self {
            event_id: None,
            actor,
            cause,
            action,
            before,
            after,
            assignment_id,
        }
    }

    /// Returns a copy of this event carrying its persisted identifier.
    #[must_use]
    pub fn with_event_id(self, event_id: i64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}
