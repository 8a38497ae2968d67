// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{AssignmentChanges, Command};
use crate::error::{ConflictKind, SchedulingError, StoreError};
use crate::store::{AssignmentRepository, CatalogEntity};
use std::collections::HashSet;
use tracing::{debug, info};
use unisched_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use unisched_domain::{
    Assignment, AssignmentId, AssignmentKey, DayId, SlotRequest, TeacherId, TimeslotId,
    validate_slot_requests,
};

/// The result of a successful scheduling command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOutcome {
    /// The assignment the command acted on.
    pub assignment_id: AssignmentId,
    /// The persisted id of the audit event.
    pub event_id: i64,
    /// The audit event recorded for the command.
    pub audit_event: AuditEvent,
}

/// Applies a command through a repository that is already inside a transaction.
///
/// On error the caller must roll the transaction back; this function may
/// have performed writes before detecting the failure.
///
/// # Arguments
///
/// * `repo` - The transactional repository
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - A field is invalid or references a missing catalog entity
/// - The assignment key is already taken
/// - A slot clashes with the teacher's or the room's existing bindings
/// - The addressed assignment does not exist
/// - The store fails
pub fn apply<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<ScheduleOutcome, SchedulingError> {
    let action_name: &'static str = command.action_name();
    match command {
        Command::CreateAssignment { key, slots } => {
            create_assignment(repo, &key, &slots, actor, cause, action_name)
        }
        Command::UpdateAssignment {
            assignment_id,
            changes,
        } => update_assignment(repo, assignment_id, changes, actor, cause, action_name),
        Command::DeleteAssignment { assignment_id } => {
            delete_assignment(repo, assignment_id, actor, cause, action_name)
        }
    }
}

fn create_assignment<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    key: &AssignmentKey,
    slots: &[SlotRequest],
    actor: Actor,
    cause: Cause,
    action_name: &str,
) -> Result<ScheduleOutcome, SchedulingError> {
    validate_slot_requests(slots)?;
    validate_references(repo, key, slots)?;

    if let Some(existing) = repo.find_assignment(key)? {
        debug!(
            assignment_id = existing.assignment_id.value(),
            "Assignment key already taken"
        );
        return Err(SchedulingError::Conflict(ConflictKind::DuplicateAssignment));
    }

    let assignment_id: AssignmentId = repo
        .create_assignment(key)
        .map_err(classify_assignment_write)?;

    bind_slots(repo, assignment_id, key.teacher_id, slots, None)?;

    let action: Action = Action::new(
        action_name.to_string(),
        Some(format!("Scheduled {} slot(s) for {key}", slots.len())),
    );
    let event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        StateSnapshot::absent(),
        StateSnapshot::of_assignment(key, slots),
        assignment_id,
    );

    let outcome: ScheduleOutcome = record(repo, event)?;
    info!(
        assignment_id = assignment_id.value(),
        slots = slots.len(),
        "Assignment created"
    );
    Ok(outcome)
}

fn update_assignment<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    assignment_id: AssignmentId,
    changes: AssignmentChanges,
    actor: Actor,
    cause: Cause,
    action_name: &str,
) -> Result<ScheduleOutcome, SchedulingError> {
    if changes.is_empty() {
        return Err(SchedulingError::validation(
            "changes",
            "No changes were requested",
        ));
    }

    let existing: Assignment = repo
        .get_assignment(assignment_id)?
        .ok_or(SchedulingError::NotFound(assignment_id))?;

    if let Some(slots) = &changes.slots {
        validate_slot_requests(slots)?;
    }

    let new_key: AssignmentKey = changes.apply_to(&existing.key);
    validate_references(repo, &new_key, changes.slots.as_deref().unwrap_or(&[]))?;

    let before_slots: Vec<SlotRequest> = repo
        .list_slot_bindings(assignment_id)?
        .iter()
        .map(unisched_domain::SlotBinding::as_request)
        .collect();

    if new_key != existing.key {
        if let Some(other) = repo.find_assignment(&new_key)?
            && other.assignment_id != assignment_id
        {
            return Err(SchedulingError::Conflict(ConflictKind::DuplicateAssignment));
        }
        repo.update_assignment_key(assignment_id, &new_key)
            .map_err(classify_assignment_write)?;
    }

    let teacher_changed: bool = new_key.teacher_id != existing.key.teacher_id;
    let after_slots: Vec<SlotRequest> = match changes.slots {
        Some(slots) => {
            repo.replace_slot_bindings(assignment_id, new_key.teacher_id, &slots)?;
            slots
        }
        None if teacher_changed => {
            // The new teacher must be free at every slot the assignment already holds.
            repo.replace_slot_bindings(assignment_id, new_key.teacher_id, &before_slots)?;
            before_slots.clone()
        }
        None => before_slots.clone(),
    };

    let action: Action = Action::new(
        action_name.to_string(),
        Some(format!(
            "Updated assignment {assignment_id}: {} slot(s) before, {} after",
            before_slots.len(),
            after_slots.len()
        )),
    );
    let event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        StateSnapshot::of_assignment(&existing.key, &before_slots),
        StateSnapshot::of_assignment(&new_key, &after_slots),
        assignment_id,
    );

    let outcome: ScheduleOutcome = record(repo, event)?;
    info!(
        assignment_id = assignment_id.value(),
        slots = after_slots.len(),
        "Assignment updated"
    );
    Ok(outcome)
}

fn delete_assignment<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    assignment_id: AssignmentId,
    actor: Actor,
    cause: Cause,
    action_name: &str,
) -> Result<ScheduleOutcome, SchedulingError> {
    let existing: Assignment = repo
        .get_assignment(assignment_id)?
        .ok_or(SchedulingError::NotFound(assignment_id))?;

    let before_slots: Vec<SlotRequest> = repo
        .list_slot_bindings(assignment_id)?
        .iter()
        .map(unisched_domain::SlotBinding::as_request)
        .collect();

    if !repo.delete_assignment(assignment_id)? {
        return Err(SchedulingError::NotFound(assignment_id));
    }

    let action: Action = Action::new(
        action_name.to_string(),
        Some(format!(
            "Deleted assignment {assignment_id} and {} slot(s)",
            before_slots.len()
        )),
    );
    let event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        StateSnapshot::of_assignment(&existing.key, &before_slots),
        StateSnapshot::absent(),
        assignment_id,
    );

    let outcome: ScheduleOutcome = record(repo, event)?;
    info!(assignment_id = assignment_id.value(), "Assignment deleted");
    Ok(outcome)
}

/// Checks every slot for teacher and room availability and inserts it.
///
/// Slots are processed in request order and the first conflict aborts.
/// The teacher check runs before the room check, and a slot without a
/// room never conflicts on room. A slot already bound earlier in the same
/// request counts as a teacher conflict, even when `exclude` names the
/// assignment being bound.
///
/// # Arguments
///
/// * `repo` - The transactional repository
/// * `assignment_id` - The assignment receiving the bindings
/// * `teacher_id` - The teacher who would occupy the slots
/// * `slots` - The slots to bind
/// * `exclude` - An assignment whose bindings are ignored by the checks
///
/// # Errors
///
/// Returns the first conflict found, or a storage error.
pub fn bind_slots<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    assignment_id: AssignmentId,
    teacher_id: TeacherId,
    slots: &[SlotRequest],
    exclude: Option<AssignmentId>,
) -> Result<(), SchedulingError> {
    let mut bound: HashSet<(DayId, TimeslotId)> = HashSet::new();
    for slot in slots {
        if !bound.insert((slot.day_id, slot.timeslot_id)) {
            debug!(teacher_id = teacher_id.value(), %slot, "Slot repeated within request");
            return Err(SchedulingError::Conflict(ConflictKind::TeacherBusy {
                teacher_id,
                day_id: slot.day_id,
                timeslot_id: slot.timeslot_id,
            }));
        }
        check_slot_available(repo, teacher_id, slot, exclude)?;

        match repo.insert_slot_binding(assignment_id, teacher_id, slot) {
            Ok(_) => {}
            Err(StoreError::UniqueViolation(msg)) => {
                // Another writer took the slot between check and insert.
                debug!(%slot, %msg, "Slot binding rejected by unique constraint");
                return Err(classify_binding_violation(repo, teacher_id, slot, exclude));
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn check_slot_available<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    teacher_id: TeacherId,
    slot: &SlotRequest,
    exclude: Option<AssignmentId>,
) -> Result<(), SchedulingError> {
    if repo.is_teacher_busy(teacher_id, slot.day_id, slot.timeslot_id, exclude)? {
        debug!(teacher_id = teacher_id.value(), %slot, "Teacher busy");
        return Err(SchedulingError::Conflict(ConflictKind::TeacherBusy {
            teacher_id,
            day_id: slot.day_id,
            timeslot_id: slot.timeslot_id,
        }));
    }

    if let Some(room_id) = slot.room_id
        && repo.is_room_busy(slot.day_id, slot.timeslot_id, room_id, exclude)?
    {
        debug!(room_id = room_id.value(), %slot, "Room busy");
        return Err(SchedulingError::Conflict(ConflictKind::RoomBusy {
            room_id,
            day_id: slot.day_id,
            timeslot_id: slot.timeslot_id,
        }));
    }

    Ok(())
}

/// Works out which availability rule a rejected binding insert broke.
fn classify_binding_violation<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    teacher_id: TeacherId,
    slot: &SlotRequest,
    exclude: Option<AssignmentId>,
) -> SchedulingError {
    if let Some(room_id) = slot.room_id {
        match repo.is_room_busy(slot.day_id, slot.timeslot_id, room_id, exclude) {
            Ok(true) => {
                return SchedulingError::Conflict(ConflictKind::RoomBusy {
                    room_id,
                    day_id: slot.day_id,
                    timeslot_id: slot.timeslot_id,
                });
            }
            Ok(false) => {}
            Err(err) => return err.into(),
        }
    }

    SchedulingError::Conflict(ConflictKind::TeacherBusy {
        teacher_id,
        day_id: slot.day_id,
        timeslot_id: slot.timeslot_id,
    })
}

fn classify_assignment_write(err: StoreError) -> SchedulingError {
    match err {
        StoreError::UniqueViolation(_) => {
            SchedulingError::Conflict(ConflictKind::DuplicateAssignment)
        }
        StoreError::Backend(_) => err.into(),
    }
}

/// Validates that every entity referenced by an assignment and its slots exists.
///
/// The first missing reference is reported, with slot references named by
/// their position in the request.
fn validate_references<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    key: &AssignmentKey,
    slots: &[SlotRequest],
) -> Result<(), SchedulingError> {
    let header: [CatalogEntity; 4] = [
        CatalogEntity::Teacher(key.teacher_id),
        CatalogEntity::Subject(key.subject.clone()),
        CatalogEntity::Group(key.group_id),
        CatalogEntity::Period(key.period_id),
    ];
    for entity in &header {
        require_exists(repo, entity, entity.field().to_string())?;
    }

    for (index, slot) in slots.iter().enumerate() {
        let mut references: Vec<CatalogEntity> = vec![
            CatalogEntity::Day(slot.day_id),
            CatalogEntity::Timeslot(slot.timeslot_id),
        ];
        if let Some(room_id) = slot.room_id {
            references.push(CatalogEntity::Room(room_id));
        }
        for entity in &references {
            require_exists(repo, entity, format!("slots[{index}].{}", entity.field()))?;
        }
    }

    Ok(())
}

fn require_exists<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    entity: &CatalogEntity,
    field: String,
) -> Result<(), SchedulingError> {
    if repo.exists(entity)? {
        return Ok(());
    }
    debug!(%entity, "Referenced catalog entity does not exist");
    Err(SchedulingError::Validation {
        field,
        message: format!("{entity} does not exist"),
    })
}

fn record<R: AssignmentRepository + ?Sized>(
    repo: &mut R,
    event: AuditEvent,
) -> Result<ScheduleOutcome, SchedulingError> {
    let event_id: i64 = repo.record_audit_event(&event)?;
    let assignment_id: AssignmentId = event.assignment_id;
    Ok(ScheduleOutcome {
        assignment_id,
        event_id,
        audit_event: event.with_event_id(event_id),
    })
}
