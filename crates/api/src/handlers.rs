// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Handler functions for the scheduling API.
//!
//! Each handler authorizes the caller, validates the request into domain
//! types, runs the operation and translates any error into an `ApiError`.

use tracing::debug;
use unisched::{AssignmentChanges, ScheduleOutcome, SchedulingEngine};
use unisched_audit::{Actor, AuditEvent, Cause};
use unisched_domain::{
    AssignmentFilter, AssignmentId, AssignmentKey, AssignmentView, CareerId, DayId, DomainError,
    GroupId, PeriodId, RoomId, SlotRequest, SubjectKey, TeacherId, TimeslotId,
    validate_slot_requests,
};
use unisched_persistence::Persistence;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_domain_error, translate_persistence_error, translate_scheduling_error,
};
use crate::request_response::{
    AssignmentHistoryResponse, AuditEntryResponse, CreateAssignmentRequest,
    CreateAssignmentResponse, DeleteAssignmentResponse, ListAssignmentsRequest,
    ListAssignmentsResponse, SlotInput, UpdateAssignmentRequest, UpdateAssignmentResponse,
};

fn parse_slot(slot: &SlotInput) -> Result<SlotRequest, DomainError> {
    Ok(SlotRequest::new(
        DayId::parse(slot.day_id)?,
        TimeslotId::parse(slot.timeslot_id)?,
        slot.room_id.map(RoomId::parse).transpose()?,
    ))
}

/// Converts requested slots into domain slot requests.
///
/// Identifier errors name the offending slot, e.g. `slots[1].room_id`.
fn parse_slots(slots: &[SlotInput]) -> Result<Vec<SlotRequest>, ApiError> {
    let parsed: Vec<SlotRequest> = slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            parse_slot(slot).map_err(|err| ApiError::InvalidInput {
                field: format!("slots[{index}].{}", err.field()),
                message: err.to_string(),
            })
        })
        .collect::<Result<Vec<SlotRequest>, ApiError>>()?;

    validate_slot_requests(&parsed).map_err(|e| translate_domain_error(&e))?;
    Ok(parsed)
}

fn parse_assignment_id(assignment_id: i64) -> Result<AssignmentId, ApiError> {
    AssignmentId::parse(assignment_id).map_err(|e| translate_domain_error(&e))
}

/// Creates an assignment and binds its slots.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The assignment and its requested slots
/// * `authenticated_actor` - The authenticated actor making the request
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Admin
/// - An identifier is not positive or the slot list is empty
/// - A referenced entity does not exist
/// - The assignment already exists, or the teacher or a room is busy
pub fn create_assignment(
    persistence: &mut Persistence,
    request: &CreateAssignmentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<CreateAssignmentResponse, ApiError> {
    AuthorizationService::authorize_schedule_change(authenticated_actor, "create_assignment")?;

    let key: AssignmentKey = AssignmentKey::new(
        TeacherId::parse(request.teacher_id).map_err(|e| translate_domain_error(&e))?,
        SubjectKey::new(
            CareerId::parse(request.career_id).map_err(|e| translate_domain_error(&e))?,
            &request.subject_code,
        )
        .map_err(|e| translate_domain_error(&e))?,
        GroupId::parse(request.group_id).map_err(|e| translate_domain_error(&e))?,
        PeriodId::parse(request.period_id).map_err(|e| translate_domain_error(&e))?,
    );
    let slots: Vec<SlotRequest> = parse_slots(&request.slots)?;
    let slot_count: usize = slots.len();

    let actor: Actor = authenticated_actor.to_audit_actor();
    let mut engine: SchedulingEngine<&mut Persistence> = SchedulingEngine::new(persistence);
    let outcome: ScheduleOutcome = engine
        .create_assignment(key.clone(), slots, actor, cause)
        .map_err(translate_scheduling_error)?;

    Ok(CreateAssignmentResponse {
        assignment_id: outcome.assignment_id.value(),
        event_id: outcome.event_id,
        message: format!(
            "Created assignment {} ({key}) with {slot_count} slot(s)",
            outcome.assignment_id
        ),
    })
}

/// Changes an assignment's identifying fields and/or its slots.
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not an Admin
/// - No change was requested, or the subject is only half given
/// - The assignment does not exist
/// - The new key is taken, or a slot conflicts with another assignment
pub fn update_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
    request: &UpdateAssignmentRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<UpdateAssignmentResponse, ApiError> {
    AuthorizationService::authorize_schedule_change(authenticated_actor, "update_assignment")?;

    let assignment_id: AssignmentId = parse_assignment_id(assignment_id)?;
    let subject: Option<SubjectKey> = match (request.career_id, request.subject_code.as_deref()) {
        (Some(career_id), Some(code)) => {
            let career_id: CareerId =
                CareerId::parse(career_id).map_err(|e| translate_domain_error(&e))?;
            Some(SubjectKey::new(career_id, code).map_err(|e| translate_domain_error(&e))?)
        }
        (None, None) => None,
        _ => {
            return Err(ApiError::InvalidInput {
                field: String::from("subject"),
                message: String::from("career_id and subject_code must be given together"),
            });
        }
    };

    let changes: AssignmentChanges = AssignmentChanges {
        teacher_id: request
            .teacher_id
            .map(TeacherId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        subject,
        group_id: request
            .group_id
            .map(GroupId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        period_id: request
            .period_id
            .map(PeriodId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        slots: request.slots.as_deref().map(parse_slots).transpose()?,
    };

    let actor: Actor = authenticated_actor.to_audit_actor();
    let mut engine: SchedulingEngine<&mut Persistence> = SchedulingEngine::new(persistence);
    let outcome: ScheduleOutcome = engine
        .update_assignment(assignment_id, changes, actor, cause)
        .map_err(translate_scheduling_error)?;

    Ok(UpdateAssignmentResponse {
        assignment_id: outcome.assignment_id.value(),
        event_id: outcome.event_id,
        message: format!("Updated assignment {}", outcome.assignment_id),
    })
}

/// Deletes an assignment and its slots.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the assignment does
/// not exist.
pub fn delete_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<DeleteAssignmentResponse, ApiError> {
    AuthorizationService::authorize_schedule_change(authenticated_actor, "delete_assignment")?;

    let assignment_id: AssignmentId = parse_assignment_id(assignment_id)?;
    let actor: Actor = authenticated_actor.to_audit_actor();
    let mut engine: SchedulingEngine<&mut Persistence> = SchedulingEngine::new(persistence);
    let outcome: ScheduleOutcome = engine
        .delete_assignment(assignment_id, actor, cause)
        .map_err(translate_scheduling_error)?;

    Ok(DeleteAssignmentResponse {
        assignment_id: outcome.assignment_id.value(),
        event_id: outcome.event_id,
        message: format!("Deleted assignment {}", outcome.assignment_id),
    })
}

/// Lists assignments with their grouped schedules.
///
/// # Errors
///
/// Returns an error if a filter identifier is not positive or the read fails.
pub fn list_assignments(
    persistence: &mut Persistence,
    request: &ListAssignmentsRequest,
    authenticated_actor: &AuthenticatedActor,
) -> Result<ListAssignmentsResponse, ApiError> {
    AuthorizationService::authorize_read(authenticated_actor)?;

    let filter: AssignmentFilter = AssignmentFilter {
        teacher_id: request
            .teacher_id
            .map(TeacherId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        period_id: request
            .period_id
            .map(PeriodId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        group_id: request
            .group_id
            .map(GroupId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
        career_id: request
            .career_id
            .map(CareerId::parse)
            .transpose()
            .map_err(|e| translate_domain_error(&e))?,
    };

    let assignments: Vec<AssignmentView> = persistence
        .list_assignment_views(&filter)
        .map_err(translate_persistence_error)?;
    debug!(count = assignments.len(), ?filter, "Listed assignments");

    Ok(ListAssignmentsResponse { assignments })
}

/// Returns one assignment with its grouped schedule.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the assignment does not exist.
pub fn get_assignment(
    persistence: &mut Persistence,
    assignment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AssignmentView, ApiError> {
    AuthorizationService::authorize_read(authenticated_actor)?;

    let assignment_id: AssignmentId = parse_assignment_id(assignment_id)?;
    persistence
        .get_assignment_view(assignment_id)
        .map_err(translate_persistence_error)
}

/// Returns the audit history of an assignment, including deleted ones.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no event was ever recorded for
/// the assignment.
pub fn get_assignment_history(
    persistence: &mut Persistence,
    assignment_id: i64,
    authenticated_actor: &AuthenticatedActor,
) -> Result<AssignmentHistoryResponse, ApiError> {
    AuthorizationService::authorize_read(authenticated_actor)?;

    let assignment_id: AssignmentId = parse_assignment_id(assignment_id)?;
    let events: Vec<AuditEvent> = persistence
        .list_audit_events(assignment_id)
        .map_err(translate_persistence_error)?;

    if events.is_empty() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Assignment history"),
            message: format!("No events recorded for assignment {assignment_id}"),
        });
    }

    Ok(AssignmentHistoryResponse {
        assignment_id: assignment_id.value(),
        events: events
            .into_iter()
            .map(|event| AuditEntryResponse {
                event_id: event.event_id.unwrap_or_default(),
                action: event.action.name,
                details: event.action.details,
                actor_id: event.actor.id,
                actor_type: event.actor.actor_type,
                cause_id: event.cause.id,
                cause_description: event.cause.description,
                before: event.before.data,
                after: event.after.data,
            })
            .collect(),
    })
}
