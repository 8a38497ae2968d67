// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssignmentRepository, CatalogEntity, CatalogStore, SchedulingError, StoreError,
    TransactionalStore,
};
use std::collections::{BTreeMap, HashSet};
use unisched_audit::{Actor, AuditEvent, Cause};
use unisched_domain::{
    Assignment, AssignmentId, AssignmentKey, CareerId, DayId, GroupId, PeriodId, RoomId,
    SlotBinding, SlotBindingId, SlotRequest, SubjectKey, TeacherId, TimeslotId,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn key(teacher: i64, code: &str, group: i64, period: i64) -> AssignmentKey {
    AssignmentKey::new(
        TeacherId::new(teacher),
        SubjectKey::new(CareerId::new(1), code).unwrap(),
        GroupId::new(group),
        PeriodId::new(period),
    )
}

pub fn slot(day: i64, timeslot: i64, room: Option<i64>) -> SlotRequest {
    SlotRequest::new(
        DayId::new(day),
        TimeslotId::new(timeslot),
        room.map(RoomId::new),
    )
}

#[derive(Debug, Clone, Default)]
struct StoreState {
    catalog: HashSet<CatalogEntity>,
    assignments: BTreeMap<AssignmentId, AssignmentKey>,
    bindings: Vec<(SlotBinding, TeacherId)>,
    audit_events: Vec<AuditEvent>,
    next_id: i64,
}

/// An in-memory store with snapshot rollback, for exercising the engine
/// without a database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: StoreState,
    /// When set, busy checks report every slot as free until a unique
    /// constraint rejects an insert, imitating a concurrent writer.
    pub stale_reads: bool,
    /// When set, recording an audit event fails.
    pub fail_audit: bool,
}

impl InMemoryStore {
    /// Creates a store with teachers 1..=3, subjects INF-110 and INF-120 in
    /// career 1, groups 1..=2, periods 1..=2, days 1..=5, timeslots 1..=4
    /// and rooms 1..=3.
    pub fn with_catalog() -> Self {
        let mut store: Self = Self::default();
        let catalog: &mut HashSet<CatalogEntity> = &mut store.state.catalog;
        for id in 1..=3 {
            catalog.insert(CatalogEntity::Teacher(TeacherId::new(id)));
            catalog.insert(CatalogEntity::Room(RoomId::new(id)));
        }
        for code in ["INF-110", "INF-120"] {
            catalog.insert(CatalogEntity::Subject(
                SubjectKey::new(CareerId::new(1), code).unwrap(),
            ));
        }
        for id in 1..=2 {
            catalog.insert(CatalogEntity::Group(GroupId::new(id)));
            catalog.insert(CatalogEntity::Period(PeriodId::new(id)));
        }
        for id in 1..=5 {
            catalog.insert(CatalogEntity::Day(DayId::new(id)));
        }
        for id in 1..=4 {
            catalog.insert(CatalogEntity::Timeslot(TimeslotId::new(id)));
        }
        store
    }

    pub fn assignment_count(&self) -> usize {
        self.state.assignments.len()
    }

    pub fn binding_count(&self) -> usize {
        self.state.bindings.len()
    }

    pub fn audit_events(&self) -> &[AuditEvent] {
        &self.state.audit_events
    }

    pub fn slots_of(&self, assignment_id: AssignmentId) -> Vec<SlotRequest> {
        self.state
            .bindings
            .iter()
            .filter(|(binding, _)| binding.assignment_id == assignment_id)
            .map(|(binding, _)| binding.as_request())
            .collect()
    }

    pub fn key_of(&self, assignment_id: AssignmentId) -> Option<AssignmentKey> {
        self.state.assignments.get(&assignment_id).cloned()
    }

    fn next_id(&mut self) -> i64 {
        self.state.next_id += 1;
        self.state.next_id
    }
}

impl CatalogStore for InMemoryStore {
    fn exists(&mut self, entity: &CatalogEntity) -> Result<bool, StoreError> {
        Ok(self.state.catalog.contains(entity))
    }
}

impl AssignmentRepository for InMemoryStore {
    fn find_assignment(&mut self, key: &AssignmentKey) -> Result<Option<Assignment>, StoreError> {
        Ok(self
            .state
            .assignments
            .iter()
            .find(|(_, existing)| *existing == key)
            .map(|(id, existing)| Assignment::new(*id, existing.clone())))
    }

    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(self
            .state
            .assignments
            .get(&assignment_id)
            .map(|existing| Assignment::new(assignment_id, existing.clone())))
    }

    fn create_assignment(&mut self, key: &AssignmentKey) -> Result<AssignmentId, StoreError> {
        if self.state.assignments.values().any(|existing| existing == key) {
            return Err(StoreError::UniqueViolation(String::from("assignments key")));
        }
        let assignment_id: AssignmentId = AssignmentId::new(self.next_id());
        self.state.assignments.insert(assignment_id, key.clone());
        Ok(assignment_id)
    }

    fn update_assignment_key(
        &mut self,
        assignment_id: AssignmentId,
        key: &AssignmentKey,
    ) -> Result<(), StoreError> {
        if self
            .state
            .assignments
            .iter()
            .any(|(id, existing)| *id != assignment_id && existing == key)
        {
            return Err(StoreError::UniqueViolation(String::from("assignments key")));
        }
        self.state.assignments.insert(assignment_id, key.clone());
        Ok(())
    }

    fn list_slot_bindings(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Vec<SlotBinding>, StoreError> {
        Ok(self
            .state
            .bindings
            .iter()
            .filter(|(binding, _)| binding.assignment_id == assignment_id)
            .map(|(binding, _)| *binding)
            .collect())
    }

    fn is_teacher_busy(
        &mut self,
        teacher_id: TeacherId,
        day_id: DayId,
        timeslot_id: TimeslotId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError> {
        if self.stale_reads {
            return Ok(false);
        }
        let assignments: &BTreeMap<AssignmentId, AssignmentKey> = &self.state.assignments;
        Ok(self.state.bindings.iter().any(|(binding, _)| {
            Some(binding.assignment_id) != exclude
                && binding.day_id == day_id
                && binding.timeslot_id == timeslot_id
                && assignments
                    .get(&binding.assignment_id)
                    .is_some_and(|owner| owner.teacher_id == teacher_id)
        }))
    }

    fn is_room_busy(
        &mut self,
        day_id: DayId,
        timeslot_id: TimeslotId,
        room_id: RoomId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError> {
        if self.stale_reads {
            return Ok(false);
        }
        Ok(self.state.bindings.iter().any(|(binding, _)| {
            Some(binding.assignment_id) != exclude
                && binding.day_id == day_id
                && binding.timeslot_id == timeslot_id
                && binding.room_id == Some(room_id)
        }))
    }

    fn insert_slot_binding(
        &mut self,
        assignment_id: AssignmentId,
        teacher_id: TeacherId,
        slot: &SlotRequest,
    ) -> Result<SlotBindingId, StoreError> {
        let clash: bool = self.state.bindings.iter().any(|(binding, owner)| {
            binding.day_id == slot.day_id
                && binding.timeslot_id == slot.timeslot_id
                && (*owner == teacher_id
                    || (slot.room_id.is_some() && binding.room_id == slot.room_id))
        });
        if clash {
            self.stale_reads = false;
            return Err(StoreError::UniqueViolation(String::from("slot_bindings")));
        }

        let slot_binding_id: SlotBindingId = SlotBindingId::new(self.next_id());
        self.state.bindings.push((
            SlotBinding {
                slot_binding_id,
                assignment_id,
                day_id: slot.day_id,
                timeslot_id: slot.timeslot_id,
                room_id: slot.room_id,
            },
            teacher_id,
        ));
        Ok(slot_binding_id)
    }

    fn delete_slot_bindings(&mut self, assignment_id: AssignmentId) -> Result<usize, StoreError> {
        let before: usize = self.state.bindings.len();
        self.state
            .bindings
            .retain(|(binding, _)| binding.assignment_id != assignment_id);
        Ok(before - self.state.bindings.len())
    }

    fn delete_assignment(&mut self, assignment_id: AssignmentId) -> Result<bool, StoreError> {
        if self.state.assignments.remove(&assignment_id).is_none() {
            return Ok(false);
        }
        self.delete_slot_bindings(assignment_id)?;
        Ok(true)
    }

    fn record_audit_event(&mut self, event: &AuditEvent) -> Result<i64, StoreError> {
        if self.fail_audit {
            return Err(StoreError::Backend(String::from("audit log unavailable")));
        }
        let event_id: i64 = self.next_id();
        self.state
            .audit_events
            .push(event.clone().with_event_id(event_id));
        Ok(event_id)
    }
}

impl TransactionalStore for InMemoryStore {
    fn transaction<T, F>(&mut self, f: F) -> Result<T, SchedulingError>
    where
        F: FnOnce(&mut dyn AssignmentRepository) -> Result<T, SchedulingError>,
    {
        let snapshot: StoreState = self.state.clone();
        let result: Result<T, SchedulingError> = f(self);
        if result.is_err() {
            self.state = snapshot;
        }
        result
    }
}
