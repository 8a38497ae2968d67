// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` implementation of the scheduling engine's storage seams.

use diesel::SqliteConnection;
use tracing::debug;
use unisched::{
    AssignmentRepository, CatalogEntity, CatalogStore, SchedulingError, StoreError,
    TransactionalStore,
};
use unisched_audit::AuditEvent;
use unisched_domain::{
    Assignment, AssignmentId, AssignmentKey, DayId, RoomId, SlotBinding, SlotBindingId,
    SlotRequest, TeacherId, TimeslotId,
};

use crate::Persistence;
use crate::{mutations, queries};

/// A repository view over a connection that is already inside a transaction.
pub struct SqliteScheduleStore<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SqliteScheduleStore<'a> {
    pub const fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }
}

impl CatalogStore for SqliteScheduleStore<'_> {
    fn exists(&mut self, entity: &CatalogEntity) -> Result<bool, StoreError> {
        Ok(queries::catalog::entity_exists(self.conn, entity)?)
    }
}

impl AssignmentRepository for SqliteScheduleStore<'_> {
    fn find_assignment(&mut self, key: &AssignmentKey) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::assignments::find_assignment(self.conn, key)?)
    }

    fn get_assignment(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Option<Assignment>, StoreError> {
        Ok(queries::assignments::get_assignment(
            self.conn,
            assignment_id.value(),
        )?)
    }

    fn create_assignment(&mut self, key: &AssignmentKey) -> Result<AssignmentId, StoreError> {
        let id: i64 = mutations::assignments::create_assignment(self.conn, key)?;
        Ok(AssignmentId::new(id))
    }

    fn update_assignment_key(
        &mut self,
        assignment_id: AssignmentId,
        key: &AssignmentKey,
    ) -> Result<(), StoreError> {
        Ok(mutations::assignments::update_assignment_key(
            self.conn,
            assignment_id.value(),
            key,
        )?)
    }

    fn list_slot_bindings(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Vec<SlotBinding>, StoreError> {
        Ok(queries::assignments::list_slot_bindings(
            self.conn,
            assignment_id.value(),
        )?)
    }

    fn is_teacher_busy(
        &mut self,
        teacher_id: TeacherId,
        day_id: DayId,
        timeslot_id: TimeslotId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError> {
        Ok(queries::assignments::is_teacher_busy(
            self.conn,
            teacher_id.value(),
            day_id.value(),
            timeslot_id.value(),
            exclude.map(AssignmentId::value),
        )?)
    }

    fn is_room_busy(
        &mut self,
        day_id: DayId,
        timeslot_id: TimeslotId,
        room_id: RoomId,
        exclude: Option<AssignmentId>,
    ) -> Result<bool, StoreError> {
        Ok(queries::assignments::is_room_busy(
            self.conn,
            day_id.value(),
            timeslot_id.value(),
            room_id.value(),
            exclude.map(AssignmentId::value),
        )?)
    }

    fn insert_slot_binding(
        &mut self,
        assignment_id: AssignmentId,
        teacher_id: TeacherId,
        slot: &SlotRequest,
    ) -> Result<SlotBindingId, StoreError> {
        let id: i64 = mutations::assignments::insert_slot_binding(
            self.conn,
            assignment_id.value(),
            teacher_id.value(),
            slot,
        )?;
        Ok(SlotBindingId::new(id))
    }

    fn delete_slot_bindings(&mut self, assignment_id: AssignmentId) -> Result<usize, StoreError> {
        Ok(mutations::assignments::delete_slot_bindings(
            self.conn,
            assignment_id.value(),
        )?)
    }

    fn delete_assignment(&mut self, assignment_id: AssignmentId) -> Result<bool, StoreError> {
        Ok(mutations::assignments::delete_assignment(
            self.conn,
            assignment_id.value(),
        )?)
    }

    fn record_audit_event(&mut self, event: &AuditEvent) -> Result<i64, StoreError> {
        Ok(mutations::audit::insert_audit_event(self.conn, event)?)
    }
}

/// Error carried out of a Diesel transaction closure.
///
/// Diesel requires the closure's error type to absorb its own errors so it
/// can report a failed `COMMIT` or `ROLLBACK`.
enum TransactionError {
    Scheduling(SchedulingError),
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for TransactionError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Database(err)
    }
}

impl TransactionalStore for Persistence {
    /// Runs `f` inside `BEGIN IMMEDIATE`.
    ///
    /// The write lock is taken before the first availability check, so a
    /// second writer waits (up to the busy timeout) instead of reading a
    /// state that is about to change.
    fn transaction<T, F>(&mut self, f: F) -> Result<T, SchedulingError>
    where
        F: FnOnce(&mut dyn AssignmentRepository) -> Result<T, SchedulingError>,
    {
        let result: Result<T, TransactionError> = self.conn.immediate_transaction(|conn| {
            let mut store: SqliteScheduleStore<'_> = SqliteScheduleStore::new(conn);
            f(&mut store).map_err(TransactionError::Scheduling)
        });

        match result {
            Ok(value) => Ok(value),
            Err(TransactionError::Scheduling(err)) => {
                debug!(error = %err, "Transaction rolled back");
                Err(err)
            }
            Err(TransactionError::Database(err)) => {
                Err(SchedulingError::Storage(format!("Transaction failed: {err}")))
            }
        }
    }
}
