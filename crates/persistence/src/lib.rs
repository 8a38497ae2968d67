// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the university scheduling system.
//!
//! This crate stores reference data, assignments, slot bindings and audit
//! events in `SQLite` through Diesel, and implements the scheduling engine's
//! storage traits on top of it.
//!
//! ## Transactions
//!
//! `Persistence` implements `unisched::TransactionalStore`. Every engine
//! operation runs inside `BEGIN IMMEDIATE`, so the write lock is held from
//! the first availability check until commit. Unique indexes on
//! `slot_bindings` back the teacher and room rules up at the storage level.
//!
//! ## Testing
//!
//! Tests run against isolated shared-cache in-memory databases. Each call
//! to `Persistence::new_in_memory()` gets its own database name from an
//! atomic counter.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::{Connection, SqliteConnection};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use unisched_audit::AuditEvent;
use unisched_domain::{
    AssignmentFilter, AssignmentId, AssignmentView, Career, Day, Group, ManagementPeriod, Room,
    Subject, Teacher, Timeslot,
};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::{CatalogImport, CatalogImportSummary};
pub use error::PersistenceError;
pub use store::SqliteScheduleStore;

use backend::PersistenceBackend;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_test_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::open(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if missing and switched to WAL mode.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InvalidPath(path.as_ref().display().to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::open(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Reference Data
    // ========================================================================

    /// Inserts a career.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id is taken.
    pub fn insert_career(&mut self, career: &Career) -> Result<(), PersistenceError> {
        mutations::catalog::insert_career(&mut self.conn, career)
    }

    /// Inserts a subject. Its career must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is taken or the career is missing.
    pub fn insert_subject(&mut self, subject: &Subject) -> Result<(), PersistenceError> {
        mutations::catalog::insert_subject(&mut self.conn, subject)
    }

    /// Inserts a teacher profile.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id is taken.
    pub fn insert_teacher(&mut self, teacher: &Teacher) -> Result<(), PersistenceError> {
        mutations::catalog::insert_teacher(&mut self.conn, teacher)
    }

    /// Inserts a class group.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id is taken.
    pub fn insert_group(&mut self, group: &Group) -> Result<(), PersistenceError> {
        mutations::catalog::insert_group(&mut self.conn, group)
    }

    /// Inserts a management period.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id is taken.
    pub fn insert_period(&mut self, period: &ManagementPeriod) -> Result<(), PersistenceError> {
        mutations::catalog::insert_period(&mut self.conn, period)
    }

    /// Inserts a timeslot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id is taken.
    pub fn insert_timeslot(&mut self, timeslot: &Timeslot) -> Result<(), PersistenceError> {
        mutations::catalog::insert_timeslot(&mut self.conn, timeslot)
    }

    /// Inserts a room.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UniqueViolation` if the id or code is taken.
    pub fn insert_room(&mut self, room: &Room) -> Result<(), PersistenceError> {
        mutations::catalog::insert_room(&mut self.conn, room)
    }

    /// Loads a batch of reference data in one transaction.
    ///
    /// Careers are written before subjects. If any insert fails nothing
    /// from the batch is kept.
    ///
    /// # Errors
    ///
    /// Returns the first insert error.
    pub fn load_catalog(
        &mut self,
        import: &CatalogImport,
    ) -> Result<CatalogImportSummary, PersistenceError> {
        let summary: CatalogImportSummary = self.conn.transaction(|conn| {
            for career in &import.careers {
                mutations::catalog::insert_career(conn, career)?;
            }
            for subject in &import.subjects {
                mutations::catalog::insert_subject(conn, subject)?;
            }
            for teacher in &import.teachers {
                mutations::catalog::insert_teacher(conn, teacher)?;
            }
            for group in &import.groups {
                mutations::catalog::insert_group(conn, group)?;
            }
            for period in &import.periods {
                mutations::catalog::insert_period(conn, period)?;
            }
            for timeslot in &import.timeslots {
                mutations::catalog::insert_timeslot(conn, timeslot)?;
            }
            for room in &import.rooms {
                mutations::catalog::insert_room(conn, room)?;
            }
            Ok::<CatalogImportSummary, PersistenceError>(CatalogImportSummary {
                careers: import.careers.len(),
                subjects: import.subjects.len(),
                teachers: import.teachers.len(),
                groups: import.groups.len(),
                periods: import.periods.len(),
                timeslots: import.timeslots.len(),
                rooms: import.rooms.len(),
            })
        })?;

        info!(?summary, "Loaded catalog");
        Ok(summary)
    }

    /// Lists days in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_days(&mut self) -> Result<Vec<Day>, PersistenceError> {
        queries::catalog::list_days(&mut self.conn)
    }

    /// Lists timeslots ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_timeslots(&mut self) -> Result<Vec<Timeslot>, PersistenceError> {
        queries::catalog::list_timeslots(&mut self.conn)
    }

    /// Lists rooms ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(&mut self) -> Result<Vec<Room>, PersistenceError> {
        queries::catalog::list_rooms(&mut self.conn)
    }

    /// Lists teachers ordered by last name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_teachers(&mut self) -> Result<Vec<Teacher>, PersistenceError> {
        queries::catalog::list_teachers(&mut self.conn)
    }

    /// Lists management periods, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_periods(&mut self) -> Result<Vec<ManagementPeriod>, PersistenceError> {
        queries::catalog::list_periods(&mut self.conn)
    }

    // ========================================================================
    // Schedule Views
    // ========================================================================

    /// Returns the display view of one assignment.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::AssignmentNotFound` if it does not exist.
    pub fn get_assignment_view(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<AssignmentView, PersistenceError> {
        queries::assignments::get_assignment_view(&mut self.conn, assignment_id.value())
    }

    /// Lists assignment views matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_assignment_views(
        &mut self,
        filter: &AssignmentFilter,
    ) -> Result<Vec<AssignmentView>, PersistenceError> {
        queries::assignments::list_assignment_views(&mut self.conn, filter)
    }

    // ========================================================================
    // Audit Events
    // ========================================================================

    /// Retrieves an audit event by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EventNotFound` if it does not exist.
    pub fn get_audit_event(&mut self, event_id: i64) -> Result<AuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Lists the audit trail of an assignment, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_audit_events(
        &mut self,
        assignment_id: AssignmentId,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        queries::audit::list_audit_events_for_assignment(&mut self.conn, assignment_id.value())
    }
}
