// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Connection-level helpers.
//!
//! Queries and mutations never issue raw SQL. The few statements Diesel
//! cannot express are reached through `PersistenceBackend`.

pub mod sqlite;

use diesel::{Connection, SqliteConnection};

use crate::error::PersistenceError;

/// Raw-SQL operations a scheduling connection must support.
pub trait PersistenceBackend: Connection {
    /// Returns the id generated by the last insert on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError>;

    /// Fails unless foreign keys are enforced on this connection.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ForeignKeysDisabled` if they are not.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn get_last_insert_rowid(&mut self) -> Result<i64, PersistenceError> {
        sqlite::last_insert_rowid(self)
    }

    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::require_foreign_keys(self)
    }
}
