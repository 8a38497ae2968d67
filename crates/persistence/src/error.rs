// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use unisched::StoreError;

/// Errors raised by the `SQLite` store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Opening the database failed.
    Connection(String),
    /// The embedded schema migrations could not be applied.
    Migration(String),
    /// A connection setting could not be applied.
    Pragma {
        /// The PRAGMA statement that failed.
        pragma: String,
        /// The database message.
        message: String,
    },
    /// Foreign keys are off for this connection.
    ForeignKeysDisabled,
    /// The database path is not valid UTF-8.
    InvalidPath(String),
    /// A unique or primary key constraint rejected a write.
    UniqueViolation(String),
    /// A write referenced a row that does not exist.
    MissingReference(String),
    /// No assignment has this id.
    AssignmentNotFound(i64),
    /// No audit event has this id.
    EventNotFound(i64),
    /// A stored row holds a value the domain rejects.
    CorruptRow(String),
    /// An audit payload could not be encoded or decoded.
    Serialization(String),
    /// Any other database failure.
    Database(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "Could not open database: {msg}"),
            Self::Migration(msg) => write!(f, "Schema migration failed: {msg}"),
            Self::Pragma { pragma, message } => write!(f, "{pragma} failed: {message}"),
            Self::ForeignKeysDisabled => {
                write!(f, "Foreign key enforcement is off for this connection")
            }
            Self::InvalidPath(path) => write!(f, "Database path is not valid UTF-8: {path}"),
            Self::UniqueViolation(msg) => write!(f, "Unique constraint violation: {msg}"),
            Self::MissingReference(msg) => write!(f, "Referenced row does not exist: {msg}"),
            Self::AssignmentNotFound(id) => write!(f, "Assignment {id} not found"),
            Self::EventNotFound(id) => write!(f, "Audit event {id} not found"),
            Self::CorruptRow(msg) => write!(f, "Stored row is invalid: {msg}"),
            Self::Serialization(msg) => write!(f, "Audit payload error: {msg}"),
            Self::Database(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<DieselError> for PersistenceError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                Self::MissingReference(info.message().to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::UniqueViolation(msg) => Self::UniqueViolation(msg),
            other => Self::Backend(other.to_string()),
        }
    }
}
