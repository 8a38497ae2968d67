// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection setup.
//!
//! Everything here is raw SQL that Diesel has no DSL for: PRAGMA
//! statements and `last_insert_rowid()`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Schema migrations, embedded at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How long a writer waits for the database lock before giving up.
///
/// Scheduling writes take the lock with `BEGIN IMMEDIATE`, so a second
/// writer queues here rather than failing with `SQLITE_BUSY`.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Settings applied to every new connection, in order.
fn connection_pragmas() -> [String; 2] {
    [
        String::from("PRAGMA foreign_keys = ON"),
        format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}"),
    ]
}

#[derive(QueryableByName)]
struct ForeignKeysRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

fn apply_pragma(conn: &mut SqliteConnection, pragma: &str) -> Result<(), PersistenceError> {
    diesel::sql_query(pragma)
        .execute(conn)
        .map_err(|e| PersistenceError::Pragma {
            pragma: pragma.to_string(),
            message: e.to_string(),
        })?;
    debug!(pragma, "Applied connection setting");
    Ok(())
}

/// Returns the rowid generated by the most recent insert on `conn`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Fails unless foreign keys are enforced on `conn`.
///
/// Removing an assignment relies on `ON DELETE CASCADE` to drop its slot
/// bindings.
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeysDisabled` if enforcement is off.
pub fn require_foreign_keys(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let row: ForeignKeysRow = diesel::sql_query("PRAGMA foreign_keys").get_result(conn)?;
    if row.foreign_keys == 0 {
        return Err(PersistenceError::ForeignKeysDisabled);
    }
    Ok(())
}

/// Opens `database_url`, applies the connection settings and brings the
/// schema up to date.
///
/// # Arguments
///
/// * `database_url` - A shared-cache memory URI or a file path
///
/// # Errors
///
/// Returns an error if the connection, a setting or a migration fails.
pub fn open(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, "Opening scheduling database");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    for pragma in connection_pragmas() {
        apply_pragma(&mut conn, &pragma)?;
    }

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::Migration(e.to_string()))?
        .len();
    info!(applied, "Schema is up to date");

    Ok(conn)
}

/// Switches a file database to write-ahead logging.
///
/// Readers then see the last committed schedule while a writer holds the
/// lock.
///
/// # Errors
///
/// Returns an error if the PRAGMA fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    apply_pragma(conn, "PRAGMA journal_mode = WAL")
}
