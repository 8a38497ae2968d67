// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assignment scheduling core.
//!
//! Allocates a teacher, subject, group and management period to one or more
//! weekly (day, timeslot, room) slots while guaranteeing that no teacher and
//! no room is booked twice for the same day and timeslot. Storage is
//! injected through the traits in `store`.

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

mod apply;
mod command;
mod engine;
mod error;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{ScheduleOutcome, apply, bind_slots};
pub use command::{AssignmentChanges, Command};
pub use engine::SchedulingEngine;
pub use error::{ConflictKind, SchedulingError, StoreError};
pub use store::{AssignmentRepository, CatalogEntity, CatalogStore, TransactionalStore};
