// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! All mutations use Diesel DSL. The only backend-specific helper they
//! reach for is `last_insert_rowid()`, through `PersistenceBackend`.
//!
//! ## Module Organization
//!
//! - `assignments`: Assignment rows and slot bindings
//! - `audit`: Audit event persistence
//! - `catalog`: Reference data inserts

pub mod assignments;
pub mod audit;
pub mod catalog;
