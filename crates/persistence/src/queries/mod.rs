// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `assignments`: Assignment lookups, availability checks and schedule views
//! - `audit`: Audit event retrieval
//! - `catalog`: Reference data existence checks and listings

pub mod assignments;
pub mod audit;
pub mod catalog;
