// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the university scheduling system.
//!
//! Handlers take plain request DTOs, authorize the caller, validate input
//! into domain types and run the scheduling engine over `Persistence`.
//! Every failure leaves the crate as an `ApiError` carrying a status code.

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

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate};
pub use error::{
    ApiError, AuthError, translate_domain_error, translate_persistence_error,
    translate_scheduling_error,
};
pub use handlers::{
    create_assignment, delete_assignment, get_assignment, get_assignment_history,
    list_assignments, update_assignment,
};
pub use request_response::{
    AssignmentHistoryResponse, AuditEntryResponse, CreateAssignmentRequest,
    CreateAssignmentResponse, DeleteAssignmentResponse, ListAssignmentsRequest,
    ListAssignmentsResponse, SlotInput, UpdateAssignmentRequest, UpdateAssignmentResponse,
};
