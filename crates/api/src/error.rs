// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use unisched::{ConflictKind, SchedulingError};
use unisched_domain::DomainError;
use unisched_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A scheduling rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the HTTP-style status code a transport should report.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::AuthenticationFailed { .. } => 401,
            Self::Unauthorized { .. } => 403,
            Self::ResourceNotFound { .. } => 404,
            Self::DomainRuleViolation { .. } => 409,
            Self::InvalidInput { .. } => 422,
            Self::Internal { .. } => 500,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain validation error into an API error.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: err.field().to_string(),
        message: err.to_string(),
    }
}

/// Translates a scheduling error into an API error.
///
/// Conflicts become rule violations named after the rule that was broken:
/// `unique_assignment`, `teacher_availability` or `room_availability`.
#[must_use]
pub fn translate_scheduling_error(err: SchedulingError) -> ApiError {
    match err {
        SchedulingError::Validation { field, message } => ApiError::InvalidInput { field, message },
        SchedulingError::Conflict(kind) => {
            let rule: &str = match kind {
                ConflictKind::DuplicateAssignment => "unique_assignment",
                ConflictKind::TeacherBusy { .. } => "teacher_availability",
                ConflictKind::RoomBusy { .. } => "room_availability",
            };
            ApiError::DomainRuleViolation {
                rule: rule.to_string(),
                message: SchedulingError::Conflict(kind).to_string(),
            }
        }
        SchedulingError::NotFound(assignment_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment {assignment_id} does not exist"),
        },
        SchedulingError::Storage(message) => ApiError::Internal { message },
    }
}

/// Translates a persistence error raised by a read into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::AssignmentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Assignment"),
            message: format!("Assignment {id} does not exist"),
        },
        PersistenceError::EventNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Audit event"),
            message: format!("Audit event {id} does not exist"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
