// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Identity is owned by another subsystem. This module only checks that a
//! caller presented an identity and that its role allows the action.

use unisched_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Academic administration: may create, change and remove assignments.
    Admin,
    /// Teaching staff: may read schedules.
    Teacher,
}

impl Role {
    /// Returns the lowercase name recorded in audit events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::Teacher => write!(f, "Teacher"),
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit `Actor`.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// Accepts an identity handed over by the identity subsystem.
///
/// # Arguments
///
/// * `actor_id` - The identifier of the actor to authenticate
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns an error if the identifier is blank.
pub fn authenticate(actor_id: &str, role: Role) -> Result<AuthenticatedActor, AuthError> {
    let trimmed: &str = actor_id.trim();
    if trimmed.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(trimmed.to_string(), role))
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may create, update or delete assignments.
    ///
    /// Only Admin actors may change the schedule.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action name reported on refusal
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_schedule_change(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Teacher => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: Role::Admin.to_string(),
            }),
        }
    }

    /// Checks if an actor may read schedules and audit history.
    ///
    /// Every role may read.
    ///
    /// # Errors
    ///
    /// Never fails for the current roles.
    pub const fn authorize_read(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::Teacher => Ok(()),
        }
    }
}
