// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use unisched_audit::{Action, Actor, Cause, StateSnapshot};
use unisched_domain::{Career, Group, ManagementPeriod, Room, Subject, Teacher, Timeslot};

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

impl From<&Actor> for ActorData {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            actor_type: actor.actor_type.clone(),
        }
    }
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

impl From<&Cause> for CauseData {
    fn from(cause: &Cause) -> Self {
        Self {
            id: cause.id.clone(),
            description: cause.description.clone(),
        }
    }
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

impl From<&Action> for ActionData {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name.clone(),
            details: action.details.clone(),
        }
    }
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

impl From<&StateSnapshot> for StateSnapshotData {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            data: snapshot.data.clone(),
        }
    }
}

/// A batch of validated reference data to load in one transaction.
///
/// Entities are inserted in dependency order: careers before subjects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogImport {
    pub careers: Vec<Career>,
    pub subjects: Vec<Subject>,
    pub teachers: Vec<Teacher>,
    pub groups: Vec<Group>,
    pub periods: Vec<ManagementPeriod>,
    pub timeslots: Vec<Timeslot>,
    pub rooms: Vec<Room>,
}

/// Row counts written by a catalog import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogImportSummary {
    pub careers: usize,
    pub subjects: usize,
    pub teachers: usize,
    pub groups: usize,
    pub periods: usize,
    pub timeslots: usize,
    pub rooms: usize,
}
