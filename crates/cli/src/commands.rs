// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command dispatch.
//!
//! Every command produces one JSON value. Printing is left to `main`.

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::info;
use unisched_api::{
    ApiError, AuthenticatedActor, CreateAssignmentRequest, ListAssignmentsRequest,
    UpdateAssignmentRequest, authenticate, create_assignment, delete_assignment, get_assignment,
    get_assignment_history, list_assignments, update_assignment,
};
use unisched_audit::Cause;
use unisched_domain::{Day, ManagementPeriod, Room, Teacher, Timeslot};
use unisched_persistence::{CatalogImport, CatalogImportSummary, Persistence};

use crate::args::{AssignmentCommand, CatalogCommand, Cli, Command, CreateArgs, UpdateArgs};
use crate::catalog_file::CatalogFile;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct CatalogListing {
    days: Vec<Day>,
    timeslots: Vec<Timeslot>,
    rooms: Vec<Room>,
    teachers: Vec<Teacher>,
    periods: Vec<ManagementPeriod>,
}

/// Opens the database named on the command line, or an in-memory one.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub fn open_persistence(cli: &Cli) -> Result<Persistence, CliError> {
    let persistence: Persistence = if let Some(path) = &cli.database {
        info!(path = %path.display(), "Using file-based database");
        Persistence::new_with_file(path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

fn cli_cause(reason: &str) -> Cause {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    Cause::new(
        format!("cli-{}", now.unix_timestamp_nanos()),
        reason.to_string(),
    )
}

/// Runs one command against `persistence`.
///
/// # Errors
///
/// Returns an error if authentication, validation, the operation or
/// rendering fails.
pub fn execute(persistence: &mut Persistence, cli: &Cli) -> Result<Value, CliError> {
    let actor: AuthenticatedActor =
        authenticate(&cli.actor, cli.role.into()).map_err(ApiError::from)?;

    match &cli.command {
        Command::Catalog(command) => execute_catalog(persistence, command),
        Command::Assignments(command) => execute_assignment(persistence, command, &actor),
    }
}

fn execute_catalog(
    persistence: &mut Persistence,
    command: &CatalogCommand,
) -> Result<Value, CliError> {
    match command {
        CatalogCommand::Load { file } => {
            let import: CatalogImport = CatalogFile::read(file)?.into_import()?;
            let summary: CatalogImportSummary = persistence.load_catalog(&import)?;
            Ok(serde_json::to_value(summary)?)
        }
        CatalogCommand::Show => {
            let listing: CatalogListing = CatalogListing {
                days: persistence.list_days()?,
                timeslots: persistence.list_timeslots()?,
                rooms: persistence.list_rooms()?,
                teachers: persistence.list_teachers()?,
                periods: persistence.list_periods()?,
            };
            Ok(serde_json::to_value(listing)?)
        }
    }
}

fn execute_assignment(
    persistence: &mut Persistence,
    command: &AssignmentCommand,
    actor: &AuthenticatedActor,
) -> Result<Value, CliError> {
    let value: Value = match command {
        AssignmentCommand::List(args) => {
            let request: ListAssignmentsRequest = ListAssignmentsRequest {
                teacher_id: args.teacher,
                period_id: args.period,
                group_id: args.group,
                career_id: args.career,
            };
            serde_json::to_value(list_assignments(persistence, &request, actor)?)?
        }
        AssignmentCommand::Show { id } => {
            serde_json::to_value(get_assignment(persistence, *id, actor)?)?
        }
        AssignmentCommand::Create(args) => {
            let request: CreateAssignmentRequest = create_request(args);
            serde_json::to_value(create_assignment(
                persistence,
                &request,
                actor,
                cli_cause(&args.reason.reason),
            )?)?
        }
        AssignmentCommand::Update(args) => {
            let request: UpdateAssignmentRequest = update_request(args);
            serde_json::to_value(update_assignment(
                persistence,
                args.id,
                &request,
                actor,
                cli_cause(&args.reason.reason),
            )?)?
        }
        AssignmentCommand::Delete { id, reason } => serde_json::to_value(delete_assignment(
            persistence,
            *id,
            actor,
            cli_cause(&reason.reason),
        )?)?,
        AssignmentCommand::History { id } => {
            serde_json::to_value(get_assignment_history(persistence, *id, actor)?)?
        }
    };
    Ok(value)
}

/// Builds a create request from command-line arguments.
#[must_use]
pub fn create_request(args: &CreateArgs) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        teacher_id: args.teacher,
        career_id: args.career,
        subject_code: args.subject.clone(),
        group_id: args.group,
        period_id: args.period,
        slots: args.slots.clone(),
    }
}

/// Builds an update request from command-line arguments.
///
/// An empty `--slot` list leaves the slots unchanged.
#[must_use]
pub fn update_request(args: &UpdateArgs) -> UpdateAssignmentRequest {
    UpdateAssignmentRequest {
        teacher_id: args.teacher,
        career_id: args.career,
        subject_code: args.subject.clone(),
        group_id: args.group,
        period_id: args.period,
        slots: if args.slots.is_empty() {
            None
        } else {
            Some(args.slots.clone())
        },
    }
}
