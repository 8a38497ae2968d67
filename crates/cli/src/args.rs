// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use unisched_api::{Role, SlotInput};

use crate::slot_arg::parse_slot_arg;

/// University scheduling administration tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Identifier of the acting user, recorded in the audit trail.
    #[arg(long, global = true, default_value = "admin")]
    pub actor: String,

    /// Role of the acting user.
    #[arg(long, global = true, value_enum, default_value_t = RoleArg::Admin)]
    pub role: RoleArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Teacher,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Self::Admin,
            RoleArg::Teacher => Self::Teacher,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reference data: careers, subjects, teachers, groups, periods, timeslots, rooms
    #[command(subcommand)]
    Catalog(CatalogCommand),

    /// Teaching assignments and their weekly slots
    #[command(subcommand)]
    Assignments(AssignmentCommand),
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// Load reference data from a JSON file in one transaction
    Load {
        /// Path to the catalog file
        file: PathBuf,
    },
    /// Show days, timeslots, rooms, teachers and periods
    Show,
}

#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    /// List assignments, optionally filtered
    List(ListArgs),
    /// Show one assignment and its schedule
    Show {
        /// The assignment id
        id: i64,
    },
    /// Create an assignment with its slots
    Create(CreateArgs),
    /// Change an assignment's fields or replace its slots
    Update(UpdateArgs),
    /// Delete an assignment and its slots
    Delete {
        /// The assignment id
        id: i64,

        #[command(flatten)]
        reason: ReasonArgs,
    },
    /// Show the audit history of an assignment
    History {
        /// The assignment id
        id: i64,
    },
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[arg(long)]
    pub teacher: Option<i64>,
    #[arg(long)]
    pub period: Option<i64>,
    #[arg(long)]
    pub group: Option<i64>,
    #[arg(long)]
    pub career: Option<i64>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub teacher: i64,
    /// Career owning the subject
    #[arg(long)]
    pub career: i64,
    /// Subject code within the career
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub group: i64,
    #[arg(long)]
    pub period: i64,
    /// A weekly slot; repeat for several
    #[arg(long = "slot", value_name = "DAY:TIMESLOT[:ROOM]", value_parser = parse_slot_arg, required = true)]
    pub slots: Vec<SlotInput>,

    #[command(flatten)]
    pub reason: ReasonArgs,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// The assignment id
    pub id: i64,
    #[arg(long)]
    pub teacher: Option<i64>,
    /// Career owning the new subject; requires --subject
    #[arg(long, requires = "subject")]
    pub career: Option<i64>,
    /// New subject code; requires --career
    #[arg(long, requires = "career")]
    pub subject: Option<String>,
    #[arg(long)]
    pub group: Option<i64>,
    #[arg(long)]
    pub period: Option<i64>,
    /// Replacement slot list; repeat for several
    #[arg(long = "slot", value_name = "DAY:TIMESLOT[:ROOM]", value_parser = parse_slot_arg)]
    pub slots: Vec<SlotInput>,

    #[command(flatten)]
    pub reason: ReasonArgs,
}

#[derive(Args, Debug)]
pub struct ReasonArgs {
    /// Why the change is made, recorded in the audit trail
    #[arg(long, default_value = "Command-line request")]
    pub reason: String,
}
