// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;
use unisched_api::ApiError;
use unisched_domain::DomainError;
use unisched_persistence::PersistenceError;

/// Errors raised while parsing a `DAY:TIMESLOT[:ROOM]` argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlotArgError {
    #[error("expected DAY:TIMESLOT[:ROOM], got '{0}'")]
    WrongShape(String),

    #[error("'{value}' is not a valid {part} identifier")]
    NotANumber { part: &'static str, value: String },
}

/// Errors surfaced by the command-line tool.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog file {} is not valid JSON: {source}", .path.display())]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid catalog entry: {0}")]
    CatalogEntry(#[from] DomainError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("{} (status {})", .0, .0.status_code())]
    Api(#[from] ApiError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
