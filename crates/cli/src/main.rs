// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod args;
mod catalog_file;
mod commands;
mod error;
mod slot_arg;

#[cfg(test)]
mod tests;

use clap::Parser;
use serde_json::Value;
use unisched_persistence::Persistence;

use crate::args::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut persistence: Persistence = commands::open_persistence(&cli)?;
    let output: Value = commands::execute(&mut persistence, &cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
