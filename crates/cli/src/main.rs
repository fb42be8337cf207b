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

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use clap::Parser;
use color_eyre::Result;
use facilitydesk_persistence::Persistence;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn open_persistence(args: &Args) -> Result<Persistence> {
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using database file: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut persistence: Persistence = open_persistence(&args)?;
    let output: Value = commands::run(
        args.command,
        &mut persistence,
        &args.credentials,
        commands::current_date(),
    )?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
