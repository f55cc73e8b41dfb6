// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rampart` command-line tool.
//!
//! Startup sequence:
//! 1. Parse arguments (usage and key errors exit with status 2).
//! 2. Load and validate [`settings::Settings`] from `RAMPART_*` variables.
//! 3. Initialise logging on stderr.
//! 4. Run the subcommand and print its summary line.

mod cli;
mod commands;
mod io;
mod key;
mod settings;
mod telemetry;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    let settings = settings::Settings::from_env()?;
    telemetry::init(&settings)?;

    let summary = commands::run(&cli.command)?;
    println!("{summary}");

    Ok(())
}
