// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Darrow — legal document rendering from the command line.
//
// Entry point. Initialises logging, parses arguments, and dispatches to the
// subcommand handlers.

mod cli;
mod commands;

use clap::Parser;
use darrow_core::human_errors::humanize_error;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    init_tracing();
    tracing::info!("Darrow starting");

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Render(args) => commands::render(args).map(|summary| summary.all_failed()),
        Commands::Template(args) => commands::template(args).map(|()| false),
    };

    match result {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(err) => {
            let human = humanize_error(&err);
            error!(error = %err, "command failed");
            eprintln!("{} {}", human.message, human.suggestion);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
