// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::process::ExitCode;

use clap::Parser;
use nest_scaffold::cli::Cli;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.run() {
        Ok(written) => {
            info!(files = written.len(), "Scaffold complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Scaffold generation failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
