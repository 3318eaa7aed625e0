//! `kin` command-line boundary.
//!
//! # Responsibility
//! - Turn command-line input into core calls against one SQLite file.
//! - Render core results as text or JSON; present core errors as one line.

mod cli;
mod commands;
mod render;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = run(cli);
    kin_core::flush_logging();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(kin_core::default_log_level());
        kin_core::init_logging(level, log_dir)
            .map_err(anyhow::Error::msg)
            .context("failed to initialize logging")?;
    }

    let conn = kin_core::db::open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;

    let command = cli.command.name();
    let result = commands::dispatch(&conn, cli.command, cli.json);
    match &result {
        Ok(()) => info!("event=cli_command module=cli status=ok command={command}"),
        Err(err) => warn!("event=cli_command module=cli status=error command={command} error={err}"),
    }
    result
}
