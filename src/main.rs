//! Triage CLI - an interactive, priority-ordered task manager.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use triage::Shell;

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("triage")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("triage.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout().lock();

    match cli.script {
        Some(path) => {
            let file = fs::File::open(&path)
                .with_context(|| format!("Failed to open script file {}", path.display()))?;
            info!("Replaying session from {}", path.display());
            let mut shell = Shell::new(BufReader::new(file), stdout);
            shell.run().context("Session failed")?;
        }
        None => {
            let stdin = io::stdin().lock();
            let mut shell = Shell::new(stdin, stdout);
            shell.run().context("Session failed")?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("Command: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
