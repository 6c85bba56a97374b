//! CLI argument parsing for triage.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "triage",
    about = "A priority-ordered task list with an interactive console shell",
    version,
    after_help = "Logs are written to: ~/.local/share/triage/logs/triage.log"
)]
pub struct Cli {
    /// Read menu commands from a file instead of stdin (batch replay)
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}
