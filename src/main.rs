//! CLI entry point for floor plan wall extraction

use clap::Parser;
use floorwalls::io::cli::{Cli, FileProcessor};
use std::io::IsTerminal;

fn main() -> floorwalls::Result<()> {
    let cli = Cli::parse();

    // A hidden progress bar prints nothing, so per-room lines go to the log instead
    let default_filter = if cli.should_show_progress() && !std::io::stderr().is_terminal() {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let processor = FileProcessor::new(cli)?;
    processor.process().map(|_| ())
}
