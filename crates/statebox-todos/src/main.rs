use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use statebox_config::StoreConfig;
use statebox_todos::{replay, script, view};

mod logger;

/// Replay a script of todo actions through a statebox store
#[derive(Debug, Parser)]
#[command(name = "todo-replay", version)]
struct Args {
    /// JSON file holding an array of tagged actions
    script: PathBuf,

    /// Also write log records to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Store config file (default: .statebox.toml in the current or home directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only print the final state, not every transition
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = logger::init(args.verbose)?;
    log::info!("Starting todo-replay, logging to {}", log_file.display());

    let config = match &args.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::load(),
    };

    let content = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let actions = script::parse_actions(&content)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let quiet = args.quiet;
    let outcome = replay(actions, config, move |state| {
        if !quiet {
            println!("{}", view::render(state));
        }
    })?;

    println!(
        "Replayed {} actions ({} notifications)",
        outcome.applied, outcome.notifications
    );
    print!("{}", view::render(&outcome.state));

    log::info!("Exiting todo-replay");
    Ok(())
}
