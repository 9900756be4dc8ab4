//! To-do list - Main Entry Point
//!
//! Parses arguments, sets up logging and hands the terminal to the menu loop.
//! The actual implementation is in the `todolist` library.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use todolist::{DEFAULT_FILE, Shell, TaskStore};
use tracing_subscriber::EnvFilter;

/// Interactive to-do list stored in a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task file
    #[arg(default_value = DEFAULT_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr and stay off unless asked for, so they never mix into the menu
    if std::env::var_os("TODOLIST_DEBUG").is_some() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todolist=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }

    let args = Args::parse();
    let store = TaskStore::open(&args.file);
    let mut shell = Shell::new(store, io::stdin().lock(), io::stdout().lock());
    shell.run()?;
    Ok(())
}
