// src/main.rs

mod cli;
mod commands;
mod error;
mod models;
mod store;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Silent unless RUST_LOG is set; the session output itself goes to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let labels: Vec<String> = if cli.labels.is_empty() {
        commands::DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.labels
    };

    if let Err(e) = commands::run_session(&labels) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
