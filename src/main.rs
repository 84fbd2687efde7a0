use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use ksmin::cli::Cli;

mod commands;

const LOG_ENV: &str = "KSMIN_LOG";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "ksmin", &mut io::stdout());
        return Ok(());
    }

    commands::minify::handle(&cli)
}
