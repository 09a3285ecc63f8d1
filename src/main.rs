use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use tally::cli::Cli;
use tally::config::Config;
use tally::logging::init_tracing;
use tally::script::{parse_script, run_script};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path).context("Failed to load configuration")?;

    let log_path = init_tracing(&config.logging, cli.log_file.as_deref());
    tracing::info!(log_file = ?log_path, "tally starting");
    tracing::info!(path = %config_path.display(), "config loaded");

    if let Some(script) = &cli.script {
        let intents = parse_script(script)?;
        let stdout = io::stdout();
        run_script(&intents, &mut stdout.lock()).context("Failed to write turn records")?;
        return Ok(());
    }

    tally::ui::run(&config).context("Terminal UI failed")?;
    tracing::info!("tally stopped");
    Ok(())
}
