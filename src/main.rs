//! dstatic binary entry point

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dstatic::backend::CrosstermBackend;
use dstatic::cli::Cli;
use dstatic::player::render::{color_list, command_list};
use dstatic::{logging, signals, PaletteRegistry, Settings};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        Cli::print_completions(shell);
        return Ok(());
    }
    if cli.list_commands {
        print!("{}", command_list());
        return Ok(());
    }
    if cli.list_colors {
        print!("{}", color_list());
        return Ok(());
    }

    logging::init()?;
    let settings = Settings::load(cli.config.as_deref())?;
    let config = cli.run_config(&settings)?;
    tracing::debug!(?config, "resolved configuration");

    let interrupt = signals::install()?;
    let registry = PaletteRegistry::builtin();

    let mut backend = CrosstermBackend::enter().context("Failed to initialize terminal")?;
    let result = dstatic::run(&mut backend, config, &registry, &interrupt);
    backend.restore().context("Failed to restore terminal")?;

    let reason = result?;
    tracing::info!(?reason, "exiting");
    Ok(())
}
