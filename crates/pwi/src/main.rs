use std::process::ExitCode;

use anstream::eprintln;
use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::instrument;

use pwi_cli::Cli;

use crate::commands::ExitStatus;
use crate::printer::Printer;

mod commands;
mod logging;
mod printer;

#[instrument(skip_all)] // Anchor span for the whole invocation
async fn run(cli: Cli) -> Result<ExitStatus> {
    // Configure the `tracing` crate, which controls internal logging.
    logging::setup_logging(logging::Level::from(cli.global.verbose))?;

    // Configure the `Printer`, which controls user-facing output in the CLI.
    let printer = Printer::new(cli.global.quiet);

    commands::install(cli.install, cli.index, printer).await
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    anstream::ColorChoice::write_global(cli.global.color.into());

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build the async runtime")
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            for cause in err.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".red().bold(), cause);
            }
            ExitStatus::Error.into()
        }
    }
}
