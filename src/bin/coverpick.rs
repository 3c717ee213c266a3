//! Coverpick CLI Binary

use anyhow::Context;
use clap::Parser;
use coverpick::logging::init_logging;
use coverpick::tooling::cli::{Cli, CliContext};
use std::process::ExitCode;

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .with_context(|| format!("initializing workspace {}", cli.workspace.display()))?;

    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("initializing logging")?;

    Ok(context.execute(&cli.command)?)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
