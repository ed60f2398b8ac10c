#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use std::{env, process::ExitCode};
use void_cli::{VoidCli, commands, config::Config, setup_logging};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Initialize configuration from the environment
    let config = Config::from_env()?;

    setup_logging(config.debug)?;

    let mut cli = VoidCli::from_config(&config);
    commands::register_all(&mut cli)?;

    // Skip the program name; the first remaining argument selects the command
    cli.run(env::args().skip(1))?;
    Ok(())
}
