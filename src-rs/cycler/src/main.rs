//! Command line front end for Cycler experiment protocols

use std::{
    fs, io,
    path::Path,
    process::ExitCode,
};

use anstream::println;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    command::{CliCommand, Commands},
    protocol::StepDefaults,
};

mod command;
mod dev;
mod print_error;
mod protocol;
mod stylesheet;

/// Environment variable holding the log filter, e.g. `cycler_step=debug`
const LOG_ENV_VAR: &str = "CYCLER_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";
const STDIN_ORIGIN: &str = "<stdin>";

fn main() -> ExitCode {
    let cli = CliCommand::parse();
    init_logging();

    match cli.command {
        Commands::Parse {
            file,
            period,
            temperature,
            tags,
            print_debug,
            no_colors,
        } => {
            if no_colors {
                anstream::ColorChoice::Never.write_global();
            }

            let defaults = StepDefaults {
                period,
                temperature,
                tags,
            };
            run_parse(&file, &defaults, print_debug)
        }
        Commands::Dev { command } => match dev::run(&command) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                print_error::print(&error, false);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_parse(file: &Path, defaults: &StepDefaults, print_debug: bool) -> ExitCode {
    let (source, origin) = match read_protocol(file) {
        Ok(read) => read,
        Err(error) => {
            print_error::print_message(&format!(
                "couldn't read `{}`: {error}",
                file.display()
            ));
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for result in protocol::parse_protocol(&source, &origin, defaults) {
        match result {
            Ok(step) if print_debug => println!("{step:?}"),
            Ok(step) => match serde_json::to_string(&step.to_dict()) {
                Ok(json) => println!("{json}"),
                Err(error) => {
                    print_error::print_message(&format!("couldn't serialize `{step}`: {error}"));
                    failed = true;
                }
            },
            Err(error) => {
                tracing::debug!(
                    category = error.category().as_str(),
                    "instruction rejected"
                );
                print_error::print(&error, print_debug);
                failed = true;
            }
        }
    }

    tracing::debug!(%origin, failed, "protocol parsed");

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Reads the protocol source, returning it with the name used in messages.
fn read_protocol(file: &Path) -> io::Result<(String, String)> {
    if file == Path::new("-") {
        let source = io::read_to_string(io::stdin())?;
        return Ok((source, STDIN_ORIGIN.to_string()));
    }

    let source = fs::read_to_string(file)?;
    Ok((source, file.display().to_string()))
}
