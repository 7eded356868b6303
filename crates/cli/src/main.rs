#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod errors;
mod logging;
mod render;

use crate::cli::{Cli, parse};
use crate::commands::CommandExecutor;
use crate::errors::{CliResult, EXIT_OK, exit_code_for};
use crate::logging::{TracingConfig, init_tracing};
use crate::render::OutputFormat;
use tracing::instrument;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {panic_info}");
        eprintln!("Internal error occurred. Run with RUST_LOG=debug for more information.");
    }));

    let cli = parse();
    let code = match run(cli) {
        Ok(()) => EXIT_OK,
        Err(error) => {
            let code = exit_code_for(&error);
            eprintln!("{:?}", miette::Report::new(error));
            code
        }
    };
    std::process::exit(code);
}

#[instrument(name = "taskpath_main", skip(cli))]
fn run(cli: Cli) -> CliResult<()> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    init_tracing(TracingConfig {
        format: cli.tracing_format(),
        level: cli.level.into(),
        ..Default::default()
    })?;

    let output = CommandExecutor::new(format).execute(cli.command.into())?;
    println!("{output}");
    Ok(())
}
