//! Versioner CLI entry point

use clap::{CommandFactory, Parser};
use std::process;
use versioner::VersionerError;
use versioner::cli::common::{self, EXIT_ERROR, EXIT_SUCCESS};
use versioner::cli::{Cli, Settings};

fn main() {
    let cli = Cli::parse();
    versioner::logging::init(cli.verbose);

    let Some(operation) = cli.operation() else {
        let exit_code = match Cli::command().print_help() {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_ERROR,
        };
        process::exit(exit_code);
    };

    let settings = match Settings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => process::exit(common::report_error(&VersionerError::Config(e))),
    };

    process::exit(versioner::cli::dispatch(&operation, &settings));
}
