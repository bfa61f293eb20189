//! filecount — count the files under each subdirectory of a directory.
//!
//! Thin binary entry point. All logic lives in the `filecount-core`
//! and `filecount-cli` crates.

use clap::{CommandFactory, Parser};
use filecount_cli::{AppConfig, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialise structured logging. Diagnostics share stdout with the
    // listing and stay silent unless --verbose is given.
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();

    let Some(config) = AppConfig::from_args(&args) else {
        let _ = Args::command().print_help();
        return ExitCode::FAILURE;
    };

    // Not locked for the whole run: worker threads log to stdout as well.
    match filecount_cli::run(&config, &mut std::io::stdout()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
