//! Dotwalk - graph-algorithm walker
//!
//! A command-line tool that loads a DOT graph, runs a traversal or
//! shortest/longest-path algorithm over it, and emits one diagram per
//! algorithm step plus a result summary.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use dotwalk_core::error::{ExitCode as WalkExitCode, WalkError};
use dotwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` may fail parsing before we can inspect `Cli.format`;
            // if the user requested JSON output, emit a structured envelope.
            if argv_format_json {
                match err.kind() {
                    // Help and version are informational - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => {}
                }
                let walk_error = WalkError::UsageError(err.to_string());
                eprintln!("{}", walk_error.to_json());
                return ExitCode::from(walk_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run::execute(&cli) {
        Ok(()) => ExitCode::from(WalkExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
