//! CLI command implementations

mod input;
mod matrix;
mod report;
mod roc;


use crate::cli::logging::init_tracing;
use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);
    init_tracing(log_level);

    match cli.command {
        Command::Report(args) => report::run_report(args, log_level),
        Command::Matrix(args) => matrix::run_matrix(args, log_level),
        Command::Roc(args) => roc::run_roc(args, log_level),
    }
}
