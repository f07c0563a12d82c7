//! Report command implementation

use super::input::{describe, load_evaluation, to_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::ReportArgs;
use crate::config::OutputFormat;
use crate::eval::classification::{matrix_report, metrics_report};

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<(), String> {
    let (eval, _config) = load_evaluation(&args.input, level).map_err(describe)?;
    let report = eval.report().map_err(describe)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Classification Report:");
            println!();
            println!("{}", matrix_report(eval.matrix()));
            print!("{}", metrics_report(&report));
        }
        OutputFormat::Json => {
            let json = to_json(&report).map_err(describe)?;
            println!("{json}");
        }
    }

    Ok(())
}
