//! ROC command implementation

use super::input::{create_output, describe, load_evaluation, to_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::RocArgs;
use crate::config::OutputFormat;
use crate::error;
use crate::eval::classification::{roc_report, Label, RocAnalysis};
use crate::render::{plot_roc, CsvRenderer, TextRenderer};
use std::path::Path;

pub fn run_roc(args: RocArgs, level: LogLevel) -> Result<(), String> {
    let (eval, config) = load_evaluation(&args.input, level).map_err(describe)?;
    let roc = eval.roc().map_err(describe)?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "ROC Analysis (one-vs-rest, hard labels):");
            print!("{}", roc_report(&roc, config.decimal));
            if level == LogLevel::Verbose {
                println!();
                let mut renderer =
                    TextRenderer::new(std::io::stdout().lock()).with_precision(config.decimal as usize);
                plot_roc(&roc, &mut renderer).map_err(describe)?;
            }
        }
        OutputFormat::Json => {
            let json = to_json(&roc).map_err(describe)?;
            println!("{json}");
        }
    }

    if let Some(path) = &args.output {
        write_curves_csv(&roc, path).map_err(describe)?;
        log(level, LogLevel::Normal, &format!("ROC curves written to {}", path.display()));
    }

    Ok(())
}

fn write_curves_csv(roc: &RocAnalysis<Label>, path: &Path) -> error::Result<()> {
    let mut renderer = CsvRenderer::new(create_output(path)?);
    plot_roc(roc, &mut renderer)?;
    renderer.into_inner()?;
    Ok(())
}
