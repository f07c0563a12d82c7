//! Shared input handling: config resolution and label loading

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_config, validate_config, EvalConfig, InputArgs};
use crate::error::{EvalError, Result};
use crate::eval::classification::{Evaluation, Label};
use crate::io::{load_csv, LabelPair};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Six-sample example used by `--demo`
const DEMO_Y_TRUE: [&str; 6] = ["2", "0", "0", "1", "2", "0"];
const DEMO_Y_PRED: [&str; 6] = ["2", "0", "0", "1", "2", "1"];

pub(crate) fn demo_pair() -> LabelPair {
    let text = |labels: &[&str]| -> Vec<Label> { labels.iter().map(|l| Label::from(*l)).collect() };
    LabelPair { y_pred: text(&DEMO_Y_PRED), y_true: text(&DEMO_Y_TRUE) }
}

/// Resolve the effective config: file (or defaults), then flag overrides
pub(crate) fn resolve_config(args: &InputArgs) -> Result<EvalConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EvalConfig::default(),
    };
    apply_overrides(&mut config, args);
    validate_config(&config)?;
    Ok(config)
}

/// Build the evaluation for a command
pub(crate) fn load_evaluation(
    args: &InputArgs,
    level: LogLevel,
) -> Result<(Evaluation<Label>, EvalConfig)> {
    let config = resolve_config(args)?;

    let pair = match (&args.input, args.demo) {
        (Some(_), true) => {
            return Err(EvalError::invalid_input("--demo cannot be combined with an input file"))
        }
        (None, true) => demo_pair(),
        (Some(path), false) => load_csv(path, &config.csv)?,
        (None, false) => return Err(EvalError::invalid_input("no input file given")),
    };

    let eval = Evaluation::with_order(pair.y_true, pair.y_pred, config.label_order)?
        .with_decimal(config.decimal);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Loaded {} samples over {} classes (order: {}, decimal: {})",
            eval.y_true().len(),
            eval.labels().len(),
            config.label_order,
            config.decimal
        ),
    );

    Ok((eval, config))
}

pub(crate) fn create_output(path: &Path) -> Result<File> {
    File::create(path)
        .map_err(|e| EvalError::io(format!("Failed to create output file {}", path.display()), e))
}

/// Pretty-printed JSON for `--format json`
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| EvalError::Serialization { message: format!("JSON serialization failed: {e}") })
}

/// Format an error for the command boundary
pub(crate) fn describe(err: EvalError) -> String {
    format!("[{}] {err}", err.code())
}
