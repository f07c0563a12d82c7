//! Core CLI types - Cli, Command, and argument structs

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::EvalConfig;
use crate::eval::classification::LabelOrder;

/// confmat: confusion-matrix metrics and ROC analysis for classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "confmat")]
#[command(version)]
#[command(
    about = "Confusion matrix, per-class recall/precision/specificity/F1 and macro-averaged ROC/AUC"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the confusion matrix, per-class metrics and accuracy
    Report(ReportArgs),

    /// Print the confusion matrix
    Matrix(MatrixArgs),

    /// Print per-class and macro-averaged ROC AUC
    Roc(RocArgs),
}

/// Input selection shared by every command
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct InputArgs {
    /// Two-row label file: predicted labels first, true labels second
    #[arg(value_name = "INPUT", required_unless_present = "demo")]
    pub input: Option<PathBuf>,

    /// Run on the built-in six-sample example instead of a file
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// YAML or JSON evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override rounding precision
    #[arg(short, long)]
    pub decimal: Option<u32>,

    /// Override label order (sorted, first-seen)
    #[arg(long)]
    pub order: Option<LabelOrder>,

    /// Override the field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the matrix command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the heatmap grid as CSV to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the roc command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RocArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also write every curve as CSV rows (curve,fpr,tpr) to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to an EvalConfig
pub fn apply_overrides(config: &mut EvalConfig, args: &InputArgs) {
    if let Some(decimal) = args.decimal {
        config.decimal = decimal;
    }
    if let Some(order) = args.order {
        config.label_order = order;
    }
    if let Some(delimiter) = args.delimiter {
        config.csv.delimiter = delimiter;
    }
}
