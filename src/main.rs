//! confmat CLI
//!
//! Evaluates classifier output stored as a two-row label file.
//!
//! # Usage
//!
//! ```bash
//! # Matrix, per-class metrics and accuracy
//! confmat report labels.csv
//!
//! # Built-in example with two decimals
//! confmat report --demo --decimal 2
//!
//! # Heatmap grid as CSV for plotting
//! confmat matrix labels.csv --output heatmap.csv
//!
//! # Per-class and macro-averaged ROC AUC as JSON
//! confmat roc labels.csv --format json
//! ```

use clap::Parser;
use confmat::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
