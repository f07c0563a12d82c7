//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! confmat report labels.csv
//! confmat report --demo --decimal 2
//! confmat matrix labels.csv --order first-seen --output heatmap.csv
//! confmat roc labels.csv --format json
//! ```

mod core;
mod types;


pub use core::{apply_overrides, parse_args, Cli, Command, InputArgs, MatrixArgs, ReportArgs, RocArgs};
pub use types::OutputFormat;
