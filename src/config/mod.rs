//! Declarative evaluation configuration
//!
//! An [`EvalConfig`] is read from YAML or JSON, validated, and then
//! overridden field by field from command-line flags.

pub mod cli;
mod loader;
mod schema;
mod validate;


pub use cli::{apply_overrides, parse_args, Cli, Command, InputArgs, OutputFormat};
pub use loader::load_config;
pub use schema::{CsvConfig, EvalConfig};
pub use validate::{validate_config, MAX_DECIMAL};
