//! Loading evaluation configs from YAML or JSON files

use super::schema::EvalConfig;
use super::validate::validate_config;
use crate::error::{EvalError, Result};
use std::fs;
use std::path::Path;

/// Load and validate an evaluation config
///
/// The format follows the file extension: `.yaml`/`.yml` or `.json`.
///
/// # Example
///
/// ```no_run
/// use confmat::config::load_config;
///
/// let config = load_config("eval.yaml")?;
/// println!("decimal = {}", config.decimal);
/// # Ok::<(), confmat::EvalError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<EvalConfig> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| EvalError::config(format!("Config file has no extension: {}", path.display())))?;

    let content = fs::read_to_string(path)
        .map_err(|e| EvalError::io(format!("Failed to read config file {}", path.display()), e))?;

    let config: EvalConfig = match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| EvalError::config(format!("Failed to parse YAML config: {e}")))?,
        "json" => serde_json::from_str(&content)
            .map_err(|e| EvalError::config(format!("Failed to parse JSON config: {e}")))?,
        other => {
            return Err(EvalError::config(format!(
                "Unsupported config extension: {other} (expected yaml, yml or json)"
            )))
        }
    };

    validate_config(&config)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
