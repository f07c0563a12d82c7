//! Label file loading
//!
//! The file holds two header-less records: predicted labels on the first
//! line, true labels on the second. Exporters commonly leave a trailing
//! delimiter, so the last field of each record is dropped unless the config
//! says otherwise.

use crate::config::CsvConfig;
use crate::error::{EvalError, Result};
use crate::eval::classification::Label;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Predicted and true labels read from one file
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPair {
    pub y_pred: Vec<Label>,
    pub y_true: Vec<Label>,
}

/// Load a two-row label file
///
/// # Example
///
/// ```no_run
/// use confmat::config::CsvConfig;
/// use confmat::io::load_csv;
///
/// let pair = load_csv("labels.csv", &CsvConfig::default())?;
/// println!("{} samples", pair.y_true.len());
/// # Ok::<(), confmat::EvalError>(())
/// ```
pub fn load_csv(path: impl AsRef<Path>, config: &CsvConfig) -> Result<LabelPair> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| EvalError::io(format!("Failed to open label file {}", path.display()), e))?;

    let pair = read_csv(file, config)?;
    tracing::debug!(
        path = %path.display(),
        samples = pair.y_true.len(),
        "loaded label file"
    );
    Ok(pair)
}

/// Read a two-row label file from any reader
pub fn read_csv<R: Read>(reader: R, config: &CsvConfig) -> Result<LabelPair> {
    let delimiter = u8::try_from(config.delimiter)
        .map_err(|_| EvalError::config(format!("delimiter {:?} is not ASCII", config.delimiter)))?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<Label>> = Vec::with_capacity(2);
    for result in rdr.records() {
        let record = result?;
        let mut fields: Vec<&str> = record.iter().collect();
        if config.drop_last_column {
            fields.pop();
        }
        rows.push(fields.into_iter().map(Label::parse).collect());
        if rows.len() == 2 {
            break;
        }
    }

    let mut rows = rows.into_iter();
    let (y_pred, y_true) = match (rows.next(), rows.next()) {
        (Some(y_pred), Some(y_true)) => (y_pred, y_true),
        _ => {
            return Err(EvalError::invalid_input(
                "label file needs two records: predicted labels, then true labels",
            ))
        }
    };

    if y_true.is_empty() {
        return Err(EvalError::invalid_input("label file records contain no labels"));
    }

    Ok(LabelPair { y_pred, y_true })
}
