//! CSV output for plotting tools

use super::Renderer;
use crate::error::{EvalError, Result};
use crate::eval::classification::{MacroRoc, RocCurve};
use std::io::Write;

/// Label used for the macro-average rows
const MACRO_CURVE: &str = "macro";

/// Writes results as CSV records
///
/// The heatmap is written as a header of predicted labels followed by one
/// row per true label. ROC curves become `curve,fpr,tpr` rows.
pub struct CsvRenderer<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(inner: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(inner);
        Self { writer }
    }

    fn write_points(&mut self, curve: &str, fpr: &[f64], tpr: &[f64]) -> Result<()> {
        for (x, y) in fpr.iter().zip(tpr) {
            let (x, y) = (x.to_string(), y.to_string());
            self.writer.write_record([curve, x.as_str(), y.as_str()])?;
        }
        Ok(())
    }

    /// Flush buffered records and return the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| EvalError::io("Failed to flush CSV output", e.into_error()))
    }
}

impl<W: Write> Renderer for CsvRenderer<W> {
    fn render_confusion_matrix(&mut self, labels: &[String], matrix: &[Vec<usize>]) -> Result<()> {
        let mut header = Vec::with_capacity(labels.len() + 1);
        header.push("true\\pred".to_string());
        header.extend(labels.iter().cloned());
        self.writer.write_record(&header)?;

        for (label, row) in labels.iter().zip(matrix) {
            let mut record = Vec::with_capacity(row.len() + 1);
            record.push(label.clone());
            record.extend(row.iter().map(ToString::to_string));
            self.writer.write_record(&record)?;
        }

        self.writer
            .flush()
            .map_err(|e| EvalError::io("Failed to flush CSV output", e))
    }

    fn render_roc(&mut self, curves: &[(String, &RocCurve)], macro_roc: &MacroRoc) -> Result<()> {
        self.writer.write_record(["curve", "fpr", "tpr"])?;

        for (label, curve) in curves {
            self.write_points(label, &curve.fpr, &curve.tpr)?;
        }
        self.write_points(MACRO_CURVE, &macro_roc.fpr, &macro_roc.tpr)?;

        self.writer
            .flush()
            .map_err(|e| EvalError::io("Failed to flush CSV output", e))
    }
}
