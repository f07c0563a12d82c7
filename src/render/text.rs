//! Terminal rendering

use super::Renderer;
use crate::error::{EvalError, Result};
use crate::eval::classification::{MacroRoc, RocCurve};
use std::io::Write;

/// Shades from empty to the largest count in the grid
const SHADES: [char; 5] = [' ', '░', '▒', '▓', '█'];

/// Draws an aligned heatmap and ROC point tables as plain text
pub struct TextRenderer<W: Write> {
    out: W,
    precision: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, precision: 4 }
    }

    /// Digits printed for rates
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| EvalError::io("Failed to write rendered output", e))
    }
}

fn shade(count: usize, max: usize) -> char {
    if max == 0 || count == 0 {
        return SHADES[0];
    }
    let steps = SHADES.len() - 1;
    // Any non-zero count gets at least the lightest shade.
    let level = (count * steps).div_ceil(max).clamp(1, steps);
    SHADES[level]
}

fn points(out: &mut String, name: &str, fpr: &[f64], tpr: &[f64], precision: usize) {
    out.push_str(&format!("{name}\n"));
    for (x, y) in fpr.iter().zip(tpr) {
        out.push_str(&format!("  {x:>w$.precision$}  {y:>w$.precision$}\n", w = precision + 3));
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_confusion_matrix(&mut self, labels: &[String], matrix: &[Vec<usize>]) -> Result<()> {
        let max = matrix.iter().flatten().copied().max().unwrap_or(0);
        let count_width = max.to_string().len();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0).max(4);
        let cell_width = (count_width + 2).max(label_width);

        let mut out = String::new();
        out.push_str(&format!("{:>label_width$} |", "true"));
        for label in labels {
            out.push_str(&format!(" {label:>cell_width$}"));
        }
        out.push('\n');
        out.push_str(&"-".repeat(label_width + 2 + labels.len() * (cell_width + 1)));
        out.push('\n');

        for (label, row) in labels.iter().zip(matrix) {
            out.push_str(&format!("{label:>label_width$} |"));
            for &count in row {
                let cell = format!("{}{count:>count_width$}", shade(count, max));
                out.push_str(&format!(" {cell:>cell_width$}"));
            }
            out.push('\n');
        }

        self.emit(&out)
    }

    fn render_roc(&mut self, curves: &[(String, &RocCurve)], macro_roc: &MacroRoc) -> Result<()> {
        let precision = self.precision;
        let mut out = String::new();

        for (label, curve) in curves {
            let name = format!("class {label} (area = {:.precision$})", curve.auc);
            points(&mut out, &name, &curve.fpr, &curve.tpr, precision);
        }
        let name = format!("macro-average (area = {:.precision$})", macro_roc.auc);
        points(&mut out, &name, &macro_roc.fpr, &macro_roc.tpr, precision);

        self.emit(&out)
    }
}
