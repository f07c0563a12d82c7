//! Output renderers for the confusion-matrix heatmap and ROC curves
//!
//! The evaluation core never draws anything. Callers pick a [`Renderer`]
//! and hand it the computed results through [`plot_confusion_matrix`] and
//! [`plot_roc`].

mod delimited;
mod text;


pub use delimited::CsvRenderer;
pub use text::TextRenderer;

use crate::error::Result;
use crate::eval::classification::{ConfusionMatrix, MacroRoc, RocAnalysis, RocCurve};
use std::fmt::Display;

/// Rendering sink for evaluation results
pub trait Renderer {
    /// Draw the count grid, rows are true labels and columns predicted labels
    fn render_confusion_matrix(&mut self, labels: &[String], matrix: &[Vec<usize>]) -> Result<()>;

    /// Draw one curve per class plus the macro-average
    fn render_roc(&mut self, curves: &[(String, &RocCurve)], macro_roc: &MacroRoc) -> Result<()>;
}

/// Send a confusion matrix to a renderer
pub fn plot_confusion_matrix<L, R>(cm: &ConfusionMatrix<L>, renderer: &mut R) -> Result<()>
where
    L: Display,
    R: Renderer + ?Sized,
{
    let labels: Vec<String> = cm.labels().iter().map(ToString::to_string).collect();
    renderer.render_confusion_matrix(&labels, cm.matrix())
}

/// Send every ROC curve of an analysis to a renderer
pub fn plot_roc<L, R>(analysis: &RocAnalysis<L>, renderer: &mut R) -> Result<()>
where
    L: Display,
    R: Renderer + ?Sized,
{
    let curves: Vec<(String, &RocCurve)> = analysis
        .curves
        .iter()
        .map(|class| (class.label.to_string(), &class.curve))
        .collect();
    renderer.render_roc(&curves, &analysis.macro_roc)
}
