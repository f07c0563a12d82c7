//! Classification report functions

use super::confusion::ConfusionMatrix;
use super::evaluation::Evaluation;
use super::metrics::MetricReport;
use super::roc::RocAnalysis;
use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Render the raw count matrix
pub fn matrix_report<L: Display>(cm: &ConfusionMatrix<L>) -> String {
    cm.to_string()
}

/// Render per-class recall/precision/specificity/F1 and global accuracy
pub fn metrics_report<L: Display>(report: &MetricReport<L>) -> String {
    let decimal = report.decimal as usize;
    let label_width = report
        .classes
        .iter()
        .map(|c| c.label.to_string().len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "{:>label_width$} {:>12} {:>12} {:>12} {:>12} {:>8}\n",
        "class", "recall", "precision", "specificity", "f1-score", "support"
    ));
    out.push_str(&"-".repeat(label_width + 4 * 13 + 9));
    out.push('\n');

    // Per-class metrics
    for class in &report.classes {
        let m = &class.metrics;
        out.push_str(&format!(
            "{:>label_width$} {:>12.decimal$} {:>12.decimal$} {:>12.decimal$} {:>12.decimal$} {:>8}\n",
            class.label.to_string(),
            m.recall,
            m.precision,
            m.specificity,
            m.f1,
            class.support
        ));
    }

    out.push_str(&"-".repeat(label_width + 4 * 13 + 9));
    out.push('\n');
    out.push_str(&format!("Accuracy: {:.decimal$}\n", report.accuracy));

    out
}

/// Render per-class and macro-average AUC
pub fn roc_report<L: Display>(analysis: &RocAnalysis<L>, decimal: u32) -> String {
    let decimal = decimal as usize;
    let mut out = String::new();

    for class in &analysis.curves {
        out.push_str(&format!(
            "ROC curve of class {} (area = {:.decimal$})\n",
            class.label, class.curve.auc
        ));
    }
    out.push_str(&format!(
        "macro-average ROC curve (area = {:.decimal$})\n",
        analysis.macro_roc.auc
    ));

    out
}

/// Generate the full text report for a pair of label sequences
///
/// # Example
/// ```
/// use confmat::eval::classification_report;
///
/// let y_true = vec!["cat", "dog", "cat", "dog"];
/// let y_pred = vec!["cat", "dog", "dog", "dog"];
/// let report = classification_report(y_true, y_pred).unwrap();
/// assert!(report.contains("Accuracy: 0.7500"));
/// ```
pub fn classification_report<L>(y_true: Vec<L>, y_pred: Vec<L>) -> Result<String>
where
    L: Ord + Hash + Clone + Display,
{
    let eval = Evaluation::new(y_true, y_pred)?;
    let report = eval.report()?;

    let mut out = matrix_report(eval.matrix());
    out.push('\n');
    out.push_str(&metrics_report(&report));
    Ok(out)
}
