//! Classification metrics for model evaluation
//!
//! Provides:
//! - Label universe and confusion matrix construction
//! - Per-class recall, precision, specificity and F1
//! - One-vs-rest ROC curves with macro-averaged AUC
//! - Text reports

mod confusion;
mod evaluation;
mod labels;
mod metrics;
mod report;
mod roc;

#[cfg(test)]
mod tests;

// Re-export all public types and functions
pub use confusion::{confusion_matrix, ConfusionMatrix};
pub use evaluation::Evaluation;
pub use labels::{Label, LabelOrder, LabelUniverse};
pub use metrics::{
    round_to, BinaryConfusion, ClassMetrics, MetricDeriver, MetricReport, MetricSet, PerClass,
    DEFAULT_DECIMAL, MAX_ROUNDING_DECIMAL,
};
pub use report::{classification_report, matrix_report, metrics_report, roc_report};
pub use roc::{
    binarize, interp, macro_average, roc_curve, trapezoid, ClassRoc, MacroRoc, RocAnalysis,
    RocCurve,
};
