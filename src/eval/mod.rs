//! Classification evaluation
//!
//! - `classification`: label universe, confusion matrix, per-class metrics,
//!   ROC/AUC and text reports
//!
//! ## Example
//!
//! ```
//! use confmat::eval::{Evaluation, MetricReport};
//!
//! let y_true = vec![2, 0, 0, 1, 2, 0];
//! let y_pred = vec![2, 0, 0, 1, 2, 1];
//! let eval = Evaluation::new(y_true, y_pred).unwrap();
//!
//! let report: MetricReport<i32> = eval.report().unwrap();
//! println!("Accuracy: {}", report.accuracy);
//!
//! let roc = eval.roc().unwrap();
//! println!("Macro AUC: {:.2}", roc.macro_roc.auc);
//! ```

pub mod classification;

// Re-export main types
pub use classification::{
    classification_report, confusion_matrix, BinaryConfusion, ClassMetrics, ClassRoc,
    ConfusionMatrix, Evaluation, Label, LabelOrder, LabelUniverse, MacroRoc, MetricDeriver,
    MetricReport, MetricSet, PerClass, RocAnalysis, RocCurve,
};
