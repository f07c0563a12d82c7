//! # confmat
//!
//! Confusion-matrix metrics for classifier output: per-class recall,
//! precision, specificity and F1, overall accuracy, and one-vs-rest ROC
//! curves with a macro-averaged AUC.
//!
//! Labels are generic. Any `Ord + Hash + Clone` type works, and the label
//! universe (the distinct union of true and predicted labels) fixes the
//! row/column order of every result.
//!
//! ## Example
//!
//! ```
//! use confmat::eval::Evaluation;
//!
//! let y_true = vec!["2", "0", "0", "1", "2", "0"];
//! let y_pred = vec!["2", "0", "0", "1", "2", "1"];
//! let eval = Evaluation::new(y_true, y_pred)?;
//!
//! assert_eq!(eval.accuracy()?, 0.8333);
//! assert_eq!(eval.recall().get(&"1"), Some(1.0));
//!
//! let roc = eval.roc()?;
//! assert!(roc.macro_roc.auc > 0.9);
//! # Ok::<(), confmat::EvalError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;
pub mod render;

pub use error::{EvalError, Result};
pub use eval::{
    classification_report, confusion_matrix, ConfusionMatrix, Evaluation, Label, LabelOrder,
    LabelUniverse, MetricDeriver, RocAnalysis,
};
