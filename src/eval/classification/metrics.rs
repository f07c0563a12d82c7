//! Per-class metric derivation from a confusion matrix
//!
//! Recall and precision report exactly 0 whenever a class has no true
//! positives, while specificity divides unguarded and fails on a class with
//! no negative samples.

use super::confusion::ConfusionMatrix;
use crate::error::{EvalError, Result};
use serde::Serialize;
use std::fmt;

/// Default number of decimal places in reported metrics
pub const DEFAULT_DECIMAL: u32 = 4;

/// Finest precision at which rounding still changes an `f64`
pub const MAX_ROUNDING_DECIMAL: u32 = 15;

/// Round half away from zero to `decimal` places
///
/// Precisions past [`MAX_ROUNDING_DECIMAL`] return `value` unchanged, as
/// does any value whose scaled form overflows.
pub fn round_to(value: f64, decimal: u32) -> f64 {
    if decimal > MAX_ROUNDING_DECIMAL {
        return value;
    }
    let factor = 10f64.powi(decimal as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// One-vs-rest 2×2 decomposition of the matrix for a single class
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BinaryConfusion {
    /// True label is the class, predicted as the class
    pub tp: usize,
    /// True label is the class, predicted as another class
    #[serde(rename = "fn")]
    pub fn_: usize,
    /// True label is another class, predicted as the class
    pub fp: usize,
    /// Neither true nor predicted label is the class
    pub tn: usize,
}

impl BinaryConfusion {
    /// Decompose class `class` of `cm`
    pub fn from_matrix<L>(cm: &ConfusionMatrix<L>, class: usize) -> Self {
        let tp = cm.true_positives(class);
        let fn_ = cm.row_sum(class) - tp;
        let fp = cm.col_sum(class) - tp;
        let tn = cm.total() - tp - fn_ - fp;
        Self { tp, fn_, fp, tn }
    }

    /// TP + FN + FP + TN
    pub fn total(&self) -> usize {
        self.tp + self.fn_ + self.fp + self.tn
    }

    /// TP / (TP + FN), exactly 0 when TP == 0
    pub fn recall(&self) -> f64 {
        if self.tp == 0 {
            return 0.0;
        }
        self.tp as f64 / (self.tp + self.fn_) as f64
    }

    /// TP / (TP + FP), exactly 0 when TP == 0
    pub fn precision(&self) -> f64 {
        if self.tp == 0 {
            return 0.0;
        }
        self.tp as f64 / (self.tp + self.fp) as f64
    }

    /// TN / (TN + FP); fails when the class has no negative samples
    pub fn specificity(&self) -> Result<f64> {
        let negatives = self.tn + self.fp;
        if negatives == 0 {
            return Err(EvalError::degenerate(
                "specificity divides by zero: TN + FP == 0 (every sample belongs to this class)",
            ));
        }
        Ok(self.tn as f64 / negatives as f64)
    }

    /// Harmonic mean of precision and recall, 0 if either is 0
    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p == 0.0 || r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

/// Rounded per-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MetricSet {
    pub recall: f64,
    pub precision: f64,
    pub specificity: f64,
    pub f1: f64,
}

/// Values keyed by label, kept in canonical label order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PerClass<L> {
    entries: Vec<(L, f64)>,
}

impl<L: PartialEq> PerClass<L> {
    /// Value reported for `label`
    pub fn get(&self, label: &L) -> Option<f64> {
        self.entries.iter().find(|(l, _)| l == label).map(|&(_, v)| v)
    }
}

impl<L> PerClass<L> {
    /// Iterate `(label, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&L, f64)> {
        self.entries.iter().map(|(l, v)| (l, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(L, f64)> {
        self.entries
    }
}

/// Metrics of one class in the aggregate report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassMetrics<L> {
    pub label: L,
    /// Number of samples whose true label is this class
    pub support: usize,
    pub confusion: BinaryConfusion,
    pub metrics: MetricSet,
}

/// Global accuracy plus per-class metrics in canonical label order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricReport<L> {
    pub accuracy: f64,
    pub decimal: u32,
    pub classes: Vec<ClassMetrics<L>>,
}

/// Derives accuracy and per-class metrics from a confusion matrix
///
/// Values are rounded to `decimal` places when returned; the underlying
/// arithmetic always runs on exact counts.
#[derive(Clone, Copy, Debug)]
pub struct MetricDeriver<'a, L> {
    matrix: &'a ConfusionMatrix<L>,
    decimal: u32,
}

impl<'a, L> MetricDeriver<'a, L> {
    /// Create a deriver with the default precision of 4 decimal places
    pub fn new(matrix: &'a ConfusionMatrix<L>) -> Self {
        Self { matrix, decimal: DEFAULT_DECIMAL }
    }

    /// Override the reporting precision
    pub fn with_decimal(mut self, decimal: u32) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn decimal(&self) -> u32 {
        self.decimal
    }

    pub fn matrix(&self) -> &'a ConfusionMatrix<L> {
        self.matrix
    }

    fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimal)
    }

    /// Diagonal sum over total, rounded
    pub fn accuracy(&self) -> Result<f64> {
        self.matrix.accuracy().map(|acc| self.round(acc))
    }

    /// One-vs-rest counts for class index `class`
    pub fn binary_confusion(&self, class: usize) -> Result<BinaryConfusion> {
        let n_classes = self.matrix.n_classes();
        if class >= n_classes {
            return Err(EvalError::invalid_input(format!(
                "class index {class} out of range for {n_classes} classes"
            )));
        }
        Ok(BinaryConfusion::from_matrix(self.matrix, class))
    }

    pub fn recall(&self, class: usize) -> Result<f64> {
        Ok(self.round(self.binary_confusion(class)?.recall()))
    }

    pub fn precision(&self, class: usize) -> Result<f64> {
        Ok(self.round(self.binary_confusion(class)?.precision()))
    }

    pub fn specificity(&self, class: usize) -> Result<f64> {
        self.binary_confusion(class)?.specificity().map(|s| self.round(s))
    }

    pub fn f1(&self, class: usize) -> Result<f64> {
        Ok(self.round(self.binary_confusion(class)?.f1()))
    }

    /// All four rounded metrics of a class
    pub fn metric_set(&self, class: usize) -> Result<MetricSet> {
        let bc = self.binary_confusion(class)?;
        self.metric_set_of(&bc)
    }

    fn metric_set_of(&self, bc: &BinaryConfusion) -> Result<MetricSet> {
        Ok(MetricSet {
            recall: self.round(bc.recall()),
            precision: self.round(bc.precision()),
            specificity: self.round(bc.specificity()?),
            f1: self.round(bc.f1()),
        })
    }
}

impl<L: Clone> MetricDeriver<'_, L> {
    fn per_class(&self, metric: impl Fn(&BinaryConfusion) -> f64) -> PerClass<L> {
        let entries = self
            .matrix
            .labels()
            .iter()
            .enumerate()
            .map(|(class, label)| {
                let bc = BinaryConfusion::from_matrix(self.matrix, class);
                (label.clone(), self.round(metric(&bc)))
            })
            .collect();
        PerClass { entries }
    }

    /// Rounded recall of every class
    pub fn recall_by_label(&self) -> PerClass<L> {
        self.per_class(BinaryConfusion::recall)
    }

    /// Rounded precision of every class
    pub fn precision_by_label(&self) -> PerClass<L> {
        self.per_class(BinaryConfusion::precision)
    }

    /// Rounded F1 of every class
    pub fn f1_by_label(&self) -> PerClass<L> {
        self.per_class(BinaryConfusion::f1)
    }

    /// Rounded specificity of every class, failing on the first degenerate class
    pub fn specificity_by_label(&self) -> Result<PerClass<L>> {
        let entries = self
            .matrix
            .labels()
            .iter()
            .enumerate()
            .map(|(class, label)| {
                let bc = BinaryConfusion::from_matrix(self.matrix, class);
                bc.specificity().map(|s| (label.clone(), self.round(s)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(PerClass { entries })
    }

    /// Accuracy plus every class's metrics in one pass over the matrix
    pub fn report(&self) -> Result<MetricReport<L>> {
        let accuracy = self.accuracy()?;
        let classes = self
            .matrix
            .labels()
            .iter()
            .enumerate()
            .map(|(class, label)| {
                let confusion = BinaryConfusion::from_matrix(self.matrix, class);
                let metrics = self.metric_set_of(&confusion).map_err(|e| match e {
                    EvalError::DegenerateInput { message } => EvalError::degenerate(format!(
                        "class at index {class}: {message}"
                    )),
                    other => other,
                })?;
                Ok(ClassMetrics {
                    label: label.clone(),
                    support: confusion.tp + confusion.fn_,
                    confusion,
                    metrics,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MetricReport { accuracy, decimal: self.decimal, classes })
    }
}

impl fmt::Display for MetricSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recall={} precision={} specificity={} f1={}",
            self.recall, self.precision, self.specificity, self.f1
        )
    }
}
