//! Evaluation of one pair of label sequences

use super::confusion::ConfusionMatrix;
use super::labels::{LabelOrder, LabelUniverse};
use super::metrics::{MetricDeriver, MetricReport, PerClass, DEFAULT_DECIMAL};
use super::roc::RocAnalysis;
use crate::error::Result;
use std::hash::Hash;

/// Owns a pair of label sequences and their confusion matrix
///
/// Every metric is derived fresh on each call; nothing is cached or mutated
/// after construction.
///
/// # Example
/// ```
/// use confmat::eval::Evaluation;
///
/// let y_true = vec!["2", "0", "0", "1", "2", "0"];
/// let y_pred = vec!["2", "0", "0", "1", "2", "1"];
/// let eval = Evaluation::new(y_true, y_pred).unwrap();
///
/// assert_eq!(eval.labels(), &["0", "1", "2"]);
/// assert_eq!(eval.accuracy().unwrap(), 0.8333);
/// ```
#[derive(Clone, Debug)]
pub struct Evaluation<L> {
    y_true: Vec<L>,
    y_pred: Vec<L>,
    matrix: ConfusionMatrix<L>,
    decimal: u32,
}

impl<L: Ord + Hash + Clone> Evaluation<L> {
    /// Evaluate with labels sorted ascending
    pub fn new(y_true: Vec<L>, y_pred: Vec<L>) -> Result<Self> {
        Self::with_order(y_true, y_pred, LabelOrder::Sorted)
    }

    /// Evaluate with an explicit label order
    pub fn with_order(y_true: Vec<L>, y_pred: Vec<L>, order: LabelOrder) -> Result<Self> {
        let matrix = ConfusionMatrix::from_predictions_with_order(&y_true, &y_pred, order)?;
        Ok(Self { y_true, y_pred, matrix, decimal: DEFAULT_DECIMAL })
    }
}

impl<L: Eq + Hash + Clone> Evaluation<L> {
    /// Evaluate over a prepared label universe
    pub fn with_universe(y_true: Vec<L>, y_pred: Vec<L>, universe: LabelUniverse<L>) -> Result<Self> {
        let matrix = ConfusionMatrix::with_universe(universe, &y_true, &y_pred)?;
        Ok(Self { y_true, y_pred, matrix, decimal: DEFAULT_DECIMAL })
    }

    /// Set the number of decimal places in reported metrics
    pub fn with_decimal(mut self, decimal: u32) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn y_true(&self) -> &[L] {
        &self.y_true
    }

    pub fn y_pred(&self) -> &[L] {
        &self.y_pred
    }

    pub fn labels(&self) -> &[L] {
        self.matrix.labels()
    }

    pub fn decimal(&self) -> u32 {
        self.decimal
    }

    pub fn matrix(&self) -> &ConfusionMatrix<L> {
        &self.matrix
    }

    /// Metric deriver over the matrix at this evaluation's precision
    pub fn deriver(&self) -> MetricDeriver<'_, L> {
        MetricDeriver::new(&self.matrix).with_decimal(self.decimal)
    }

    pub fn accuracy(&self) -> Result<f64> {
        self.deriver().accuracy()
    }

    pub fn recall(&self) -> PerClass<L> {
        self.deriver().recall_by_label()
    }

    pub fn precision(&self) -> PerClass<L> {
        self.deriver().precision_by_label()
    }

    pub fn specificity(&self) -> Result<PerClass<L>> {
        self.deriver().specificity_by_label()
    }

    pub fn f1(&self) -> PerClass<L> {
        self.deriver().f1_by_label()
    }

    /// Accuracy plus per-class recall/precision/specificity/F1
    pub fn report(&self) -> Result<MetricReport<L>> {
        self.deriver().report()
    }

    /// One-vs-rest ROC curves and their macro-average
    pub fn roc(&self) -> Result<RocAnalysis<L>> {
        RocAnalysis::compute(&self.y_true, &self.y_pred, self.matrix.universe())
    }
}
