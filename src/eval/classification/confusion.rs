//! Confusion matrix for multi-class classification

use super::labels::{LabelOrder, LabelUniverse};
use crate::error::{EvalError, Result};
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] counts the samples whose true label is `labels[i]` and
/// whose predicted label is `labels[j]`.
#[derive(Clone, Debug, Serialize)]
pub struct ConfusionMatrix<L> {
    /// Label universe fixing the row/column order
    labels: LabelUniverse<L>,
    /// The matrix data: matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    /// Number of samples
    total: usize,
}

/// Reject empty or unequal-length label sequences
pub(crate) fn check_pair<A, B>(y_true: &[A], y_pred: &[B]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(EvalError::invalid_input(format!(
            "y_true has {} labels but y_pred has {}",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(EvalError::invalid_input("label sequences are empty"));
    }
    Ok(())
}

impl<L: Ord + Hash + Clone> ConfusionMatrix<L> {
    /// Create from ground truth and predictions, labels sorted ascending
    pub fn from_predictions(y_true: &[L], y_pred: &[L]) -> Result<Self> {
        Self::from_predictions_with_order(y_true, y_pred, LabelOrder::Sorted)
    }

    /// Create from ground truth and predictions with an explicit label order
    pub fn from_predictions_with_order(
        y_true: &[L],
        y_pred: &[L],
        order: LabelOrder,
    ) -> Result<Self> {
        check_pair(y_true, y_pred)?;
        let universe = LabelUniverse::build(y_true, y_pred, order);
        Self::with_universe(universe, y_true, y_pred)
    }
}

impl<L: Eq + Hash + Clone> ConfusionMatrix<L> {
    /// Create from ground truth and predictions over a prepared universe.
    ///
    /// Every label of both sequences must be part of `universe`.
    pub fn with_universe(universe: LabelUniverse<L>, y_true: &[L], y_pred: &[L]) -> Result<Self> {
        check_pair(y_true, y_pred)?;

        let n_classes = universe.len();
        let mut matrix = vec![vec![0; n_classes]; n_classes];

        for (position, (true_label, pred)) in y_true.iter().zip(y_pred.iter()).enumerate() {
            let (Some(i), Some(j)) = (universe.index_of(true_label), universe.index_of(pred))
            else {
                return Err(EvalError::invalid_input(format!(
                    "sample {position} carries a label outside the label universe"
                )));
            };
            matrix[i][j] += 1;
        }

        tracing::debug!(n_classes, n_samples = y_true.len(), "built confusion matrix");

        Ok(Self { labels: universe, matrix, total: y_true.len() })
    }

    /// Row/column index of `label`
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.labels.index_of(label)
    }
}

impl<L> ConfusionMatrix<L> {
    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get the label universe
    pub fn universe(&self) -> &LabelUniverse<L> {
        &self.labels
    }

    /// Get the class labels in canonical order
    pub fn labels(&self) -> &[L] {
        self.labels.labels()
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.matrix.len()
    }

    /// Get element at [true_label][predicted_label]
    pub fn get(&self, true_label: usize, predicted_label: usize) -> usize {
        self.matrix[true_label][predicted_label]
    }

    /// Samples whose true label is class `i` (support)
    pub fn row_sum(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Samples predicted as class `j`
    pub fn col_sum(&self, class: usize) -> usize {
        self.matrix.iter().map(|row| row[class]).sum()
    }

    /// Calculate support (total true instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.row_sum(class)
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        self.col_sum(class) - self.true_positives(class)
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        self.row_sum(class) - self.true_positives(class)
    }

    /// Calculate true negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Sum of the diagonal (correct predictions)
    pub fn diagonal_sum(&self) -> usize {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.total
    }

    /// Calculate accuracy (unrounded)
    pub fn accuracy(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(EvalError::degenerate("accuracy of zero samples"));
        }
        Ok(self.diagonal_sum() as f64 / self.total as f64)
    }
}

impl<L: fmt::Display> fmt::Display for ConfusionMatrix<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix (rows: y_true, columns: y_pred):")?;

        let names: Vec<String> = self.labels().iter().map(ToString::to_string).collect();
        let width = names
            .iter()
            .map(String::len)
            .chain(self.matrix.iter().flatten().map(|c| c.to_string().len()))
            .max()
            .unwrap_or(1)
            .max(4);

        // Header
        write!(f, "{:>width$}", "")?;
        for name in &names {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        // Rows
        for (name, row) in names.iter().zip(self.matrix.iter()) {
            write!(f, "{name:>width$}")?;
            for count in row {
                write!(f, " {count:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Compute confusion matrix from ground truth and predictions
///
/// # Example
/// ```
/// use confmat::eval::confusion_matrix;
///
/// let y_true = vec![0, 1, 0, 2, 1];
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let cm = confusion_matrix(&y_true, &y_pred).unwrap();
///
/// assert_eq!(cm.get(0, 0), 1); // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1); // True 0, predicted 1
/// ```
pub fn confusion_matrix<L: Ord + Hash + Clone>(y_true: &[L], y_pred: &[L]) -> Result<ConfusionMatrix<L>> {
    ConfusionMatrix::from_predictions(y_true, y_pred)
}
