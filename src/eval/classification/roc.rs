//! One-vs-rest ROC curves and macro-averaged AUC
//!
//! Predictions are hard labels, so each binarized score column only holds
//! 0 and 1 and every per-class curve has at most three operating points.

use super::confusion::check_pair;
use super::labels::LabelUniverse;
use crate::error::{EvalError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::hash::Hash;

/// ROC curve of one binary problem
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RocCurve {
    /// False positive rate at each operating point, non-decreasing
    pub fpr: Vec<f64>,
    /// True positive rate at each operating point, non-decreasing
    pub tpr: Vec<f64>,
    /// Score threshold of each operating point; the first is `+inf`
    pub thresholds: Vec<f64>,
    /// Trapezoidal area under the curve
    pub auc: f64,
}

/// Macro-average of several ROC curves on a shared FPR grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MacroRoc {
    /// Sorted union of every per-class FPR value
    pub fpr: Vec<f64>,
    /// Mean interpolated TPR at each grid point
    pub tpr: Vec<f64>,
    pub auc: f64,
}

/// ROC curve of a single class
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassRoc<L> {
    pub label: L,
    #[serde(flatten)]
    pub curve: RocCurve,
}

/// Per-class and macro-averaged ROC results
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RocAnalysis<L> {
    pub curves: Vec<ClassRoc<L>>,
    #[serde(rename = "macro")]
    pub macro_roc: MacroRoc,
}

/// One-vs-rest indicator column per label: `out[i][k] == 1` iff `y[k] == labels[i]`
pub fn binarize<L: PartialEq>(y: &[L], labels: &[L]) -> Vec<Vec<u8>> {
    labels
        .iter()
        .map(|label| y.iter().map(|v| u8::from(v == label)).collect())
        .collect()
}

/// Area under a piecewise-linear curve by the trapezoidal rule
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]) / 2.0)
        .sum()
}

/// Piecewise-linear interpolation of `(xp, fp)` at `x`
///
/// `xp` must be non-decreasing. Queries left of the first sample take
/// `fp[0]`, right of the last take the last value. When `xp` repeats a
/// value the rightmost sample at that value wins. Empty samples, or `xp`
/// and `fp` of different lengths, give NaN.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if xp.len() != fp.len() {
        return f64::NAN;
    }
    let Some((&last, &first)) = xp.last().zip(xp.first()) else {
        return f64::NAN;
    };
    if x.is_nan() {
        return f64::NAN;
    }
    if x < first {
        return fp[0];
    }
    if x > last {
        return fp[fp.len() - 1];
    }

    // last index j with xp[j] <= x
    let j = xp.partition_point(|&v| v <= x).saturating_sub(1);
    if j == xp.len() - 1 || xp[j] == x {
        return fp[j];
    }
    let slope = (fp[j + 1] - fp[j]) / (xp[j + 1] - xp[j]);
    fp[j] + slope * (x - xp[j])
}

/// ROC curve of a binary problem from per-sample scores
///
/// Scores are visited in descending order and one operating point is emitted
/// per distinct score. Interior points collinear with their neighbours are
/// dropped and the origin is prepended with threshold `+inf`. When the
/// truth has no positive (or no negative) sample the corresponding rate is
/// undefined and reported as NaN.
pub fn roc_curve(truth: &[bool], scores: &[f64]) -> Result<RocCurve> {
    check_pair(truth, scores)?;
    if scores.iter().any(|s| s.is_nan()) {
        return Err(EvalError::invalid_input("ROC scores must not be NaN"));
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    // cumulative counts at the last sample of each distinct score
    let mut tps: Vec<usize> = Vec::new();
    let mut fps: Vec<usize> = Vec::new();
    let mut thresholds: Vec<f64> = Vec::new();
    let mut tp = 0;
    for (rank, &k) in order.iter().enumerate() {
        if truth[k] {
            tp += 1;
        }
        let is_last_of_value = order
            .get(rank + 1)
            .map_or(true, |&next| scores[next] != scores[k]);
        if is_last_of_value {
            tps.push(tp);
            fps.push(rank + 1 - tp);
            thresholds.push(scores[k]);
        }
    }

    if tps.len() > 2 {
        let keep: Vec<usize> = (0..tps.len())
            .filter(|&i| {
                i == 0
                    || i == tps.len() - 1
                    || second_difference(&fps, i) != 0
                    || second_difference(&tps, i) != 0
            })
            .collect();
        tps = keep.iter().map(|&i| tps[i]).collect();
        fps = keep.iter().map(|&i| fps[i]).collect();
        thresholds = keep.iter().map(|&i| thresholds[i]).collect();
    }

    tps.insert(0, 0);
    fps.insert(0, 0);
    thresholds.insert(0, f64::INFINITY);

    let positives = tps[tps.len() - 1];
    let negatives = fps[fps.len() - 1];
    if positives == 0 {
        tracing::warn!("no positive samples in truth, true positive rate is undefined");
    }
    if negatives == 0 {
        tracing::warn!("no negative samples in truth, false positive rate is undefined");
    }

    let fpr = rates(&fps, negatives);
    let tpr = rates(&tps, positives);
    let auc = trapezoid(&fpr, &tpr);

    Ok(RocCurve { fpr, tpr, thresholds, auc })
}

fn second_difference(values: &[usize], i: usize) -> i64 {
    values[i - 1] as i64 - 2 * values[i] as i64 + values[i + 1] as i64
}

fn rates(counts: &[usize], denominator: usize) -> Vec<f64> {
    if denominator == 0 {
        return vec![f64::NAN; counts.len()];
    }
    counts.iter().map(|&c| c as f64 / denominator as f64).collect()
}

/// Average curves on the sorted union of their FPR values
///
/// Each curve's TPR is interpolated onto the shared grid. The values at a
/// grid point are summed in ascending order so the result is independent of
/// the order the curves are given in.
pub fn macro_average<'a>(curves: impl IntoIterator<Item = &'a RocCurve>) -> MacroRoc {
    let curves: Vec<&RocCurve> = curves.into_iter().collect();

    let mut grid: Vec<f64> = curves.iter().flat_map(|c| c.fpr.iter().copied()).collect();
    grid.sort_by(f64::total_cmp);
    grid.dedup_by(|a, b| a.total_cmp(b) == Ordering::Equal);

    let n = curves.len() as f64;
    let tpr: Vec<f64> = grid
        .iter()
        .map(|&x| {
            let mut column: Vec<f64> = curves.iter().map(|c| interp(x, &c.fpr, &c.tpr)).collect();
            column.sort_by(f64::total_cmp);
            column.iter().sum::<f64>() / n
        })
        .collect();
    let auc = trapezoid(&grid, &tpr);

    MacroRoc { fpr: grid, tpr, auc }
}

impl<L: Eq + Hash + Clone> RocAnalysis<L> {
    /// Binarize both sequences against `universe`, then build one ROC curve
    /// per class and their macro-average.
    pub fn compute(y_true: &[L], y_pred: &[L], universe: &LabelUniverse<L>) -> Result<Self> {
        check_pair(y_true, y_pred)?;
        if universe.is_empty() {
            return Err(EvalError::invalid_input("label universe is empty"));
        }
        if let Some(k) = y_true
            .iter()
            .chain(y_pred.iter())
            .position(|label| universe.index_of(label).is_none())
        {
            return Err(EvalError::invalid_input(format!(
                "label at position {k} of y_true ++ y_pred is outside the label universe"
            )));
        }

        let labels = universe.labels();
        let truth_columns = binarize(y_true, labels);
        let score_columns = binarize(y_pred, labels);

        let curves = labels
            .iter()
            .zip(truth_columns.iter().zip(score_columns.iter()))
            .map(|(label, (truth, scores))| {
                let truth: Vec<bool> = truth.iter().map(|&t| t == 1).collect();
                let scores: Vec<f64> = scores.iter().map(|&s| f64::from(s)).collect();
                roc_curve(&truth, &scores).map(|curve| ClassRoc { label: label.clone(), curve })
            })
            .collect::<Result<Vec<_>>>()?;

        let macro_roc = macro_average(curves.iter().map(|c| &c.curve));
        tracing::debug!(n_classes = curves.len(), macro_auc = macro_roc.auc, "computed ROC curves");

        Ok(Self { curves, macro_roc })
    }
}

impl<L: PartialEq> RocAnalysis<L> {
    /// Curve of a single class
    pub fn curve(&self, label: &L) -> Option<&RocCurve> {
        self.curves.iter().find(|c| &c.label == label).map(|c| &c.curve)
    }

    /// AUC of a single class
    pub fn auc(&self, label: &L) -> Option<f64> {
        self.curve(label).map(|c| c.auc)
    }
}
