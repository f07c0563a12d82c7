//! Class labels and the label universe
//!
//! The universe is the distinct union of the true and predicted sequences,
//! fixed once in a canonical order. That order decides the meaning of every
//! matrix row and column downstream, so it is always deterministic.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Ordering policy for the label universe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelOrder {
    /// Ascending natural order of the label type
    #[default]
    Sorted,
    /// Order of first appearance over `y_true` followed by `y_pred`
    FirstSeen,
}

impl FromStr for LabelOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sorted" => Ok(LabelOrder::Sorted),
            "first-seen" | "first_seen" => Ok(LabelOrder::FirstSeen),
            _ => Err(format!("Unknown label order: {s}. Valid orders: sorted, first-seen")),
        }
    }
}

impl fmt::Display for LabelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelOrder::Sorted => write!(f, "sorted"),
            LabelOrder::FirstSeen => write!(f, "first-seen"),
        }
    }
}

/// A class label read from text input
///
/// Integers sort numerically and before any text label; text labels sort
/// lexicographically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Text(String),
}

impl Label {
    /// Parse a raw field, preferring an integer reading
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(Label::Integer)
            .unwrap_or_else(|_| Label::Text(raw.to_string()))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Integer(v) => write!(f, "{v}"),
            Label::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Label::Integer(value)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Label::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Label::Text(value)
    }
}

/// Canonically ordered set of distinct labels with O(1) index lookup
#[derive(Clone, Debug)]
pub struct LabelUniverse<L> {
    labels: Vec<L>,
    index: HashMap<L, usize>,
}

impl<L: Eq + Hash + Clone> LabelUniverse<L> {
    /// Build a universe from labels already in their final order.
    ///
    /// Duplicates keep their first position.
    pub fn from_ordered(ordered: impl IntoIterator<Item = L>) -> Self {
        let mut labels = Vec::new();
        let mut index = HashMap::new();
        for label in ordered {
            if !index.contains_key(&label) {
                index.insert(label.clone(), labels.len());
                labels.push(label);
            }
        }
        Self { labels, index }
    }

    /// Universe ordered by first appearance over `y_true` then `y_pred`.
    ///
    /// Works for label types without a natural order.
    pub fn first_seen(y_true: &[L], y_pred: &[L]) -> Self {
        Self::from_ordered(y_true.iter().chain(y_pred.iter()).cloned())
    }

    /// Position of a label in the canonical order
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }
}

impl<L> LabelUniverse<L> {
    /// Labels in canonical order
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no label has been observed
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a canonical position
    pub fn get(&self, index: usize) -> Option<&L> {
        self.labels.get(index)
    }
}

impl<L: Ord + Hash + Clone> LabelUniverse<L> {
    /// Universe sorted ascending by the label type's natural order
    pub fn sorted(y_true: &[L], y_pred: &[L]) -> Self {
        let distinct: BTreeSet<&L> = y_true.iter().chain(y_pred.iter()).collect();
        Self::from_ordered(distinct.into_iter().cloned())
    }

    /// Build a universe with the requested ordering policy
    pub fn build(y_true: &[L], y_pred: &[L], order: LabelOrder) -> Self {
        match order {
            LabelOrder::Sorted => Self::sorted(y_true, y_pred),
            LabelOrder::FirstSeen => Self::first_seen(y_true, y_pred),
        }
    }
}

impl<L: Serialize> Serialize for LabelUniverse<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.labels)
    }
}
