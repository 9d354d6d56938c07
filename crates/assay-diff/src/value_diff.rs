//! One-level structural diff between two values.
//!
//! Maps are compared key by key and lists index by index. Nested values are
//! compared by deep equality only: a differing child is reported as a single
//! `Changed` op, and refining it further is left to the report builder.

use assay_types::{Path, Segment};
use serde_json::Value;

/// The result of comparing two values one level deep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueDiff<'a> {
    /// The ops, sorted by path.
    pub ops: Vec<DiffOp<'a>>,
}

impl<'a> ValueDiff<'a> {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no differences.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Number of children present only in the expected value.
    pub fn additions(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Added { .. }))
            .count()
    }

    /// Number of children present only in the actual value.
    pub fn removals(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Removed { .. }))
            .count()
    }

    /// Number of children present on both sides with unequal values.
    pub fn changes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DiffOp::Changed { .. }))
            .count()
    }

    /// Iterate over the ops in path order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp<'a>> {
        self.ops.iter()
    }
}

impl<'a> IntoIterator for ValueDiff<'a> {
    type Item = DiffOp<'a>;
    type IntoIter = std::vec::IntoIter<DiffOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

/// A single difference, relative to the compared values.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffOp<'a> {
    /// Present only in the expected value.
    Added { path: Path, value: &'a Value },
    /// Present only in the actual value.
    Removed { path: Path, value: &'a Value },
    /// Present on both sides but unequal. `old` is the actual side.
    Changed {
        path: Path,
        old: &'a Value,
        new: &'a Value,
    },
}

impl DiffOp<'_> {
    /// The path this op refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Added { path, .. } | Self::Removed { path, .. } | Self::Changed { path, .. } => {
                path
            }
        }
    }
}

/// Compute the one-level diff from `actual` to `expected`.
///
/// Keys or indices present only in `actual` are `Removed`, those present
/// only in `expected` are `Added`, and those present in both with unequal
/// values are `Changed`. When the two values are not both maps or both
/// lists, a single `Changed` at the root path is produced if they differ.
///
/// Ops are stably sorted by path: keys lexicographically, indices
/// numerically.
pub fn diff_values<'a>(actual: &'a Value, expected: &'a Value) -> ValueDiff<'a> {
    let mut ops = Vec::new();

    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            // Removed and changed keys.
            for (key, actual_val) in actual_map {
                let path = Path::root().child(key.as_str());
                match expected_map.get(key) {
                    Some(expected_val) => {
                        if actual_val != expected_val {
                            ops.push(DiffOp::Changed {
                                path,
                                old: actual_val,
                                new: expected_val,
                            });
                        }
                    }
                    None => ops.push(DiffOp::Removed {
                        path,
                        value: actual_val,
                    }),
                }
            }

            // Added keys.
            for (key, expected_val) in expected_map {
                if !actual_map.contains_key(key) {
                    ops.push(DiffOp::Added {
                        path: Path::root().child(key.as_str()),
                        value: expected_val,
                    });
                }
            }
        }
        (Value::Array(actual_items), Value::Array(expected_items)) => {
            let len = actual_items.len().max(expected_items.len());
            for index in 0..len {
                let path = Path::root().child(Segment::Index(index));
                match (actual_items.get(index), expected_items.get(index)) {
                    (Some(old), Some(new)) => {
                        if old != new {
                            ops.push(DiffOp::Changed { path, old, new });
                        }
                    }
                    (Some(value), None) => ops.push(DiffOp::Removed { path, value }),
                    (None, Some(value)) => ops.push(DiffOp::Added { path, value }),
                    (None, None) => {}
                }
            }
        }
        _ => {
            if actual != expected {
                ops.push(DiffOp::Changed {
                    path: Path::root(),
                    old: actual,
                    new: expected,
                });
            }
        }
    }

    // Indices order numerically ([2] before [10]), not by their path text.
    ops.sort_by(|a, b| a.path().cmp(b.path()));
    ValueDiff { ops }
}
