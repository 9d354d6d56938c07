//! Diff engine for Assay.
//!
//! Compares two JSON values and explains how they differ, highlighting only
//! the values that changed and where they sit in the larger document.
//!
//! # Key Types
//!
//! - [`ValueDiff`] / [`DiffOp`] -- One-level diff (added/removed/changed children)
//! - [`DiffReport`] / [`ReportEntry`] -- Recursive, deduplicated, per-leaf report

pub mod report;
pub mod value_diff;

pub use report::{build_report, format_leaf, DiffReport, ReportEntry};
pub use value_diff::{diff_values, DiffOp, ValueDiff};
