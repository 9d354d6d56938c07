//! Foundation types for Assay.
//!
//! This crate provides the value and addressing types shared by the diff
//! engine and the JSON expectation. Every other Assay crate depends on
//! `assay-types`.
//!
//! # Key Types
//!
//! - [`ValueKind`] — The closed set of JSON value kinds, for kind dispatch
//! - [`Segment`] / [`Path`] — A location inside a nested value (`c.f[1].h2`)
//! - [`Lookup`] — The result of resolving a path: a value, or undefined
//! - [`PathError`] — Addressing into a scalar while resolving a path

pub mod error;
pub mod kind;
pub mod lookup;
pub mod path;

pub use error::PathError;
pub use kind::{stringify, ValueKind};
pub use lookup::{resolve, try_resolve, Lookup};
pub use path::{Path, Segment};

/// The value model compared by Assay: a decoded JSON document.
pub use serde_json::Value;
