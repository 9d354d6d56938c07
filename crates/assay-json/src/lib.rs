//! JSON equality expectations for Assay.
//!
//! Compares decoded JSON values for exact structural equality and, only when
//! they differ, explains the failure with a report of each differing leaf and
//! its path in the larger document.
//!
//! ```
//! use assay_json::{eql_json, Matcher};
//! use serde_json::json;
//!
//! let mut expectation = eql_json(json!({"c": {"e": "e2"}}));
//! assert!(!expectation.matches(&json!({"c": {"e": "e"}})));
//! assert!(expectation.failure_message().ends_with("c.e\nExpected: 'e2'\nActual: 'e'\n\n"));
//! ```

pub mod config;
pub mod error;
pub mod expectation;
pub mod helpers;
pub mod matcher;

pub use config::JsonConfig;
pub use error::{JsonError, JsonResult};
pub use expectation::JsonExpectation;
pub use helpers::{assert_json_eq, eql_json, json_response, json_response_with, try_json_response};
pub use matcher::Matcher;

// Re-export key types
pub use assay_diff::{DiffReport, ReportEntry};
pub use assay_types::{Path, Value};
