//! Helpers for test suites: building expectations, decoding response bodies
//! and asserting equality.

use serde::Serialize;
use tracing::warn;

use assay_types::Value;

use crate::config::JsonConfig;
use crate::error::JsonResult;
use crate::expectation::JsonExpectation;
use crate::matcher::Matcher;

/// Create an expectation that the actual value equals `expected`.
///
/// ```
/// use assay_json::{eql_json, Matcher};
/// use serde_json::json;
///
/// assert!(eql_json(json!([1, 2])).matches(&json!([1, 2])));
/// ```
pub fn eql_json(expected: impl Into<Value>) -> JsonExpectation {
    JsonExpectation::new(expected)
}

/// Parse a response body as JSON.
pub fn try_json_response(body: &str) -> JsonResult<Value> {
    Ok(serde_json::from_str(body)?)
}

/// Parse a response body as JSON, substituting the default placeholder
/// string when the body is not valid JSON.
pub fn json_response(body: &str) -> Value {
    json_response_with(&JsonConfig::default(), body)
}

/// Parse a response body as JSON, substituting `config`'s placeholder string
/// when the body is not valid JSON.
pub fn json_response_with(config: &JsonConfig, body: &str) -> Value {
    match try_json_response(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "response body is not valid JSON");
            Value::String(config.invalid_json_placeholder.clone())
        }
    }
}

/// Assert that `actual` and `expected` serialize to equal JSON values.
///
/// # Panics
///
/// Panics with the full difference report when the values differ, or when
/// either side cannot be serialized.
#[track_caller]
pub fn assert_json_eq<A, E>(actual: &A, expected: &E)
where
    A: Serialize + ?Sized,
    E: Serialize + ?Sized,
{
    let actual = match serde_json::to_value(actual) {
        Ok(value) => value,
        Err(e) => panic!("actual value is not serializable as JSON: {e}"),
    };
    let expected = match serde_json::to_value(expected) {
        Ok(value) => value,
        Err(e) => panic!("expected value is not serializable as JSON: {e}"),
    };

    let mut expectation = JsonExpectation::new(expected);
    if !expectation.matches(&actual) {
        panic!("{}", expectation.failure_message());
    }
}

/// Assert that two serializable values are structurally equal as JSON,
/// panicking with a per-path difference report otherwise.
///
/// ```
/// use assay_json::assert_eql_json;
/// use serde_json::json;
///
/// assert_eql_json!(json!({"a": [1, 2]}), json!({"a": [1, 2]}));
/// ```
#[macro_export]
macro_rules! assert_eql_json {
    ($actual:expr, $expected:expr $(,)?) => {
        $crate::assert_json_eq(&$actual, &$expected)
    };
}
