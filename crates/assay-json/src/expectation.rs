//! Structural JSON equality with a readable failure report.

use std::cell::OnceCell;

use assay_diff::{build_report, DiffReport};
use assay_types::{stringify, Value};
use tracing::debug;

use crate::matcher::Matcher;

/// Expects an actual value to equal `expected` exactly.
///
/// Map key order is ignored; list order is not. The difference report is
/// built only when a failure message is requested, and is cached until the
/// next call to [`matches`](Matcher::matches).
#[derive(Debug)]
pub struct JsonExpectation {
    expected: Value,
    actual: Option<Value>,
    report: OnceCell<DiffReport>,
}

impl JsonExpectation {
    /// Create an expectation that values equal `expected`.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            actual: None,
            report: OnceCell::new(),
        }
    }

    /// The value actual values are compared against.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// The value passed to the last `matches` call.
    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }

    /// The difference report, if a failure message has been rendered since
    /// the last `matches` call.
    pub fn report(&self) -> Option<&DiffReport> {
        self.report.get()
    }

    fn actual_text(&self) -> String {
        self.actual.as_ref().map(stringify).unwrap_or_default()
    }
}

impl Matcher<Value> for JsonExpectation {
    fn matches(&mut self, actual: &Value) -> bool {
        self.report = OnceCell::new();
        self.actual = Some(actual.clone());
        let matched = *actual == self.expected;
        if !matched {
            debug!("JSON values differ");
        }
        matched
    }

    fn failure_message(&self) -> String {
        let mut message = format!(
            "Expected: {}\n\nActual: {}\n\nDifferences\n\n",
            stringify(&self.expected),
            self.actual_text()
        );

        if let Some(actual) = &self.actual {
            let report = self
                .report
                .get_or_init(|| build_report(actual, &self.expected));
            message.push_str(&report.to_string());
        }

        message
    }

    fn negated_failure_message(&self) -> String {
        format!(
            "Expected: {} not to equal {}",
            self.actual_text(),
            stringify(&self.expected)
        )
    }

    fn description(&self) -> String {
        format!("eql json {}", stringify(&self.expected))
    }
}
