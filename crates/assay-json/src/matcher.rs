//! The matcher protocol a host assertion layer drives.

/// An expectation that can be checked against an actual value.
///
/// Hosts call [`matches`](Matcher::matches) first; the failure messages
/// describe the most recent call.
pub trait Matcher<A: ?Sized> {
    /// Check `actual` against the expectation, remembering it for messages.
    fn matches(&mut self, actual: &A) -> bool;

    /// Explanation shown when a positive assertion fails.
    fn failure_message(&self) -> String;

    /// Explanation shown when a negated assertion fails.
    fn negated_failure_message(&self) -> String;

    /// Short description of the expectation.
    fn description(&self) -> String;

    /// Whether the host should append its own diff to the failure message.
    fn diffable(&self) -> bool {
        false
    }
}
