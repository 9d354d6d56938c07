use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced while resolving a path against a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("cannot address into {kind} at {path:?}")]
    NotAContainer { path: String, kind: ValueKind },
}
