//! Resolving paths against values.

use serde_json::Value;

use crate::error::PathError;
use crate::kind::ValueKind;
use crate::path::{Path, Segment};

/// The outcome of resolving a path: the value found there, or nothing.
///
/// `Undefined` is distinct from a present `null`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    Undefined,
}

impl<'a> Lookup<'a> {
    /// Returns `true` when nothing was found.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Use `other` when this lookup is undefined.
    pub fn or(self, other: Lookup<'a>) -> Lookup<'a> {
        match self {
            Self::Found(_) => self,
            Self::Undefined => other,
        }
    }
}

impl<'a> From<Option<&'a Value>> for Lookup<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Undefined, Self::Found)
    }
}

/// Walk `path` from `root`.
///
/// A missing key or out-of-range index resolves to [`Lookup::Undefined`]. A
/// key segment against a list, or an index segment against a map, is also a
/// miss. Addressing into a scalar is a [`PathError::NotAContainer`].
pub fn try_resolve<'a>(root: &'a Value, path: &Path) -> Result<Lookup<'a>, PathError> {
    let mut current = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        let next = match (current, segment) {
            (Value::Object(map), Segment::Key(key)) => map.get(key),
            (Value::Array(items), Segment::Index(index)) => items.get(*index),
            (Value::Object(_), Segment::Index(_)) | (Value::Array(_), Segment::Key(_)) => None,
            (scalar, _) => {
                let prefix: Path = path.segments()[..depth].iter().cloned().collect();
                return Err(PathError::NotAContainer {
                    path: prefix.to_string(),
                    kind: ValueKind::of(scalar),
                });
            }
        };
        match next {
            Some(value) => current = value,
            None => return Ok(Lookup::Undefined),
        }
    }
    Ok(Lookup::Found(current))
}

/// Resolve path text against `root`, treating every failure as a miss.
///
/// ```
/// use assay_types::{resolve, Lookup};
/// use serde_json::json;
///
/// let doc = json!({"gamma": [{"i": "a"}]});
/// assert_eq!(resolve(&doc, "gamma[0].i"), Lookup::Found(&json!("a")));
/// assert_eq!(resolve(&doc, "gamma[1].i"), Lookup::Undefined);
/// ```
pub fn resolve<'a>(root: &'a Value, path_text: &str) -> Lookup<'a> {
    try_resolve(root, &Path::parse(path_text)).unwrap_or(Lookup::Undefined)
}
