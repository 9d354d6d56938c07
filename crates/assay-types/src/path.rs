//! Paths into nested values.
//!
//! A path is a sequence of segments, each a map key or a list index, and
//! serializes as `key1.key2[index].key3`. Parsing splits on `.`, `[` and `]`:
//!
//! - Empty tokens are skipped
//! - A purely numeric token without a leading zero (or exactly `"0"`) is an index
//! - Every other token is a key
//!
//! A map key that is itself a non-zero-padded integer therefore parses back
//! as an index. This ambiguity is kept for compatibility with existing
//! report text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Delimiters separating path tokens.
const DELIMITERS: &[char] = &['.', '[', ']'];

/// One step into a nested value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Segment {
    /// A map key.
    Key(String),
    /// A list index.
    Index(usize),
}

impl Segment {
    /// Classify a single path token as an index or a key.
    pub fn from_token(token: &str) -> Self {
        if is_index_token(token) {
            if let Ok(index) = token.parse() {
                return Self::Index(index);
            }
        }
        Self::Key(token.to_string())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

fn is_index_token(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'))
}

/// A location inside a value, from the root down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The empty path, addressing the root value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse path text such as `gamma[0].i`.
    ///
    /// Parsing never fails: malformed text only yields segments that are
    /// unlikely to resolve.
    ///
    /// ```
    /// use assay_types::{Path, Segment};
    ///
    /// let path = Path::parse("c.f[1].h2");
    /// assert_eq!(
    ///     path.segments(),
    ///     &[
    ///         Segment::Key("c".into()),
    ///         Segment::Key("f".into()),
    ///         Segment::Index(1),
    ///         Segment::Key("h2".into()),
    ///     ]
    /// );
    /// assert_eq!(path.to_string(), "c.f[1].h2");
    /// ```
    pub fn parse(text: &str) -> Self {
        Self(
            text.split(DELIMITERS)
                .filter(|token| !token.is_empty())
                .map(Segment::from_token)
                .collect(),
        )
    }

    /// A new path extending this one by `segment`.
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// A new path with all of `other`'s segments appended.
    pub fn join(&self, other: &Path) -> Self {
        let mut path = self.clone();
        path.0.extend(other.0.iter().cloned());
        path
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    /// The segments, root first.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Returns `true` for the empty path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 && matches!(segment, Segment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
