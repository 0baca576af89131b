//! Paths addressing descendants of a [`Node`](crate::Node).
//!
//! A path is a sequence of [`PathSegment`]s: object keys and array indices.
//! Segments are typed, so a string is never reinterpreted as an index or the
//! other way around. Dynamic input (JSON arrays, signed integers) goes
//! through the `TryFrom` impls, which reject anything that is not a key or a
//! non-negative index.

use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use crate::error::NodeError;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Selects a member of an object.
    Key(String),
    /// Selects an element of an array.
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<&String> for PathSegment {
    fn from(key: &String) -> Self {
        PathSegment::Key(key.clone())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl TryFrom<i64> for PathSegment {
    type Error = NodeError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .map(PathSegment::Index)
            .map_err(|_| NodeError::InvalidPathSegment(format!("negative index {index}")))
    }
}

impl TryFrom<&Value> for PathSegment {
    type Error = NodeError;

    /// Accepts a JSON string (key) or a non-negative integral number (index).
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(key) => Ok(PathSegment::Key(key.clone())),
            Value::Number(n) => {
                if let Some(index) = n.as_u64() {
                    usize::try_from(index)
                        .map(PathSegment::Index)
                        .map_err(|_| NodeError::InvalidPathSegment(format!("index {index} too large")))
                } else if let Some(index) = n.as_i64() {
                    PathSegment::try_from(index)
                } else {
                    Err(NodeError::InvalidPathSegment(format!("non-integral index {n}")))
                }
            }
            other => Err(NodeError::InvalidPathSegment(other.to_string())),
        }
    }
}

/// Writes the segment as one RFC 6901 pointer component (`~` as `~0`, `/` as
/// `~1`).
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Index(index) => write!(f, "{index}"),
            PathSegment::Key(key) => {
                for ch in key.chars() {
                    match ch {
                        '~' => f.write_str("~0")?,
                        '/' => f.write_str("~1")?,
                        c => fmt::Write::write_char(f, c)?,
                    }
                }
                Ok(())
            }
        }
    }
}

/// An owned, ordered sequence of segments.
///
/// Dereferences to `[PathSegment]`, so `&path` works anywhere a segment
/// slice is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<PathSegment>);

impl Path {
    pub fn new() -> Self {
        Path(Vec::new())
    }

    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    pub fn into_inner(self) -> Vec<PathSegment> {
        self.0
    }
}

impl Deref for Path {
    type Target = [PathSegment];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[PathSegment]> for Path {
    fn as_ref(&self) -> &[PathSegment] {
        &self.0
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path(segments)
    }
}

impl FromIterator<PathSegment> for Path {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl TryFrom<&Value> for Path {
    type Error = NodeError;

    /// Reads a path written as a JSON array, e.g. `["Parents", 0]`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.iter().map(PathSegment::try_from).collect(),
            other => Err(NodeError::InvalidPathSegment(format!(
                "path must be an array, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Pointer(&self.0), f)
    }
}

/// Displays a borrowed segment slice as a JSON pointer. The root is `""`.
pub(crate) struct Pointer<'a>(pub(crate) &'a [PathSegment]);

impl fmt::Display for Pointer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Builds a [`Path`] from keys and indices.
///
/// ```
/// use json_node::{path, PathSegment};
///
/// let p = path!["Parents", 0];
/// assert_eq!(p[0], PathSegment::Key("Parents".into()));
/// assert_eq!(p[1], PathSegment::Index(0));
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::PathSegment::from($segment)),+])
    };
}
