use thiserror::Error;

use crate::node::Kind;
use crate::path::PathSegment;

/// Every failure a [`Node`](crate::Node) operation can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The JSON decoder rejected the input bytes.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    /// The decoded value held something outside the six JSON kinds.
    #[error("unsupported value: {0}")]
    UnsupportedType(String),
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },
    #[error("cannot look up a key in {found}")]
    NotAnObject { found: Kind },
    #[error("cannot look up an index in {found}")]
    NotAnArray { found: Kind },
    #[error("key {key:?} not found")]
    KeyNotFound { key: String },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Extending an array to `index` would exceed what a `Vec` can hold.
    #[error("cannot extend array to index {index}")]
    ArrayTooLarge { index: usize },
    #[error("invalid path segment: {0}")]
    InvalidPathSegment(String),
    #[error("empty path")]
    EmptyPath,
    /// A write would have to turn populated content into another container.
    #[error("cannot write through {found} with segment {segment}")]
    IncompatibleCoercion { segment: PathSegment, found: Kind },
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("{found} has no children to iterate")]
    NotIterable { found: Kind },
    #[error("cannot serialize: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NodeError>;
