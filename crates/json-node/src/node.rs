use std::collections::HashMap;
use std::fmt;

use crate::error::{NodeError, Result};

/// Object payload: unique keys, no ordering guarantee.
pub type Object = HashMap<String, Node>;

/// Array payload.
pub type Array = Vec<Node>;

/// One element of a JSON document tree.
///
/// Every container owns its children outright. `Clone` is a deep copy, so no
/// two live nodes ever share a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    Array(Array),
    Object(Object),
    Bool(bool),
    Number(f64),
    String(String),
    #[default]
    Null,
}

/// The tag of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Array,
    Object,
    Bool,
    Number,
    String,
    Null,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Null => "null",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// A fresh `Null` node.
    pub fn new() -> Self {
        Node::Null
    }

    pub fn kind(&self) -> Kind {
        match self {
            Node::Array(_) => Kind::Array,
            Node::Object(_) => Kind::Object,
            Node::Bool(_) => Kind::Bool,
            Node::Number(_) => Kind::Number,
            Node::String(_) => Kind::String,
            Node::Null => Kind::Null,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Number of direct children, or `None` for scalars and `Null`.
    pub fn len(&self) -> Option<usize> {
        match self {
            Node::Array(items) => Some(items.len()),
            Node::Object(members) => Some(members.len()),
            _ => None,
        }
    }

    /// `true` for a container with no children. Scalars are never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    fn mismatch(&self, expected: Kind) -> NodeError {
        NodeError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Node::Bool(b) => Ok(*b),
            other => Err(other.mismatch(Kind::Bool)),
        }
    }

    pub fn as_number(&self) -> Result<f64> {
        match self {
            Node::Number(n) => Ok(*n),
            other => Err(other.mismatch(Kind::Number)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Node::String(s) => Ok(s),
            other => Err(other.mismatch(Kind::String)),
        }
    }

    pub fn as_null(&self) -> Result<()> {
        match self {
            Node::Null => Ok(()),
            other => Err(other.mismatch(Kind::Null)),
        }
    }

    pub fn as_array(&self) -> Result<&[Node]> {
        match self {
            Node::Array(items) => Ok(items),
            other => Err(other.mismatch(Kind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Node::Object(members) => Ok(members),
            other => Err(other.mismatch(Kind::Object)),
        }
    }

    /// Replaces this node's content with a deep copy of `other`.
    pub fn copy_from(&mut self, other: &Node) {
        self.clone_from(other);
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<f32> for Node {
    fn from(n: f32) -> Self {
        Node::Number(f64::from(n))
    }
}

// JSON has a single numeric kind; integers are stored as f64.
macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Node {
                fn from(n: $ty) -> Self {
                    Node::Number(n as f64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<Array> for Node {
    fn from(items: Array) -> Self {
        Node::Array(items)
    }
}

impl From<Object> for Node {
    fn from(members: Object) -> Self {
        Node::Object(members)
    }
}

impl From<()> for Node {
    fn from(_: ()) -> Self {
        Node::Null
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        Node::Object(iter.into_iter().collect())
    }
}
