//! Ingestion from JSON text.
//!
//! Parsing is delegated to `serde_json`; this module only normalizes the
//! generic [`serde_json::Value`] it produces into a [`Node`] tree.

use std::str::FromStr;

use serde_json::Value;
use tracing::trace;

use crate::error::{NodeError, Result};
use crate::node::{Node, Object};

/// Decodes JSON text into a [`Node`].
///
/// # Example
///
/// ```
/// use json_node::{decode, path};
///
/// let node = decode(br#"[{"Parents":["Gomez","Morticia"]},"hello"]"#).unwrap();
/// assert_eq!(node.get_str(&path![0, "Parents", 0]), Ok("Gomez"));
/// ```
pub fn decode(bytes: &[u8]) -> Result<Node> {
    trace!(len = bytes.len(), "decode");
    let value: Value = serde_json::from_slice(bytes)?;
    Node::try_from(value)
}

pub fn decode_str(text: &str) -> Result<Node> {
    decode(text.as_bytes())
}

impl Node {
    /// Decodes `bytes` into this node, replacing its content. On failure the
    /// node is left as it was.
    pub fn unmarshal(&mut self, bytes: &[u8]) -> Result<()> {
        *self = decode(bytes)?;
        Ok(())
    }
}

impl FromStr for Node {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self> {
        decode_str(s)
    }
}

impl TryFrom<Value> for Node {
    type Error = NodeError;

    fn try_from(value: Value) -> Result<Self> {
        Ok(match value {
            Value::Array(items) => Node::Array(
                items
                    .into_iter()
                    .map(Node::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Object(members) => Node::Object(
                members
                    .into_iter()
                    .map(|(key, value)| Node::try_from(value).map(|node| (key, node)))
                    .collect::<Result<Object>>()?,
            ),
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => match n.as_f64() {
                Some(f) => Node::Number(f),
                None => return Err(NodeError::UnsupportedType(format!("number {n}"))),
            },
            Value::String(s) => Node::String(s),
            Value::Null => Node::Null,
        })
    }
}

/// Converts back to a `serde_json::Value`. NaN and infinities become `null`,
/// matching `serde_json`.
impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(key, child)| (key.clone(), Value::from(child)))
                    .collect(),
            ),
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Node::String(s) => Value::String(s.clone()),
            Node::Null => Value::Null,
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::from(&node)
    }
}
