//! Read access by path.

use crate::error::{NodeError, Result};
use crate::node::Node;
use crate::path::PathSegment;

impl Node {
    /// Resolves one segment against this node.
    pub(crate) fn child(&self, segment: &PathSegment) -> Result<&Node> {
        match (segment, self) {
            (PathSegment::Key(key), Node::Object(members)) => members
                .get(key)
                .ok_or_else(|| NodeError::KeyNotFound { key: key.clone() }),
            (PathSegment::Index(index), Node::Array(items)) => {
                items.get(*index).ok_or(NodeError::IndexOutOfRange {
                    index: *index,
                    len: items.len(),
                })
            }
            (PathSegment::Key(_), other) => Err(NodeError::NotAnObject {
                found: other.kind(),
            }),
            (PathSegment::Index(_), other) => Err(NodeError::NotAnArray {
                found: other.kind(),
            }),
        }
    }

    pub(crate) fn child_mut(&mut self, segment: &PathSegment) -> Result<&mut Node> {
        match (segment, self) {
            (PathSegment::Key(key), Node::Object(members)) => members
                .get_mut(key)
                .ok_or_else(|| NodeError::KeyNotFound { key: key.clone() }),
            (PathSegment::Index(index), Node::Array(items)) => {
                let len = items.len();
                items
                    .get_mut(*index)
                    .ok_or(NodeError::IndexOutOfRange { index: *index, len })
            }
            (PathSegment::Key(_), other) => Err(NodeError::NotAnObject {
                found: other.kind(),
            }),
            (PathSegment::Index(_), other) => Err(NodeError::NotAnArray {
                found: other.kind(),
            }),
        }
    }

    /// Walks `path` from this node. An empty path yields `self`.
    pub(crate) fn walk(&self, path: &[PathSegment]) -> Result<&Node> {
        path.iter().try_fold(self, |node, segment| node.child(segment))
    }

    pub(crate) fn walk_mut(&mut self, path: &[PathSegment]) -> Result<&mut Node> {
        path.iter()
            .try_fold(self, |node, segment| node.child_mut(segment))
    }

    /// Returns the descendant at `path`.
    ///
    /// Segments resolve left to right and the first failure is returned as
    /// is. A missing key and an out-of-range index are both errors, never a
    /// silent `Null`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_node::{decode, path};
    ///
    /// let node = decode(br#"{"Parents":["Gomez","Morticia"]}"#).unwrap();
    /// assert_eq!(node.get(&path!["Parents", 1]).unwrap().as_str(), Ok("Morticia"));
    /// ```
    pub fn get(&self, path: &[PathSegment]) -> Result<&Node> {
        if path.is_empty() {
            return Err(NodeError::EmptyPath);
        }
        self.walk(path)
    }

    /// Mutable counterpart of [`Node::get`]. Never creates structure; see
    /// [`Node::set`] for that.
    pub fn get_mut(&mut self, path: &[PathSegment]) -> Result<&mut Node> {
        if path.is_empty() {
            return Err(NodeError::EmptyPath);
        }
        self.walk_mut(path)
    }

    /// `true` when `path` resolves to a node.
    pub fn contains(&self, path: &[PathSegment]) -> bool {
        self.get(path).is_ok()
    }

    pub fn get_bool(&self, path: &[PathSegment]) -> Result<bool> {
        self.get(path)?.as_bool()
    }

    pub fn get_number(&self, path: &[PathSegment]) -> Result<f64> {
        self.get(path)?.as_number()
    }

    pub fn get_str(&self, path: &[PathSegment]) -> Result<&str> {
        self.get(path)?.as_str()
    }

    pub fn get_null(&self, path: &[PathSegment]) -> Result<()> {
        self.get(path)?.as_null()
    }
}
