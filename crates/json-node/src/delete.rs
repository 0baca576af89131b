use tracing::{debug, trace};

use crate::error::{NodeError, Result};
use crate::node::Node;
use crate::path::{PathSegment, Pointer};

impl Node {
    /// Removes the child at `path` from its parent and returns it.
    ///
    /// Removing an array element shifts the later elements down by one. The
    /// root itself cannot be deleted, so an empty path is an
    /// [`NodeError::UnsupportedOperation`]. Errors while resolving the
    /// parent are returned unchanged and nothing is removed.
    pub fn delete(&mut self, path: &[PathSegment]) -> Result<Node> {
        trace!(path = %Pointer(path), "delete");
        let Some((leaf, parent_path)) = path.split_last() else {
            return Err(NodeError::UnsupportedOperation("cannot delete the root node"));
        };

        let removed = match (leaf, self.walk_mut(parent_path)?) {
            (PathSegment::Key(key), Node::Object(members)) => members
                .remove(key)
                .ok_or_else(|| NodeError::KeyNotFound { key: key.clone() })?,
            (PathSegment::Index(index), Node::Array(items)) => {
                if *index >= items.len() {
                    return Err(NodeError::IndexOutOfRange {
                        index: *index,
                        len: items.len(),
                    });
                }
                items.remove(*index)
            }
            (PathSegment::Key(_), other) => {
                return Err(NodeError::NotAnObject {
                    found: other.kind(),
                })
            }
            (PathSegment::Index(_), other) => {
                return Err(NodeError::NotAnArray {
                    found: other.kind(),
                })
            }
        };

        debug!(path = %Pointer(path), kind = %removed.kind(), "removed child");
        Ok(removed)
    }
}
