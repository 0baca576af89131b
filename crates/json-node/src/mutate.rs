//! Writes by path with auto-vivification.
//!
//! A write runs in two phases. Planning walks the existing tree read-only
//! and finds where the path leaves it. Any incompatible node stops the write
//! before anything has changed. Commit builds the missing suffix as a
//! detached subtree and attaches it with one assignment, so a failed `set`
//! leaves the tree untouched.

use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::error::{NodeError, Result};
use crate::node::{Node, Object};
use crate::path::{PathSegment, Pointer};

/// Outcome of planning a write.
#[derive(Debug, PartialEq)]
enum Plan {
    /// Every segment resolves; the leaf is replaced.
    Overwrite,
    /// `path[..depth]` exists and `path[depth]` does not.
    Graft { depth: usize },
}

impl Node {
    fn plan_write(&self, path: &[PathSegment]) -> Result<Plan> {
        let mut node = self;
        for (depth, segment) in path.iter().enumerate() {
            let next = match (segment, node) {
                (PathSegment::Key(key), Node::Object(members)) => members.get(key),
                (PathSegment::Index(index), Node::Array(items)) => items.get(*index),
                (_, Node::Null) => None,
                (segment, other) => {
                    return Err(NodeError::IncompatibleCoercion {
                        segment: segment.clone(),
                        found: other.kind(),
                    })
                }
            };
            match next {
                Some(child) => node = child,
                None => return Ok(Plan::Graft { depth }),
            }
        }
        Ok(Plan::Overwrite)
    }

    /// Writes `value` at `path`, creating missing containers on the way, and
    /// returns the written node.
    ///
    /// - A `Null` node on the path becomes an object when the next segment
    ///   is a key, or an array when it is an index.
    /// - An index past the end of an array pads it with `Null` up to and
    ///   including that index.
    /// - Any other node that does not match the next segment fails the write
    ///   with [`NodeError::IncompatibleCoercion`].
    /// - An empty path replaces this node.
    ///
    /// Integer values are stored as `Number`. Passing a `&Node` stores a deep
    /// copy.
    ///
    /// # Example
    ///
    /// ```
    /// use json_node::{path, Node};
    ///
    /// let mut node = Node::new();
    /// node.set("v", &path!["a", 0, "b"]).unwrap();
    /// assert_eq!(node.to_string(), r#"{"a":[{"b":"v"}]}"#);
    /// ```
    pub fn set(&mut self, value: impl Into<Node>, path: &[PathSegment]) -> Result<&mut Node> {
        let value = value.into();
        trace!(path = %Pointer(path), kind = %value.kind(), "set");

        match self.plan_write(path)? {
            Plan::Overwrite => {
                let target = self.walk_mut(path)?;
                *target = value;
                Ok(target)
            }
            Plan::Graft { depth } => {
                debug!(path = %Pointer(path), depth, "grafting new structure");
                let (segment, rest) = (&path[depth], &path[depth + 1..]);
                let staged = stage(value, rest)?;
                let anchor = self.walk_mut(&path[..depth])?;
                attach(anchor, segment, staged)?.walk_mut(rest)
            }
        }
    }
}

/// Builds the subtree that `rest` describes, with `value` at its leaf.
fn stage(value: Node, rest: &[PathSegment]) -> Result<Node> {
    rest.iter().rev().try_fold(value, |child, segment| match segment {
        PathSegment::Key(key) => Ok(Node::Object(Object::from([(key.clone(), child)]))),
        PathSegment::Index(index) => padded(*index, child).map(Node::Array),
    })
}

/// `Null` up to `index`, then `child`.
fn padded(index: usize, child: Node) -> Result<Vec<Node>> {
    let mut items = Vec::new();
    items
        .try_reserve_exact(extended_len(index)?)
        .map_err(|_| NodeError::ArrayTooLarge { index })?;
    items.resize(index, Node::Null);
    items.push(child);
    Ok(items)
}

fn extended_len(index: usize) -> Result<usize> {
    index.checked_add(1).ok_or(NodeError::ArrayTooLarge { index })
}

/// Stores `child` under `segment` in `anchor`, turning a `Null` anchor into
/// the container the segment calls for. Nothing is written unless the whole
/// attachment succeeds.
fn attach<'a>(anchor: &'a mut Node, segment: &PathSegment, child: Node) -> Result<&'a mut Node> {
    if anchor.is_null() {
        *anchor = match segment {
            PathSegment::Key(key) => Node::Object(Object::from([(key.clone(), child)])),
            PathSegment::Index(index) => Node::Array(padded(*index, child)?),
        };
        return anchor.child_mut(segment);
    }

    match (segment, anchor) {
        (PathSegment::Key(key), Node::Object(members)) => match members.entry(key.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(child);
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => Ok(entry.insert(child)),
        },
        (PathSegment::Index(index), Node::Array(items)) => {
            let index = *index;
            if index >= items.len() {
                let len = extended_len(index)?;
                items
                    .try_reserve(len - items.len())
                    .map_err(|_| NodeError::ArrayTooLarge { index })?;
                debug!(index, len = items.len(), "extending array");
                items.resize(len, Node::Null);
            }
            items[index] = child;
            Ok(&mut items[index])
        }
        (segment, other) => Err(NodeError::IncompatibleCoercion {
            segment: segment.clone(),
            found: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Kind;
    use crate::path;

    #[test]
    fn test_set_on_empty_node_builds_object() {
        let mut node = Node::new();
        node.set(1, &path!["A"]).unwrap();
        node.set("b", &path!["B"]).unwrap();

        assert!(node.is_object());
        assert_eq!(node.get_number(&path!["A"]), Ok(1.0));
        assert_eq!(node.get_str(&path!["B"]), Ok("b"));
    }

    #[test]
    fn test_auto_vivification_shape() {
        let mut node = Node::new();
        node.set(true, &path!["a", 0, "b"]).unwrap();

        let expected = Node::Object(Object::from([(
            "a".to_string(),
            Node::Array(vec![Node::Object(Object::from([(
                "b".to_string(),
                Node::Bool(true),
            )]))]),
        )]));
        assert_eq!(node, expected);
    }

    #[test]
    fn test_set_extends_array_with_nulls() {
        let mut node = Node::Array(vec![Node::from(1)]);
        node.set("x", &path![3]).unwrap();
        assert_eq!(
            node,
            Node::Array(vec![Node::from(1), Node::Null, Node::Null, Node::from("x")])
        );
    }

    #[test]
    fn test_set_on_empty_array() {
        let mut node = Node::Array(vec![]);
        node.set("v", &path![0]).unwrap();
        assert_eq!(node, Node::Array(vec![Node::from("v")]));
    }

    #[test]
    fn test_set_overwrites_existing_leaf() {
        let mut node = crate::decode(br#"{"a":{"b":[1,2]}}"#).unwrap();
        node.set("replaced", &path!["a", "b"]).unwrap();
        assert_eq!(node.get_str(&path!["a", "b"]), Ok("replaced"));
    }

    #[test]
    fn test_set_within_existing_array() {
        let mut node = crate::decode(br#"[10,20,30]"#).unwrap();
        node.set(21, &path![1]).unwrap();
        assert_eq!(node.marshal().unwrap(), "[10,21,30]");
    }

    #[test]
    fn test_set_coerces_null_child() {
        let mut node = crate::decode(br#"{"a":null}"#).unwrap();
        node.set(5, &path!["a", 2]).unwrap();
        assert_eq!(node.marshal().unwrap(), r#"{"a":[null,null,5]}"#);
    }

    #[test]
    fn test_set_empty_path_replaces_self() {
        let mut node = crate::decode(br#"{"a":1}"#).unwrap();
        node.set("plain", &[]).unwrap();
        assert_eq!(node, Node::from("plain"));
    }

    #[test]
    fn test_set_node_is_deep_copied() {
        let source = crate::decode(br#"{"list":[1]}"#).unwrap();
        let mut target = Node::new();
        target.set(&source, &path!["copy"]).unwrap();

        target.set(2, &path!["copy", "list", 1]).unwrap();
        assert_eq!(source.get(&path!["list"]).unwrap().len(), Some(1));
        assert_eq!(target.get(&path!["copy", "list"]).unwrap().len(), Some(2));
    }

    #[test]
    fn test_incompatible_coercion_of_scalar() {
        let mut node = crate::decode(br#"{"a":"text"}"#).unwrap();
        let before = node.clone();
        assert_eq!(
            node.set(1, &path!["a", "b"]),
            Err(NodeError::IncompatibleCoercion {
                segment: PathSegment::from("b"),
                found: Kind::String
            })
        );
        assert_eq!(node, before);
    }

    #[test]
    fn test_incompatible_coercion_between_containers() {
        let mut node = crate::decode(br#"{"list":[1],"map":{}}"#).unwrap();
        assert!(matches!(
            node.set(1, &path!["list", "k"]),
            Err(NodeError::IncompatibleCoercion { found: Kind::Array, .. })
        ));
        assert!(matches!(
            node.set(1, &path!["map", 0]),
            Err(NodeError::IncompatibleCoercion { found: Kind::Object, .. })
        ));
    }

    #[test]
    fn test_failed_set_leaves_no_partial_structure() {
        let mut node = crate::decode(br#"{"a":{"b":7}}"#).unwrap();
        let before = node.clone();
        assert!(node.set(1, &path!["a", "b", "c", 0]).is_err());
        assert_eq!(node, before);

        let mut node = Node::new();
        node.set(1, &path!["x"]).unwrap();
        assert!(node.set(2, &path![0, "y"]).is_err());
        assert_eq!(node.marshal().unwrap(), r#"{"x":1}"#);
    }

    #[test]
    fn test_set_returns_written_node() {
        let mut node = Node::new();
        let leaf = node.set(Node::Array(vec![]), &path!["a", "b"]).unwrap();
        leaf.set(1, &path![0]).unwrap();
        assert_eq!(node.marshal().unwrap(), r#"{"a":{"b":[1]}}"#);
    }

    #[test]
    fn test_plan_write() {
        let node = crate::decode(br#"{"a":[null]}"#).unwrap();
        assert_eq!(node.plan_write(&path!["a", 0]), Ok(Plan::Overwrite));
        assert_eq!(node.plan_write(&path!["a", 0, "b"]), Ok(Plan::Graft { depth: 2 }));
        assert_eq!(node.plan_write(&path!["a", 4]), Ok(Plan::Graft { depth: 1 }));
        assert_eq!(node.plan_write(&path!["z", "y"]), Ok(Plan::Graft { depth: 0 }));
    }

    #[test]
    fn test_stage() {
        assert_eq!(stage(Node::from(1), &[]), Ok(Node::from(1)));
        assert_eq!(
            stage(Node::from(1), &path![1, "k"]),
            Ok(Node::Array(vec![
                Node::Null,
                Node::Object(Object::from([("k".to_string(), Node::from(1))]))
            ]))
        );
    }

    #[test]
    fn test_set_rejects_index_beyond_addressable_length() {
        let mut node = Node::Array(vec![Node::from(1)]);
        assert_eq!(
            node.set("x", &[PathSegment::Index(usize::MAX)]),
            Err(NodeError::ArrayTooLarge { index: usize::MAX })
        );
        assert!(matches!(
            node.set("x", &[PathSegment::Index(usize::MAX - 1)]),
            Err(NodeError::ArrayTooLarge { .. })
        ));
        assert_eq!(node, Node::Array(vec![Node::from(1)]));

        let mut node = Node::new();
        assert_eq!(
            node.set("x", &[PathSegment::Index(usize::MAX)]),
            Err(NodeError::ArrayTooLarge { index: usize::MAX })
        );
        assert_eq!(node, Node::Null);
    }

    #[test]
    fn test_set_rejects_huge_staged_index() {
        let mut node = crate::decode(br#"{"keep":1}"#).unwrap();
        let before = node.clone();
        assert_eq!(
            node.set("x", &path!["a", usize::MAX / 64, "b"]),
            Err(NodeError::ArrayTooLarge { index: usize::MAX / 64 })
        );
        assert_eq!(node, before);

        let mut node = Node::new();
        assert!(node.set("x", &path!["a", usize::MAX / 64, "b"]).is_err());
        assert_eq!(node, Node::Null);
    }
}
