//! Shallow iteration over a container's direct children.

use std::collections::hash_map;
use std::fmt;
use std::iter::Enumerate;
use std::slice;

use crate::error::{NodeError, Result};
use crate::node::Node;
use crate::path::PathSegment;

/// Where a child sits in its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKey<'a> {
    Index(usize),
    Key(&'a str),
}

impl ChildKey<'_> {
    pub fn to_segment(self) -> PathSegment {
        match self {
            ChildKey::Index(index) => PathSegment::Index(index),
            ChildKey::Key(key) => PathSegment::Key(key.to_string()),
        }
    }
}

impl fmt::Display for ChildKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKey::Index(index) => write!(f, "{index}"),
            ChildKey::Key(key) => f.write_str(key),
        }
    }
}

/// Iterator returned by [`Node::children`].
///
/// Arrays yield in index order; objects in unspecified order.
#[derive(Debug)]
pub enum Children<'a> {
    Array(Enumerate<slice::Iter<'a, Node>>),
    Object(hash_map::Iter<'a, String, Node>),
}

impl<'a> Iterator for Children<'a> {
    type Item = (ChildKey<'a>, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Array(items) => items
                .next()
                .map(|(index, child)| (ChildKey::Index(index), child)),
            Children::Object(members) => members
                .next()
                .map(|(key, child)| (ChildKey::Key(key.as_str()), child)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Children::Array(items) => items.size_hint(),
            Children::Object(members) => members.size_hint(),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl Node {
    /// Iterates over the direct children of an array or object.
    pub fn children(&self) -> Result<Children<'_>> {
        match self {
            Node::Array(items) => Ok(Children::Array(items.iter().enumerate())),
            Node::Object(members) => Ok(Children::Object(members.iter())),
            other => Err(NodeError::NotIterable {
                found: other.kind(),
            }),
        }
    }

    /// Calls `visit` once per direct child. Not recursive.
    pub fn for_each<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(ChildKey<'_>, &Node),
    {
        for (key, child) in self.children()? {
            visit(key, child);
        }
        Ok(())
    }

    /// Like [`Node::for_each`], but the visitor may edit each child in place.
    ///
    /// Only the child is reachable from the visitor; the container's shape
    /// cannot change during the walk.
    pub fn for_each_mut<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(ChildKey<'_>, &mut Node),
    {
        match self {
            Node::Array(items) => {
                for (index, child) in items.iter_mut().enumerate() {
                    visit(ChildKey::Index(index), child);
                }
            }
            Node::Object(members) => {
                for (key, child) in members.iter_mut() {
                    visit(ChildKey::Key(key), child);
                }
            }
            other => {
                return Err(NodeError::NotIterable {
                    found: other.kind(),
                })
            }
        }
        Ok(())
    }
}
