//! Dynamically-typed JSON documents.
//!
//! A [`Node`] is one of six kinds (array, object, boolean, number, string,
//! null). Trees are addressed with [`Path`]s of keys and indices, read with
//! [`Node::get`], written with [`Node::set`] (which creates missing
//! containers), and pruned with [`Node::delete`]. Parsing is delegated to
//! `serde_json`; [`Node::marshal`] writes compact JSON text back out.
//!
//! # Example
//!
//! ```
//! use json_node::{decode, path, Node};
//!
//! let mut node = decode(br#"{"Name":"Wednesday","Parents":["Gomez","Morticia"]}"#).unwrap();
//! assert_eq!(node.get_str(&path!["Parents", 0]), Ok("Gomez"));
//!
//! node.delete(&path!["Parents"]).unwrap();
//! node.set(6, &path!["Age"]).unwrap();
//! node.delete(&path!["Name"]).unwrap();
//! assert_eq!(node.marshal().unwrap(), r#"{"Age":6}"#);
//!
//! let mut fresh = Node::new();
//! fresh.set(true, &path!["a", 0, "b"]).unwrap();
//! assert_eq!(fresh.to_string(), r#"{"a":[{"b":true}]}"#);
//! ```
//!
//! A tree is plain owned data. Sharing one across threads for mutation needs
//! an external lock.

pub mod error;
pub mod iter;
pub mod marshal;
pub mod node;
pub mod path;

mod decode;
mod delete;
mod interop;
mod mutate;
mod navigate;

pub use decode::{decode, decode_str};
pub use error::{NodeError, Result};
pub use iter::{ChildKey, Children};
pub use marshal::{KeyOrder, MarshalOptions, NonFinite};
pub use node::{Array, Kind, Node, Object};
pub use path::{Path, PathSegment};
