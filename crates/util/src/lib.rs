//! json-node-util - helpers shared by the json-node crates.
//!
//! String escaping for JSON text and the object-key comparator used for
//! deterministic serialization.

pub mod obj_key_cmp;
pub mod strings;

pub use obj_key_cmp::obj_key_cmp;
pub use strings::{escape_into, quote_into};
