//! String utilities for JSON text output.

mod escape;

pub use escape::{escape_into, quote_into};
