//! Compact JSON text output.

use std::fmt::{self, Write as _};

use json_node_util::{obj_key_cmp, quote_into};

use crate::error::{NodeError, Result};
use crate::node::{Node, Object};

/// Order in which object members are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyOrder {
    /// Whatever order the map iterates in. Not stable across runs.
    #[default]
    Unordered,
    /// Byte-wise lexicographic.
    Lexicographic,
    /// Shorter keys first, ties broken lexicographically.
    LengthFirst,
}

/// What to do with a NaN or infinite number, which JSON cannot spell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonFinite {
    /// Fail with [`NodeError::Serialization`].
    #[default]
    Reject,
    /// Write `null`, as `serde_json` does.
    Null,
}

/// Options for [`Node::marshal_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarshalOptions {
    pub key_order: KeyOrder,
    pub non_finite: NonFinite,
}

impl MarshalOptions {
    /// Options producing byte-identical output for equal trees.
    pub fn deterministic() -> Self {
        MarshalOptions {
            key_order: KeyOrder::Lexicographic,
            ..MarshalOptions::default()
        }
    }

    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    pub fn with_non_finite(mut self, non_finite: NonFinite) -> Self {
        self.non_finite = non_finite;
        self
    }
}

impl Node {
    /// Renders this tree as compact JSON text.
    ///
    /// Fails with [`NodeError::Serialization`] if a number is NaN or
    /// infinite, unless [`MarshalOptions::non_finite`] says otherwise.
    pub fn marshal(&self) -> Result<String> {
        self.marshal_with(&MarshalOptions::default())
    }

    pub fn marshal_with(&self, options: &MarshalOptions) -> Result<String> {
        let mut out = String::new();
        write_node(&mut out, self, options)?;
        Ok(out)
    }
}

fn write_node(out: &mut String, node: &Node, options: &MarshalOptions) -> Result<()> {
    match node {
        Node::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(out, item, options)?;
            }
            out.push(']');
        }
        Node::Object(members) => write_object(out, members, options)?,
        Node::String(s) => quote_into(out, s),
        Node::Number(n) => write_number(out, *n, options.non_finite)?,
        Node::Bool(true) => out.push_str("true"),
        Node::Bool(false) => out.push_str("false"),
        Node::Null => out.push_str("null"),
    }
    Ok(())
}

fn write_object(out: &mut String, members: &Object, options: &MarshalOptions) -> Result<()> {
    let mut entries: Vec<(&String, &Node)> = members.iter().collect();
    match options.key_order {
        KeyOrder::Unordered => {}
        KeyOrder::Lexicographic => entries.sort_unstable_by(|a, b| a.0.cmp(b.0)),
        KeyOrder::LengthFirst => entries.sort_unstable_by(|a, b| obj_key_cmp(a.0, b.0)),
    }

    out.push('{');
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        quote_into(out, key);
        out.push(':');
        write_node(out, value, options)?;
    }
    out.push('}');
    Ok(())
}

/// Shortest round-tripping digits. Plain decimal in `[1e-6, 1e21)`, exponent
/// form outside it (both `Display` and `LowerExp` pick the shortest digits).
fn write_number(out: &mut String, n: f64, non_finite: NonFinite) -> Result<()> {
    if !n.is_finite() {
        return match non_finite {
            NonFinite::Reject => Err(NodeError::Serialization(format!("{n} is not a JSON number"))),
            NonFinite::Null => {
                out.push_str("null");
                Ok(())
            }
        };
    }
    let magnitude = n.abs();
    let written = if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        write!(out, "{n:e}")
    } else {
        write!(out, "{n}")
    };
    written.map_err(|err| NodeError::Serialization(err.to_string()))
}

/// Compact JSON text. Non-finite numbers are written as `null`, since
/// `Display` cannot report errors.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = MarshalOptions::default().with_non_finite(NonFinite::Null);
        let text = self.marshal_with(&options).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_marshal_scalars() {
        assert_eq!(Node::Null.marshal().unwrap(), "null");
        assert_eq!(Node::from(true).marshal().unwrap(), "true");
        assert_eq!(Node::from(false).marshal().unwrap(), "false");
        assert_eq!(Node::from("hi").marshal().unwrap(), "\"hi\"");
    }

    #[test]
    fn test_marshal_numbers() {
        assert_eq!(Node::from(6).marshal().unwrap(), "6");
        assert_eq!(Node::from(-1.5).marshal().unwrap(), "-1.5");
        assert_eq!(Node::from(0.1).marshal().unwrap(), "0.1");
        assert_eq!(Node::from(1e20).marshal().unwrap(), "100000000000000000000");
        assert_eq!(Node::from(0.000001).marshal().unwrap(), "0.000001");
        assert_eq!(Node::from(-0.0).marshal().unwrap(), "-0");
    }

    #[test]
    fn test_marshal_extreme_numbers_use_exponent() {
        assert_eq!(Node::from(1e21).marshal().unwrap(), "1e21");
        assert_eq!(Node::from(-2.5e300).marshal().unwrap(), "-2.5e300");
        assert_eq!(Node::from(1.5e-7).marshal().unwrap(), "1.5e-7");
        assert_eq!(Node::from(5e-324).marshal().unwrap(), "5e-324");

        for n in [f64::MAX, f64::MIN, f64::MIN_POSITIVE, 5e-324, 1e21, 1.5e-7] {
            let text = Node::from(n).marshal().unwrap();
            assert_eq!(crate::decode(text.as_bytes()).unwrap(), Node::from(n), "{text}");
        }
    }

    #[test]
    fn test_marshal_rejects_non_finite() {
        assert!(matches!(
            Node::from(f64::NAN).marshal(),
            Err(NodeError::Serialization(_))
        ));
        assert!(Node::from(f64::INFINITY).marshal().is_err());

        let lossy = MarshalOptions::default().with_non_finite(NonFinite::Null);
        assert_eq!(
            Node::Array(vec![Node::from(f64::NEG_INFINITY)]).marshal_with(&lossy).unwrap(),
            "[null]"
        );
    }

    #[test]
    fn test_marshal_escapes_strings() {
        let node = Node::from("quote \" back \\ tab \t nul \u{0000}");
        assert_eq!(
            node.marshal().unwrap(),
            r#""quote \" back \\ tab \t nul \u0000""#
        );
    }

    #[test]
    fn test_marshal_escapes_keys() {
        let mut node = Node::new();
        node.set(1, &path!["a\"b"]).unwrap();
        assert_eq!(node.marshal().unwrap(), r#"{"a\"b":1}"#);
    }

    #[test]
    fn test_marshal_containers() {
        let node = crate::decode(br#"[[],{},[1,[2]],{"k":[null]}]"#).unwrap();
        assert_eq!(node.marshal().unwrap(), r#"[[],{},[1,[2]],{"k":[null]}]"#);
    }

    #[test]
    fn test_key_order_modes() {
        let node = crate::decode(br#"{"bb":1,"a":2,"c":3,"aaa":4}"#).unwrap();
        assert_eq!(
            node.marshal_with(&MarshalOptions::deterministic()).unwrap(),
            r#"{"a":2,"aaa":4,"bb":1,"c":3}"#
        );
        assert_eq!(
            node.marshal_with(&MarshalOptions::default().with_key_order(KeyOrder::LengthFirst))
                .unwrap(),
            r#"{"a":2,"c":3,"bb":1,"aaa":4}"#
        );
    }

    #[test]
    fn test_deterministic_output_applies_to_nested_objects() {
        let node = crate::decode(br#"{"z":{"y":1,"x":2},"a":[{"d":1,"c":2}]}"#).unwrap();
        assert_eq!(
            node.marshal_with(&MarshalOptions::deterministic()).unwrap(),
            r#"{"a":[{"c":2,"d":1}],"z":{"x":2,"y":1}}"#
        );
    }

    #[test]
    fn test_display() {
        let node = crate::decode(br#"{"Age":6}"#).unwrap();
        assert_eq!(node.to_string(), r#"{"Age":6}"#);
        assert_eq!(Node::Array(vec![Node::from(f64::NAN)]).to_string(), "[null]");
    }
}
