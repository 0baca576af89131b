use std::cmp::Ordering;

/// Compare two object keys for deterministic output ordering.
///
/// Shorter keys sort first; keys of equal byte length compare
/// lexicographically.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use json_node_util::obj_key_cmp;
///
/// assert_eq!(obj_key_cmp("a", "b"), Ordering::Less);
/// assert_eq!(obj_key_cmp("aa", "b"), Ordering::Greater);
/// assert_eq!(obj_key_cmp("a", "a"), Ordering::Equal);
/// ```
pub fn obj_key_cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
