const HEX: &[u8; 16] = b"0123456789abcdef";

/// Returns the escape sequence for `ch` when JSON text requires one.
///
/// JSON mandates escaping for `"`, `\` and every control character in
/// `U+0000..=U+001F`. The five control characters with a short form use it,
/// the rest fall back to `\u00XX`.
fn short_escape(ch: char) -> Option<&'static str> {
    match ch {
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        '\u{0008}' => Some("\\b"),
        '\u{000C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

/// Appends `s` to `out` with JSON string escaping applied, without quotes.
///
/// Unescaped runs are copied in bulk; only characters that need an escape
/// break a run.
///
/// # Examples
///
/// ```
/// use json_node_util::strings::escape_into;
///
/// let mut out = String::from("\"");
/// escape_into(&mut out, "tab\there");
/// out.push('"');
/// assert_eq!(out, "\"tab\\there\"");
/// ```
pub fn escape_into(out: &mut String, s: &str) {
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        if let Some(esc) = short_escape(ch) {
            out.push_str(&s[last..i]);
            out.push_str(esc);
            last = i + 1;
        } else if ch < '\u{0020}' {
            out.push_str(&s[last..i]);
            let b = ch as u8;
            out.push_str("\\u00");
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0xF) as usize] as char);
            last = i + 1;
        }
    }

    out.push_str(&s[last..]);
}

/// Appends `s` to `out` as a complete JSON string literal, quotes included.
pub fn quote_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    escape_into(out, s);
    out.push('"');
}
