//! Python literal escaping.
//!
//! Every user-supplied value goes through here before it reaches the
//! template, so quotes and newlines in free text cannot break the script.

use std::fmt::Write;

/// Renders `value` as a double-quoted Python string literal.
pub fn python_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                // Cc characters all sit below U+0100.
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders `items` as a Python list of string literals, e.g. `["a", "b"]`.
pub fn python_list_literal<S: AsRef<str>>(items: &[S]) -> String {
    let body: Vec<String> = items
        .iter()
        .map(|item| python_string_literal(item.as_ref()))
        .collect();
    format!("[{}]", body.join(", "))
}
