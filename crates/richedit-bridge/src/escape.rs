//! Escaping of string arguments embedded in single-quoted engine calls.

/// Escape `s` for interpolation between single quotes in a script.
///
/// Backslashes go first so the escapes added afterwards are not doubled.
pub fn escape_js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// True if `s` contains a `'` not preceded by an odd run of backslashes.
#[cfg(test)]
pub(crate) fn has_unescaped_quote(s: &str) -> bool {
    let mut backslashes = 0usize;
    for ch in s.chars() {
        match ch {
            '\\' => backslashes += 1,
            '\'' if backslashes % 2 == 0 => return true,
            _ => backslashes = 0,
        }
    }
    false
}
