//! String-literal escaping and JSON body fragments.
//!
//! Only *literal* data destined to become a quoted string in the output is
//! escaped. Expression fragments supplied by the caller are target-language
//! code and pass through verbatim; callers must not pass untrusted data as
//! an expression fragment.

/// Render `text` as a single-quoted script string literal.
///
/// Backslash, newline and quote characters are escaped; the routine is
/// total over all inputs.
pub fn js_string(text: &str) -> String {
    let mut literal = String::with_capacity(text.len() + 2);
    literal.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\'' => literal.push_str("\\'"),
            _ => literal.push(ch),
        }
    }
    literal.push('\'');
    literal
}

/// Render a `JSON.stringify({...})` fragment from ordered key/expression
/// pairs. Keys become object keys; values are expression fragments emitted
/// verbatim.
pub fn json_object<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let fields = pairs
        .into_iter()
        .map(|(key, expr)| format!("{key}: {expr}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("JSON.stringify({{{fields}}})")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Read a single-quoted literal back to its raw bytes.
    fn unquote(literal: &str) -> Option<String> {
        let body = literal.strip_prefix('\'')?.strip_suffix('\'')?;
        let mut raw = String::new();
        let mut chars = body.chars();
        while let Some(ch) = chars.next() {
            if ch == '\'' {
                // unescaped quote would have ended the literal early
                return None;
            }
            if ch != '\\' {
                raw.push(ch);
                continue;
            }
            match chars.next()? {
                '\\' => raw.push('\\'),
                'n' => raw.push('\n'),
                '\'' => raw.push('\''),
                _ => return None,
            }
        }
        Some(raw)
    }

    #[test]
    fn test_plain_text_is_quoted() {
        assert_eq!(js_string("POST"), "'POST'");
    }

    #[test]
    fn test_escape_round_trip() {
        let original = "it's a \\test\\\nsecond line";
        let literal = js_string(original);
        assert_eq!(unquote(&literal).as_deref(), Some(original));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(js_string("a'b"), "'a\\'b'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
        assert_eq!(js_string("a\nb"), "'a\\nb'");
        assert_eq!(js_string(""), "''");
    }

    #[test]
    fn test_json_object() {
        assert_eq!(
            json_object([("author", "author"), ("text", "text")]),
            "JSON.stringify({author: author, text: text})",
        );
        assert_eq!(json_object([]), "JSON.stringify({})");
    }
}
