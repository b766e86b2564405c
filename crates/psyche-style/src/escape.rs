//! CSS string escaping.
//!
//! The one correctness-sensitive operation in this crate: user-authored text
//! (the empty-state message) ends up inside a double-quoted CSS string, and
//! an unescaped `"` there would terminate the string early and break the
//! rest of the stylesheet. Serialization follows the CSS syntax rules via
//! `cssparser`, which escapes quotes, backslashes and control characters.

/// Serializes `value` as a double-quoted CSS string, escaping as required.
///
/// # Example
///
/// ```rust
/// use psyche_style::css_string;
///
/// assert_eq!(css_string("no results"), r#""no results""#);
/// assert_eq!(css_string(r#"No "results" found"#), r#""No \"results\" found""#);
/// ```
pub fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    cssparser::serialize_string(value, &mut quoted).expect("writing to a String never fails");
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_is_wrapped_in_quotes() {
        assert_eq!(css_string("no results found"), "\"no results found\"");
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(css_string(""), "\"\"");
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(css_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_backslashes_are_escaped() {
        assert_eq!(css_string("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_no_unescaped_quote_survives() {
        let out = css_string("\"\"\"");
        let inner = &out[1..out.len() - 1];
        let mut previous_was_backslash = false;
        for c in inner.chars() {
            if c == '"' {
                assert!(previous_was_backslash, "unescaped quote in {:?}", out);
            }
            previous_was_backslash = c == '\\' && !previous_was_backslash;
        }
    }
}
