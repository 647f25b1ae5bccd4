//! String manipulation utilities

use std::borrow::Cow;

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Backslash-escape `"` so the text can sit inside a DOT quoted ID
///
/// `\"` is the only escape a quoted ID knows; any other backslash is kept
/// as-is, so `Ns\Class` names the same node quoted or bare.
pub fn escape_quoted(text: &str) -> Cow<'_, str> {
    if !text.contains('"') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("issue", 0), "issues");
        assert_eq!(pluralize("issue", 1), "issue");
        assert_eq!(pluralize("issue", 5), "issues");
    }

    #[test]
    fn test_escape_quoted_plain_text_is_borrowed() {
        assert!(matches!(escape_quoted("Foo_Bar"), Cow::Borrowed("Foo_Bar")));
    }

    #[test]
    fn test_escape_quoted() {
        assert_eq!(escape_quoted(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape_quoted(r"Ns\Class"), r"Ns\Class");
        assert!(matches!(escape_quoted(r"Ns\Class"), Cow::Borrowed(_)));
    }
}
