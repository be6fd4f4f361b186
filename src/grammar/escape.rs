//! Literal escaping for composed patterns

/// Check if a character has to be backslash-escaped inside a pattern
fn needs_escape(ch: char) -> bool {
    ch.is_whitespace()
        || matches!(
            ch,
            '-' | '['
                | ']'
                | '{'
                | '}'
                | '('
                | ')'
                | '*'
                | '+'
                | '?'
                | '.'
                | ','
                | '\\'
                | '^'
                | '$'
                | '|'
                | '#'
        )
}

/// Escape a literal so it matches itself verbatim inside a pattern
///
/// Every alias passes through here before it is joined into an
/// alternation; `c++` becomes `c\+\+`.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if needs_escape(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_literal("python"), "python");
        assert_eq!(escape_literal(""), "");
    }

    #[test]
    fn test_quantifiers_escaped() {
        assert_eq!(escape_literal("c++"), r"c\+\+");
        assert_eq!(escape_literal("a*b?"), r"a\*b\?");
    }

    #[test]
    fn test_all_metacharacters_escaped() {
        assert_eq!(
            escape_literal(r"-[]{}()*+?.,\^$|#"),
            r"\-\[\]\{\}\(\)\*\+\?\.\,\\\^\$\|\#"
        );
    }

    #[test]
    fn test_whitespace_escaped() {
        assert_eq!(escape_literal("objective c"), r"objective\ c");
        assert_eq!(escape_literal("a\tb"), "a\\\tb");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(escape_literal("ñ-lang"), r"ñ\-lang");
    }
}
