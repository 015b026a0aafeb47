//! Escape sequence expansion
//!
//! The encoder escapes characters that would break the surrounding markup
//! or line structure as `@` followed by a marker. Expansion runs one
//! whole-buffer pass per rule, in rule order. A character produced by a rule
//! is final: later rules never match against it, so `@$&` expands to `@&`
//! rather than to a line feed.

/// Escape marker
pub const ESCAPE: char = '@';

/// Expansion rules as `(marker, literal)`, applied in this order
pub const RULES: [(char, char); 5] = [
    ('*', '>'),
    ('!', '<'),
    ('$', '@'),
    ('&', '\n'),
    ('#', '\r'),
];

/// One character of the buffer being expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    /// Untouched input character
    Raw(char),
    /// Produced by an expansion rule
    Literal(char),
}

impl Unit {
    fn char(self) -> char {
        match self {
            Unit::Raw(c) | Unit::Literal(c) => c,
        }
    }
}

/// Expand all escape sequences in `tokens`.
pub fn expand(tokens: &str) -> Vec<char> {
    let mut units: Vec<Unit> = tokens.chars().map(Unit::Raw).collect();
    for &(marker, literal) in RULES.iter() {
        units = apply_rule(&units, marker, literal);
    }
    units.into_iter().map(Unit::char).collect()
}

/// Replace every raw `@marker` pair with `literal`, scanning left to right
/// without overlap.
fn apply_rule(units: &[Unit], marker: char, literal: char) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        if units[i] == Unit::Raw(ESCAPE) && units.get(i + 1) == Some(&Unit::Raw(marker)) {
            out.push(Unit::Literal(literal));
            i += 2;
        } else {
            out.push(units[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(tokens: &str) -> String {
        expand(tokens).into_iter().collect()
    }

    #[test]
    fn test_expand_each_rule() {
        assert_eq!(expand_str("@*"), ">");
        assert_eq!(expand_str("@!"), "<");
        assert_eq!(expand_str("@$"), "@");
        assert_eq!(expand_str("@&"), "\n");
        assert_eq!(expand_str("@#"), "\r");
    }

    #[test]
    fn test_expand_plain_text_untouched() {
        assert_eq!(expand_str("MsgBox x"), "MsgBox x");
        assert_eq!(expand_str("a@b@"), "a@b@");
    }

    #[test]
    fn test_expand_line_endings() {
        assert_eq!(expand_str("a@#@&b"), "a\r\nb");
    }

    #[test]
    fn test_expanded_at_is_not_rescanned() {
        assert_eq!(expand_str("@$&"), "@&");
        assert_eq!(expand_str("@$#"), "@#");
        assert_eq!(expand_str("@$*"), "@*");
        assert_eq!(expand_str("@$$"), "@$");
    }

    #[test]
    fn test_expand_double_escape_marker() {
        // The first '@' has no marker after it; the second pairs with '*'
        assert_eq!(expand_str("@@*"), "@>");
        assert_eq!(expand_str("@$@$"), "@@");
    }

    #[test]
    fn test_expand_shrinks_length() {
        let tokens = "x@!y@*z";
        let expanded = expand(tokens);
        assert_eq!(expanded.len(), tokens.chars().count() - 2);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand("").is_empty());
    }
}
