//! Position-dependent substitution
//!
//! Every codeable character (code point below 0x80) advances `counter`,
//! which picks one of three candidates from the triplet table. Characters
//! above 0x7F still take an output slot at `position` but leave `counter`
//! alone, so the two must stay separate.

use crate::tables;

/// Whether `c` goes through the triplet table.
///
/// Tab and printable ASCII are substituted, except `<`, `>` and `@` which
/// only reach the decoder through escape expansion.
#[inline]
pub fn is_substituted(c: char) -> bool {
    let code = c as u32;
    code == 0x09 || (code > 31 && code < 0x80 && !matches!(c, '<' | '>' | '@'))
}

/// Whether `c` advances the cipher counter
#[inline]
pub fn is_codeable(c: char) -> bool {
    (c as u32) < tables::TRIPLET_COUNT as u32
}

/// Decode `script` in place.
pub fn decode_in_place(script: &mut [char]) {
    let mut counter: isize = -1;
    let mut position = 0;

    while position < script.len() {
        let c = script[position];

        if is_codeable(c) {
            counter += 1;
        }

        if is_substituted(c) {
            script[position] = tables::lookup(c as u32, counter as usize);
        }

        position += 1;
    }
}

/// Decode an owned buffer and hand it back.
pub fn decode(mut script: Vec<char>) -> Vec<char> {
    decode_in_place(&mut script);
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(s: &str) -> String {
        decode(s.chars().collect()).into_iter().collect()
    }

    #[test]
    fn test_substitution_classes() {
        assert!(is_substituted('\t'));
        assert!(is_substituted(' '));
        assert!(is_substituted('~'));
        assert!(is_substituted('\u{7f}'));
        assert!(!is_substituted('<'));
        assert!(!is_substituted('>'));
        assert!(!is_substituted('@'));
        assert!(!is_substituted('\n'));
        assert!(!is_substituted('\r'));
        assert!(!is_substituted('\u{1f}'));
        assert!(!is_substituted('\u{e9}'));
    }

    #[test]
    fn test_decode_known_prefix() {
        // "\\ko$K6" encodes "MsgBox"
        assert_eq!(decode_str("\\ko$K6"), "MsgBox");
    }

    #[test]
    fn test_unsubstituted_characters_pass_through() {
        assert_eq!(decode_str("\r\n<>@"), "\r\n<>@");
    }

    #[test]
    fn test_unsubstituted_codeable_characters_advance_counter() {
        // The newline consumes counter slot 0, so 'k' is decoded at slot 1
        let decoded = decode_str("\nk");
        assert_eq!(decoded.chars().nth(1), Some(tables::lookup('k' as u32, 1)));
    }

    #[test]
    fn test_non_codeable_characters_do_not_advance_counter() {
        let plain = decode_str("\\ko$K6");
        let mixed = decode_str("\\\u{e9}ko\u{2603}$K6\u{e9}");
        let stripped: String = mixed.chars().filter(|c| is_codeable(*c)).collect();
        assert_eq!(stripped, plain);
        assert_eq!(mixed.chars().nth(1), Some('\u{e9}'));
    }

    #[test]
    fn test_decode_preserves_length() {
        let input: Vec<char> = "a\u{e9}\tb<c>\r\n@".chars().collect();
        assert_eq!(decode(input.clone()).len(), input.len());
    }
}
