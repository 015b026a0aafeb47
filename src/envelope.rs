//! Envelope handling for encoded scripts
//!
//! An encoded script is wrapped as:
//!
//! ```text
//! #@~^LLLLLL==<encoded tokens>CCCCCC==^#~@
//! ```
//!
//! where `LLLLLL` is the base64 token length and `CCCCCC` a base64
//! checksum. Neither is validated; the checksum is dropped by cutting the
//! token stream `END_SIGNATURE.len()` characters before the end signature.

use crate::error::{Error, Result};

/// Start of the container
pub const START_SIGNATURE: &str = "#@~^";
/// Delimiter closing the length header, searched from the start signature
pub const START_DELIMITER: &str = "==";
/// End of the container
pub const END_SIGNATURE: &str = "==^#~@";

/// Strip the envelope and return the encoded token stream.
///
/// Fails with [`Error::MissingSignature`] when either the start signature
/// or the delimiter after it is absent. A missing end signature is not an
/// error: the tokens then run to the end of `text`.
pub fn unwrap(text: &str) -> Result<&str> {
    let start = text.find(START_SIGNATURE).ok_or(Error::MissingSignature)?;
    let delimiter = text[start..]
        .find(START_DELIMITER)
        .map(|offset| start + offset)
        .ok_or(Error::MissingSignature)?;

    let remainder = &text[delimiter + START_DELIMITER.len()..];

    match remainder.find(END_SIGNATURE) {
        Some(end) if end > 0 => Ok(truncate_before(remainder, end)),
        _ => Ok(remainder),
    }
}

/// Cut `remainder` at `END_SIGNATURE.len()` characters before byte offset
/// `end`. The cut is skipped when it would not land strictly after the
/// start of `remainder`.
fn truncate_before(remainder: &str, end: usize) -> &str {
    let head = &remainder[..end];
    match head.char_indices().rev().nth(END_SIGNATURE.chars().count() - 1) {
        Some((cut, _)) if cut > 0 => &remainder[..cut],
        _ => remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_drops_header_and_trailer() {
        let tokens = unwrap("#@~^BgAAAA==abcdefAAAAAA==^#~@").unwrap();
        assert_eq!(tokens, "abcdef");
    }

    #[test]
    fn test_unwrap_ignores_leading_text() {
        let text = "<script language=\"VBScript.Encode\">#@~^AAAAAA==xyzQQQQQQ==^#~@</script>";
        assert_eq!(unwrap(text).unwrap(), "xyz");
    }

    #[test]
    fn test_unwrap_missing_start() {
        assert!(matches!(
            unwrap("just some text == ^#~@"),
            Err(Error::MissingSignature)
        ));
    }

    #[test]
    fn test_unwrap_delimiter_before_start_is_ignored() {
        // The only "==" occurs before the start signature
        assert!(matches!(unwrap("==#@~^abc"), Err(Error::MissingSignature)));
    }

    #[test]
    fn test_unwrap_without_end_signature() {
        assert_eq!(unwrap("#@~^AAAAAA==tokens").unwrap(), "tokens");
    }

    #[test]
    fn test_unwrap_end_signature_at_start_of_remainder() {
        assert_eq!(unwrap("#@~^==").unwrap(), "");
        assert_eq!(unwrap("#@~^AAAAAA====^#~@").unwrap(), "==^#~@");
    }

    #[test]
    fn test_unwrap_non_positive_cut_keeps_remainder() {
        // End signature 3 characters in: cut index would be negative
        assert_eq!(unwrap("#@~^==abc==^#~@").unwrap(), "abc==^#~@");
        // End signature exactly 6 characters in: cut index would be zero
        assert_eq!(unwrap("#@~^==abcdef==^#~@").unwrap(), "abcdef==^#~@");
        // One character past the trailer
        assert_eq!(unwrap("#@~^==xabcdef==^#~@").unwrap(), "x");
    }

    #[test]
    fn test_unwrap_counts_characters_not_bytes() {
        // Trailer made of multi-byte characters still removes six of them
        let text = "#@~^==ab\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}==^#~@";
        assert_eq!(unwrap(text).unwrap(), "ab");
    }
}
