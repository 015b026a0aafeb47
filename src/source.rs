//! Byte to text conversion for script sources
//!
//! Script files are read the way the scripting host reads them: a byte
//! order mark selects UTF-8, UTF-16 or UTF-32, anything else is taken as
//! UTF-8.
//! Malformed input is replaced with U+FFFD rather than rejected.

use std::borrow::Cow;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF32_LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
const UTF32_BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];

/// Text encoding detected from a byte order mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

/// Detect the encoding of `bytes` and the length of its byte order mark
pub fn detect(bytes: &[u8]) -> (Encoding, usize) {
    // UTF-32 LE shares its first two bytes with UTF-16 LE
    if bytes.starts_with(UTF32_LE_BOM) {
        (Encoding::Utf32Le, UTF32_LE_BOM.len())
    } else if bytes.starts_with(UTF32_BE_BOM) {
        (Encoding::Utf32Be, UTF32_BE_BOM.len())
    } else if bytes.starts_with(UTF8_BOM) {
        (Encoding::Utf8, UTF8_BOM.len())
    } else if bytes.starts_with(UTF16_LE_BOM) {
        (Encoding::Utf16Le, UTF16_LE_BOM.len())
    } else if bytes.starts_with(UTF16_BE_BOM) {
        (Encoding::Utf16Be, UTF16_BE_BOM.len())
    } else {
        (Encoding::Utf8, 0)
    }
}

/// Convert raw source bytes to text
pub fn to_text(bytes: &[u8]) -> Cow<'_, str> {
    let (encoding, bom_len) = detect(bytes);
    let body = &bytes[bom_len..];
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(body),
        Encoding::Utf16Le => Cow::Owned(decode_utf16(body, u16::from_le_bytes)),
        Encoding::Utf16Be => Cow::Owned(decode_utf16(body, u16::from_be_bytes)),
        Encoding::Utf32Le => Cow::Owned(decode_utf32(body, u32::from_le_bytes)),
        Encoding::Utf32Be => Cow::Owned(decode_utf32(body, u32::from_be_bytes)),
    }
}

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let mut units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(&mut units)
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    // Dangling odd byte
    if body.len() % 2 == 1 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

fn decode_utf32(body: &[u8], unit: fn([u8; 4]) -> u32) -> String {
    let chunks = body.chunks_exact(4);
    let dangling = !chunks.remainder().is_empty();
    let mut text: String = chunks
        .map(|c| unit([c[0], c[1], c[2], c[3]]))
        .map(|u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}
