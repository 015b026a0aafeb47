//! Fixture tests for the decoder
//!
//! Each encoded fixture in `tests/fixtures` sits next to its plaintext. The
//! pairs are compared byte for byte through every entry point.

use std::fs;
use std::io::{Cursor, Seek, SeekFrom};
use std::path::PathBuf;

use vbe_decoder::{decode_bytes, decode_file, decode_script, decode_stream, ErrorKind};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).expect("fixture should exist")
}

#[test]
fn test_vbscript_fixture() {
    let decoded = decode_file(fixture("hello.vbe")).unwrap();
    assert_eq!(decoded, read_fixture("hello.vbs"));
}

#[test]
fn test_jscript_fixture() {
    let decoded = decode_file(fixture("greet.jse")).unwrap();
    assert_eq!(decoded, read_fixture("greet.js"));
}

#[test]
fn test_fixture_covers_escapes() {
    let plain = read_fixture("hello.vbs");
    assert!(plain.contains("\r\n"));
    assert!(plain.contains('<'));
    assert!(plain.contains('>'));
    assert!(plain.contains('@'));
    assert!(plain.contains('\t'));
}

#[test]
fn test_fixture_inside_html() {
    let encoded = read_fixture("hello.vbe");
    let page = format!(
        "<html><body><script language=\"VBScript.Encode\">{}</script></body></html>",
        encoded
    );
    assert_eq!(decode_script(&page).unwrap(), read_fixture("hello.vbs"));
}

#[test]
fn test_stream_matches_file() {
    let bytes = fs::read(fixture("greet.jse")).unwrap();
    let mut cursor = Cursor::new(bytes);
    cursor.seek(SeekFrom::End(0)).unwrap();
    assert_eq!(decode_stream(cursor).unwrap(), read_fixture("greet.js"));
}

#[test]
fn test_byte_order_marks() {
    let encoded = read_fixture("hello.vbe");
    let expected = read_fixture("hello.vbs");

    let mut utf8 = vec![0xEF, 0xBB, 0xBF];
    utf8.extend_from_slice(encoded.as_bytes());
    assert_eq!(decode_bytes(&utf8).unwrap(), expected);

    let mut utf16 = vec![0xFF, 0xFE];
    utf16.extend(encoded.encode_utf16().flat_map(u16::to_le_bytes));
    assert_eq!(decode_bytes(&utf16).unwrap(), expected);
}

#[test]
fn test_decode_twice_is_identical() {
    let encoded = read_fixture("hello.vbe");
    assert_eq!(
        decode_script(&encoded).unwrap(),
        decode_script(&encoded).unwrap()
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = decode_file(dir.path().join("absent.vbe")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
}

#[test]
fn test_file_without_signature() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.vbs");
    fs::write(&path, "MsgBox \"not encoded\"\r\n").unwrap();
    let err = decode_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSignature);
}

#[test]
fn test_blank_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.vbe");
    fs::write(&path, " \r\n\t").unwrap();
    let err = decode_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_directory_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let script_dir = dir.path().join("d.vbe");
    fs::create_dir(&script_dir).unwrap();
    let err = decode_file(&script_dir).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceNotFound);
    assert!(err.to_string().contains("d.vbe"));
}

#[test]
fn test_truncated_container_runs_to_end() {
    // No end signature: the checksum is not removed
    let decoded = decode_script("#@~^DgAAAA==\\ko$K6").unwrap();
    assert_eq!(decoded, "MsgBox");
}
