//! Decode entry points
//!
//! Every input shape converges on [`decode_script`]:
//!
//! ```text
//! text -> envelope::unwrap -> escape::expand -> substitution::decode -> text
//! ```

use std::fs;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::envelope;
use crate::error::{Error, Result};
use crate::escape;
use crate::source;
use crate::substitution;

/// Decode an encoded script held in memory.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for empty or whitespace-only input,
/// [`Error::MissingSignature`] when the envelope cannot be found.
pub fn decode_script(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(Error::InvalidArgument("text"));
    }

    let tokens = envelope::unwrap(text)?;
    let expanded = escape::expand(tokens);
    Ok(substitution::decode(expanded).into_iter().collect())
}

/// Decode raw bytes, detecting the text encoding first.
pub fn decode_bytes(bytes: &[u8]) -> Result<String> {
    decode_script(&source::to_text(bytes))
}

/// Decode a seekable source. The source is rewound before reading, so a
/// partially consumed buffer or file handle is decoded from its start.
pub fn decode_stream<R: Read + Seek>(mut source: R) -> Result<String> {
    source.seek(SeekFrom::Start(0))?;
    decode_reader(source)
}

/// Decode a forward-only source such as standard input.
pub fn decode_reader<R: Read>(mut source: R) -> Result<String> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    decode_bytes(&bytes)
}

/// Decode the file at `path`.
pub fn decode_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::InvalidArgument("path"));
    }

    // A directory is not a script file
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::SourceNotFound(path.to_path_buf()),
        _ if path.is_dir() => Error::SourceNotFound(path.to_path_buf()),
        _ => Error::SourceUnreadable(e),
    })?;

    decode_bytes(&bytes)
}
