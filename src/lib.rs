//! VBE Decoder - Visual Basic Encoded / JScript Encoded script decoder
//!
//! Recovers the plaintext of scripts obfuscated by the Windows Script
//! Encoder (`.vbe`, `.jse`, and `<script language="VBScript.Encode">`
//! blocks). Decoding runs in three stages:
//!
//! - `envelope`: strip the `#@~^ ... ^#~@` container
//! - `escape`: expand the `@`-escapes for markup and line breaks
//! - `substitution`: undo the position-dependent character substitution
//!
//! All stages are pure; the tables are immutable statics, so decoding can
//! run on any number of threads at once.
//!
//! ```
//! let script = vbe_decoder::decode_script("#@~^DgAAAA==\\ko$K6,JC\u{7f}V^GJqAQAAA==^#~@")?;
//! assert_eq!(script, "MsgBox \"Hello\"");
//! # Ok::<(), vbe_decoder::Error>(())
//! ```

pub mod app;
mod decoder;
pub mod envelope;
mod error;
pub mod escape;
pub mod source;
pub mod substitution;
pub mod tables;

pub use decoder::{decode_bytes, decode_file, decode_reader, decode_script, decode_stream};
pub use error::{Error, ErrorKind, Result};
