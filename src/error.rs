//! Error types for decoding operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Decoder error type
#[derive(Error, Debug)]
pub enum Error {
    /// Input text, stream content or path was empty or whitespace-only
    #[error("Invalid argument: `{0}` is empty or whitespace")]
    InvalidArgument(&'static str),

    /// The container signature could not be located
    #[error("Missing VBE signature.")]
    MissingSignature,

    /// The named file does not exist
    #[error("File \"{}\" not found.", .0.display())]
    SourceNotFound(PathBuf),

    /// The source could not be read
    #[error("Can't read the source: {0}")]
    SourceUnreadable(#[from] io::Error),
}

/// Fieldless discriminant of [`Error`], for callers that only care about
/// which kind of failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    MissingSignature,
    SourceNotFound,
    SourceUnreadable,
}

impl Error {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::MissingSignature => ErrorKind::MissingSignature,
            Error::SourceNotFound(_) => ErrorKind::SourceNotFound,
            Error::SourceUnreadable(_) => ErrorKind::SourceUnreadable,
        }
    }
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, Error>;
