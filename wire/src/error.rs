//! Error types for header parsing.

use std::fmt;

use crate::mode::CompressionMode;

/// Result type for header parsing.
pub type WireResult<T> = Result<T, HeaderError>;

/// Fatal header errors.
///
/// An asset whose header fails to parse is non-decodable; no partial output
/// is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HeaderError {
    /// Source is too small to contain the 8-byte header.
    TooSmall { actual: usize, required: usize },

    /// Mode tag is not a known compression mode.
    UnrecognizedMode { raw: u8 },

    /// Mode tag is recognized but reserved for a format extension that is
    /// not implemented (frame containers).
    UnsupportedMode { mode: CompressionMode },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { actual, required } => {
                write!(
                    f,
                    "source too small for header: {actual} bytes, need at least {required}"
                )
            }
            Self::UnrecognizedMode { raw } => {
                write!(f, "unrecognized mode tag 0x{raw:02X}")
            }
            Self::UnsupportedMode { mode } => {
                write!(f, "mode {mode:?} is reserved and not supported")
            }
        }
    }
}

impl std::error::Error for HeaderError {}
