//! Error types for decode operations.

use std::fmt;

/// Result type for decode operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decompressing an asset.
///
/// All errors are local to one decode call; a failed decode yields no
/// usable output for that asset and nothing to recover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Header error.
    Header(wire::HeaderError),

    /// Bitstream error.
    Bitstream(bitstream::BitError),

    /// Unpacked symbol frequencies do not sum to the decode-table capacity.
    CorruptFrequencyTable { sum: u32 },

    /// Source data is shorter than the layout the header declares.
    TruncatedSource { needed: usize, available: usize },

    /// An instruction consumed more symbol elements than the stream holds.
    SymbolsExhausted { requested: usize, available: usize },

    /// A copy instruction referenced output that has not been written, or
    /// carried a zero offset.
    BackReferenceOutOfRange { offset: usize, written: usize },

    /// Destination buffer cannot hold the decoded output.
    OutputTooSmall { needed: usize, available: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(e) => write!(f, "header error: {e}"),
            Self::Bitstream(e) => write!(f, "bitstream error: {e}"),
            Self::CorruptFrequencyTable { sum } => {
                write!(
                    f,
                    "corrupt frequency table: frequencies sum to {sum}, table capacity is 64"
                )
            }
            Self::TruncatedSource { needed, available } => {
                write!(
                    f,
                    "source truncated: layout needs {needed} bytes, have {available}"
                )
            }
            Self::SymbolsExhausted {
                requested,
                available,
            } => {
                write!(
                    f,
                    "symbol stream exhausted: instruction wants {requested} elements, {available} left"
                )
            }
            Self::BackReferenceOutOfRange { offset, written } => {
                write!(
                    f,
                    "back-reference offset {offset} invalid with {written} elements written"
                )
            }
            Self::OutputTooSmall { needed, available } => {
                write!(f, "output too small: need {needed} elements, have {available}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Header(e) => Some(e),
            Self::Bitstream(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wire::HeaderError> for CodecError {
    fn from(err: wire::HeaderError) -> Self {
        Self::Header(err)
    }
}

impl From<bitstream::BitError> for CodecError {
    fn from(err: bitstream::BitError) -> Self {
        Self::Bitstream(err)
    }
}
