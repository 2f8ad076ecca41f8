//! Error types for bit cursor operations.

use std::fmt;

/// Result type for bit cursor operations.
pub type BitResult<T> = Result<T, BitError>;

/// Errors that can occur while reading the tANS bitstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitError {
    /// Attempted to read past the end of the bitstream.
    EndOfBuffer {
        /// Word index that was requested.
        word_index: usize,
        /// Number of whole words available.
        words_available: usize,
    },
}

impl fmt::Display for BitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer {
                word_index,
                words_available,
            } => {
                write!(
                    f,
                    "attempted to read word {word_index} but only {words_available} words available"
                )
            }
        }
    }
}

impl std::error::Error for BitError {}
