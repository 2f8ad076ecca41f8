//! Resumable bit cursor for tANS renormalization reads.

use crate::error::{BitError, BitResult};

/// A bit-level cursor over a stream of little-endian 32-bit words.
///
/// Bits are consumed LSB-first within each word. The cursor is built for
/// tANS state transitions: each decoded symbol consumes a small variable
/// number of bits (at most 6 for a 64-state table), and a read may straddle
/// a word boundary, in which case the missing high bits are folded in from
/// the low end of the next word.
///
/// All word fetches are bounds-checked and return errors on failure. The
/// cursor never panics on malformed input.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    word_index: usize,
    bit_index: u32,
}

impl<'a> BitCursor<'a> {
    /// Creates a cursor at the start of `data`.
    ///
    /// Trailing bytes that do not form a whole 32-bit word are ignored; the
    /// wire format keeps bitstreams word-aligned.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            word_index: 0,
            bit_index: 0,
        }
    }

    /// Returns the index of the word currently being consumed.
    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.word_index
    }

    /// Returns the bit position within the current word (0..32).
    #[must_use]
    pub const fn bit_index(&self) -> u32 {
        self.bit_index
    }

    /// Returns the number of whole words in the stream.
    #[must_use]
    pub const fn words_available(&self) -> usize {
        self.data.len() / 4
    }

    fn word(&self, index: usize) -> BitResult<u32> {
        let start = index * 4;
        match self.data.get(start..start + 4) {
            Some(bytes) => {
                let mut word = [0u8; 4];
                word.copy_from_slice(bytes);
                Ok(u32::from_le_bytes(word))
            }
            None => Err(BitError::EndOfBuffer {
                word_index: index,
                words_available: self.words_available(),
            }),
        }
    }

    /// Reads `width` renormalization bits, masked with `mask`.
    ///
    /// `mask` must equal `(1 << width) - 1`; decode tables store both so the
    /// hot path avoids recomputing it. A `width` of zero consumes nothing
    /// and never touches the stream.
    ///
    /// When the read crosses a word boundary, the bits available in the
    /// current word form the low part of the result and the low
    /// `bit_index` bits of the next word are folded in at
    /// `width - bit_index`, matching the encoder's LSB-first packing.
    pub fn read_renorm(&mut self, width: u32, mask: u32) -> BitResult<u32> {
        debug_assert!(width <= 31);
        debug_assert_eq!(mask, (1u32 << width) - 1);

        if width == 0 {
            return Ok(0);
        }

        let current = self.word(self.word_index)?;
        let mut value = (current >> self.bit_index) & mask;
        self.bit_index += width;
        if self.bit_index >= 32 {
            self.word_index += 1;
            self.bit_index -= 32;
            if self.bit_index > 0 {
                let next = self.word(self.word_index)?;
                value += (next & ((1u32 << self.bit_index) - 1)) << (width - self.bit_index);
            }
        }
        Ok(value)
    }
}
