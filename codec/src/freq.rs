//! Packed frequency table unpacking.
//!
//! Each entropy-coded stream carries a 3-word histogram of its 16 nibble
//! symbols. Five 6-bit fields per word cover slots 0..15; the top 2 bits of
//! every word accumulate into slot 15, which the encoder uses as a larger
//! catch-all bucket.

/// Number of symbols in the nibble alphabet.
pub(crate) const SYMBOL_COUNT: usize = 16;

/// Number of packed 32-bit words per frequency table.
pub(crate) const PACKED_FREQ_WORDS: usize = 3;

const PACKED_FREQ_MASK: u32 = 0x3F;
const PARTIAL_FREQ_MASK: u32 = 0xC000_0000;

/// Expands a packed 3-word histogram into 16 symbol frequencies.
pub(crate) fn unpack_frequencies(packed: [u32; PACKED_FREQ_WORDS]) -> [u16; SYMBOL_COUNT] {
    let mut freqs = [0u16; SYMBOL_COUNT];
    for (w, &word) in packed.iter().enumerate() {
        for field in 0..5 {
            freqs[w * 5 + field] = ((word >> (6 * field)) & PACKED_FREQ_MASK) as u16;
        }
        freqs[15] += ((word & PARTIAL_FREQ_MASK) >> (30 - 2 * w)) as u16;
    }
    freqs
}
