//! The tANS entropy decoder.
//!
//! One decoder instance is seeded per decode call and carried across both
//! streams: the state and bit cursor continue from wherever the lo-stream
//! decode left them, while each stream builds its own [`DecodeTable`]
//! because the two alphabets have separate histograms.

use bitstream::BitCursor;

use crate::error::CodecResult;
use crate::table::{DecodeTable, TABLE_SIZE};

/// Resumable tANS decoder state: the ANS state plus the bit cursor.
#[derive(Debug)]
pub(crate) struct EntropyDecoder<'a> {
    cursor: BitCursor<'a>,
    state: u32,
}

impl<'a> EntropyDecoder<'a> {
    /// Creates a decoder over `bitstream`, seeded with the header's
    /// initial state.
    pub fn new(bitstream: &'a [u8], initial_state: u8) -> Self {
        debug_assert!(usize::from(initial_state) < TABLE_SIZE);
        Self {
            cursor: BitCursor::new(bitstream),
            state: u32::from(initial_state),
        }
    }

    /// Decodes one nibble and advances the state machine.
    #[inline]
    fn step(&mut self, table: &DecodeTable) -> CodecResult<u32> {
        let entry = table.entry(self.state);
        let extra = self
            .cursor
            .read_renorm(u32::from(entry.bits), u32::from(entry.mask))?;
        self.state = u32::from(entry.next_base) + extra;
        Ok(u32::from(entry.symbol))
    }

    /// Decodes length/offset bytes: two nibbles per byte, low nibble first.
    pub fn decode_lo(&mut self, table: &DecodeTable, out: &mut [u8]) -> CodecResult<()> {
        for byte in out {
            let low = self.step(table)?;
            let high = self.step(table)?;
            *byte = (low | (high << 4)) as u8;
        }
        Ok(())
    }

    /// Decodes symbol elements: four nibbles per element, low nibble first.
    pub fn decode_syms(&mut self, table: &DecodeTable, out: &mut [u16]) -> CodecResult<()> {
        for element in out {
            let mut value = 0u32;
            for nibble in 0..4 {
                value |= self.step(table)? << (nibble * 4);
            }
            *element = value as u16;
        }
        Ok(())
    }

    /// Decodes delta-coded symbol elements.
    ///
    /// The table encodes deltas, not values: each decoded nibble feeds a
    /// single running accumulator (mod 16) in emission order, and the
    /// accumulator value is what lands in the output.
    pub fn decode_delta_syms(&mut self, table: &DecodeTable, out: &mut [u16]) -> CodecResult<()> {
        let mut accumulator = 0u32;
        for element in out {
            let mut value = 0u32;
            for nibble in 0..4 {
                accumulator = (accumulator + self.step(table)?) & 0xF;
                value |= accumulator << (nibble * 4);
            }
            *element = value as u16;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::SYMBOL_COUNT;

    fn two_symbol_table() -> DecodeTable {
        // f(0) = f(1) = 32: states 0..32 decode 0, states 32..64 decode 1,
        // every state consumes exactly one bit.
        let mut freqs = [0u16; SYMBOL_COUNT];
        freqs[0] = 32;
        freqs[1] = 32;
        DecodeTable::build(&freqs).unwrap()
    }

    fn bitstream(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn zero_bits_hold_state_zero() {
        let table = two_symbol_table();
        let data = bitstream(&[0, 0]);
        let mut decoder = EntropyDecoder::new(&data, 0);
        let mut out = [0xFFu8; 32];
        decoder.decode_lo(&table, &mut out).unwrap();
        assert_eq!(out, [0u8; 32]);
    }

    #[test]
    fn all_one_bits_walk_to_the_top_state() {
        // From state 0, reading 1-bits doubles-and-increments the state:
        // 0,1,3,7,15,31 decode symbol 0, then the machine pins at 63 and
        // decodes symbol 1 forever.
        let table = two_symbol_table();
        let data = bitstream(&[u32::MAX, u32::MAX]);
        let mut decoder = EntropyDecoder::new(&data, 0);
        let mut out = [0u8; 32];
        decoder.decode_lo(&table, &mut out).unwrap();

        let mut expected = [0x11u8; 32];
        expected[0] = 0x00;
        expected[1] = 0x00;
        expected[2] = 0x00;
        expected[3] = 0x11;
        assert_eq!(out, expected);
    }

    #[test]
    fn initial_state_selects_first_symbol() {
        let table = two_symbol_table();
        let data = bitstream(&[0]);
        let mut decoder = EntropyDecoder::new(&data, 32);
        let mut out = [0u16; 2];
        decoder.decode_syms(&table, &mut out).unwrap();
        // State 32 decodes symbol 1 and transitions to state 0 on a 0-bit;
        // everything after is symbol 0.
        assert_eq!(out, [0x0001, 0x0000]);
    }

    #[test]
    fn delta_decode_accumulates_across_elements() {
        let table = two_symbol_table();
        let data = bitstream(&[0]);
        let mut decoder = EntropyDecoder::new(&data, 32);
        let mut out = [0u16; 2];
        decoder.decode_delta_syms(&table, &mut out).unwrap();
        // First nibble is a delta of 1; every later delta is 0, so the
        // accumulator stays at 1 for all eight nibbles.
        assert_eq!(out, [0x1111, 0x1111]);
    }

    #[test]
    fn scalar_decode_is_deterministic() {
        let table = two_symbol_table();
        let data = bitstream(&[0xA5A5_5A5A, 0x0F0F_F0F0]);
        let mut first = [0u16; 8];
        let mut second = [0u16; 8];
        EntropyDecoder::new(&data, 17)
            .decode_syms(&table, &mut first)
            .unwrap();
        EntropyDecoder::new(&data, 17)
            .decode_syms(&table, &mut second)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn truncated_bitstream_is_an_error() {
        let table = two_symbol_table();
        let data = bitstream(&[0]);
        let mut decoder = EntropyDecoder::new(&data, 0);
        // 32 bits available, but 64 nibbles at one bit each are requested.
        let mut out = [0u8; 32];
        assert!(decoder.decode_lo(&table, &mut out).is_err());
    }

    #[test]
    fn state_carries_between_streams() {
        let table = two_symbol_table();
        // Ones-bitstream: after six lo nibbles the state sits at 63 (see
        // all_one_bits_walk_to_the_top_state), so a following sym decode
        // starts from there instead of re-seeding.
        let data = bitstream(&[u32::MAX]);
        let mut decoder = EntropyDecoder::new(&data, 0);
        let mut lo = [0u8; 3];
        decoder.decode_lo(&table, &mut lo).unwrap();
        assert_eq!(lo, [0x00, 0x00, 0x00]);

        let mut syms = [0u16; 1];
        decoder.decode_syms(&table, &mut syms).unwrap();
        assert_eq!(syms[0], 0x1111);
    }
}
