//! tANS decode table construction.
//!
//! The decoder runs over a 64-state table. For a symbol with frequency `f`,
//! its `f` states carry the transitions for `x = f..2f`: renormalizing
//! `x` back into `64..128` determines how many bits the state machine
//! consumes and where the next state window begins. Those per-`x` values
//! depend only on `x`, so they are precomputed once into a spread template
//! and stamped with the symbol at build time.

use crate::error::{CodecError, CodecResult};
use crate::freq::SYMBOL_COUNT;

/// Number of states in the decode table.
pub(crate) const TABLE_SIZE: usize = 64;

/// log2 of the table size; the maximum renormalization width.
const TABLE_LOG: u32 = 6;

/// One decode-table state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TableEntry {
    /// Decoded nibble.
    pub symbol: u8,
    /// Renormalization bits to consume.
    pub bits: u8,
    /// Mask for the consumed bits, `(1 << bits) - 1`.
    pub mask: u8,
    /// Base of the next state window.
    pub next_base: u8,
}

#[derive(Debug, Clone, Copy, Default)]
struct TemplateEntry {
    bits: u8,
    mask: u8,
    next_base: u8,
}

const fn build_template() -> [TemplateEntry; 2 * TABLE_SIZE] {
    let mut template = [TemplateEntry {
        bits: 0,
        mask: 0,
        next_base: 0,
    }; 2 * TABLE_SIZE];
    let mut x = 1u32;
    while x < 2 * TABLE_SIZE as u32 {
        let bits = TABLE_LOG - (31 - x.leading_zeros());
        template[x as usize] = TemplateEntry {
            bits: bits as u8,
            mask: ((1u32 << bits) - 1) as u8,
            next_base: ((x << bits) - TABLE_SIZE as u32) as u8,
        };
        x += 1;
    }
    template
}

/// Spread template indexed by `x`; entry `x` renormalizes into `64..128`
/// after consuming `bits` bits.
static SPREAD_TEMPLATE: [TemplateEntry; 2 * TABLE_SIZE] = build_template();

/// A fully built decode table for one stream.
#[derive(Debug, Clone)]
pub(crate) struct DecodeTable {
    entries: [TableEntry; TABLE_SIZE],
}

impl DecodeTable {
    /// Builds the table from unpacked frequencies.
    ///
    /// The frequencies must sum to exactly the table capacity; anything
    /// else means the asset is corrupt and would walk the state machine
    /// out of bounds.
    pub fn build(freqs: &[u16; SYMBOL_COUNT]) -> CodecResult<Self> {
        let sum: u32 = freqs.iter().map(|&f| u32::from(f)).sum();
        if sum != TABLE_SIZE as u32 {
            return Err(CodecError::CorruptFrequencyTable { sum });
        }

        let mut entries = [TableEntry::default(); TABLE_SIZE];
        let mut pos = 0usize;
        for (symbol, &freq) in freqs.iter().enumerate() {
            let freq = usize::from(freq);
            for x in freq..2 * freq {
                let template = SPREAD_TEMPLATE[x];
                entries[pos] = TableEntry {
                    symbol: symbol as u8,
                    bits: template.bits,
                    mask: template.mask,
                    next_base: template.next_base,
                };
                pos += 1;
            }
        }
        debug_assert_eq!(pos, TABLE_SIZE);
        Ok(Self { entries })
    }

    /// Returns the entry for `state`.
    #[inline]
    pub fn entry(&self, state: u32) -> TableEntry {
        self.entries[state as usize % TABLE_SIZE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freqs_from(pairs: &[(usize, u16)]) -> [u16; SYMBOL_COUNT] {
        let mut freqs = [0u16; SYMBOL_COUNT];
        for &(symbol, freq) in pairs {
            freqs[symbol] = freq;
        }
        freqs
    }

    #[test]
    fn template_renormalizes_into_table_range() {
        for x in 1..2 * TABLE_SIZE as u32 {
            let entry = SPREAD_TEMPLATE[x as usize];
            let renormalized = x << entry.bits;
            assert!(
                (TABLE_SIZE as u32..2 * TABLE_SIZE as u32).contains(&renormalized),
                "x={x} renormalizes to {renormalized}"
            );
            assert_eq!(u32::from(entry.next_base), renormalized - TABLE_SIZE as u32);
            assert_eq!(u16::from(entry.mask), (1u16 << entry.bits) - 1);
        }
    }

    #[test]
    fn build_fills_states_in_symbol_order() {
        let freqs = freqs_from(&[(0, 32), (1, 32)]);
        let table = DecodeTable::build(&freqs).unwrap();
        for state in 0..TABLE_SIZE as u32 {
            let entry = table.entry(state);
            assert_eq!(entry.symbol, u8::from(state >= 32), "state {state}");
            assert_eq!(entry.bits, 1);
            assert_eq!(entry.mask, 1);
        }
    }

    #[test]
    fn every_entry_mask_matches_bits() {
        let freqs = freqs_from(&[(0, 60), (3, 1), (7, 1), (14, 1), (15, 1)]);
        let table = DecodeTable::build(&freqs).unwrap();
        for state in 0..TABLE_SIZE as u32 {
            let entry = table.entry(state);
            assert_eq!(u16::from(entry.mask), (1u16 << entry.bits) - 1);
            assert!(
                u32::from(entry.next_base) + u32::from(entry.mask) < TABLE_SIZE as u32,
                "state {state} can escape the table"
            );
        }
    }

    #[test]
    fn zero_frequency_symbols_contribute_nothing() {
        let freqs = freqs_from(&[(2, 64 - 5), (9, 5)]);
        let table = DecodeTable::build(&freqs).unwrap();
        let symbols: Vec<u8> = (0..TABLE_SIZE as u32).map(|s| table.entry(s).symbol).collect();
        assert_eq!(symbols.iter().filter(|&&s| s == 2).count(), 59);
        assert_eq!(symbols.iter().filter(|&&s| s == 9).count(), 5);
    }

    #[test]
    fn rare_symbol_consumes_full_width() {
        // A frequency-1 symbol always reads 6 bits and can land anywhere.
        let freqs = freqs_from(&[(0, 63), (5, 1)]);
        let table = DecodeTable::build(&freqs).unwrap();
        let entry = table.entry(63);
        assert_eq!(entry.symbol, 5);
        assert_eq!(entry.bits, 6);
        assert_eq!(entry.mask, 63);
        assert_eq!(entry.next_base, 0);
    }

    #[test]
    fn sum_mismatch_is_rejected() {
        let low = freqs_from(&[(0, 63)]);
        assert_eq!(
            DecodeTable::build(&low).unwrap_err(),
            CodecError::CorruptFrequencyTable { sum: 63 }
        );

        let high = freqs_from(&[(0, 63), (1, 63)]);
        assert_eq!(
            DecodeTable::build(&high).unwrap_err(),
            CodecError::CorruptFrequencyTable { sum: 126 }
        );
    }
}
