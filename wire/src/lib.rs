//! Header layout and mode dispatch for the smol codec.
//!
//! This crate handles the binary header format: mode tags, the packed size
//! fields, and the LZ77 plausibility probe. It does not know how streams
//! are decoded, only how the header describes them.
//!
//! # Design Principles
//!
//! - **Stable wire format** - The 8-byte header layout is fixed; the LZ77
//!   word stays bit-compatible with the GBA BIOS header.
//! - **Tagged parsing** - The header union is resolved into an enum at the
//!   boundary; nothing downstream reinterprets raw words.
//! - **No decode knowledge** - This crate handles layout, not entropy
//!   coding.

mod error;
mod header;
mod mode;

pub use error::{HeaderError, WireResult};
pub use header::{
    parse_header, sniff_lz77, Header, SmolHeader, TilemapHeader, HEADER_SIZE,
    MAX_DECOMPRESSED_BYTES, TILE_SIZE_4BPP,
};
pub use mode::CompressionMode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = HEADER_SIZE;
        let _ = TILE_SIZE_4BPP;
        let _ = MAX_DECOMPRESSED_BYTES;
        let _ = CompressionMode::BaseOnly;
        let _: WireResult<()> = Ok(());
    }

    #[test]
    fn header_size_is_two_words() {
        assert_eq!(HEADER_SIZE, 8);
    }

    #[test]
    fn parse_and_mode_integration() {
        let header = SmolHeader {
            mode: CompressionMode::EncodeLo,
            lo_size: 10,
            sym_size: 20,
            bitstream_size: 3,
            initial_state: 5,
        };
        let Header::Smol(parsed) = parse_header(&header.encode()).unwrap() else {
            panic!("expected smol header");
        };
        assert!(parsed.mode.encodes_lo());
        assert!(!parsed.mode.encodes_syms());
    }
}
