//! Decoder for smol-compressed sprite, tilemap, and LZ77 assets.
//!
//! Smol is a two-stream format: a tANS-coded (or raw) instruction stream
//! of length/offset tokens replays literal and copy operations against a
//! tANS-coded (or raw) stream of 16-bit symbol elements. Tilemap assets
//! add a delta post-pass over the decoded tile numbers, and legacy assets
//! fall back to the handheld BIOS LZ77 layout.
//!
//! # Usage
//!
//! ```
//! use codec::{decompress, DecodeScratch};
//!
//! # fn main() -> Result<(), codec::CodecError> {
//! # let asset: Vec<u8> = {
//! #     let mut src = wire::SmolHeader {
//! #         mode: wire::CompressionMode::BaseOnly,
//! #         lo_size: 2,
//! #         sym_size: 1,
//! #         bitstream_size: 0,
//! #         initial_state: 0,
//! #     }
//! #     .encode()
//! #     .to_vec();
//! #     src.extend_from_slice(&[0x34, 0x12, 0x00, 0x01]);
//! #     src
//! # };
//! let mut pixels = [0u16; 64];
//! let written = decompress(&asset, &mut pixels)?;
//! assert_eq!(&pixels[..written], &[0x1234]);
//! # Ok(())
//! # }
//! ```
//!
//! Batch decoding reuses buffers through
//! [`decompress_with_scratch`] and a long-lived [`DecodeScratch`].

mod decompress;
mod entropy;
mod error;
mod freq;
mod instructions;
mod lz77;
mod scratch;
mod table;
mod tilemap;

pub use decompress::{decompress, decompress_with_scratch};
pub use error::{CodecError, CodecResult};
pub use scratch::DecodeScratch;

// Header types surface in the public API (mode inspection, asset tooling).
pub use wire::{
    parse_header, sniff_lz77, CompressionMode, Header, HeaderError, SmolHeader, TilemapHeader,
    HEADER_SIZE, MAX_DECOMPRESSED_BYTES, TILE_SIZE_4BPP,
};
