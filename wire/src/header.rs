//! Asset header layout: parsing, encoding, and format sniffing.

use crate::error::{HeaderError, WireResult};
use crate::mode::CompressionMode;

/// Header size in bytes (two 32-bit words).
pub const HEADER_SIZE: usize = 8;

/// Size of one 4bpp tile in bytes; decompressed sprite data is always a
/// whole number of tiles.
pub const TILE_SIZE_4BPP: u32 = 32;

/// Largest decompressed asset the pipeline produces.
pub const MAX_DECOMPRESSED_BYTES: u32 = 0x4000;

/// Parsed asset header.
///
/// The on-wire header is a union over the three layouts; parsing resolves
/// it into a tagged variant at the boundary so nothing downstream aliases
/// raw words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// GBA BIOS LZ77 data. The compressed stream begins at byte 4 of the
    /// source (the BIOS header is a single word).
    Lz77 {
        /// Decompressed size in bytes, from the 24-bit BIOS size field.
        decompressed_size: u32,
    },
    /// A smol-compressed sprite (modes 0..=5).
    Smol(SmolHeader),
    /// A smol tilemap with delta-coded tile indices.
    Tilemap(TilemapHeader),
}

/// Header for smol sprite data (modes 0..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmolHeader {
    /// Which streams are entropy-coded.
    pub mode: CompressionMode,
    /// Length of the length/offset instruction stream in bytes.
    pub lo_size: u16,
    /// Length of the symbol stream in 16-bit elements.
    pub sym_size: u16,
    /// Length of the tANS bitstream in 32-bit words.
    pub bitstream_size: u32,
    /// Seed for the tANS state machine (always below the table size).
    pub initial_state: u8,
}

/// Header for smol tilemap data (mode 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilemapHeader {
    /// Length of the length/offset instruction stream in bytes.
    pub tile_number_size: u16,
    /// Length of the symbol stream in 16-bit elements.
    pub sym_size: u16,
    /// Decompressed tilemap size in bytes.
    pub tilemap_size: u32,
}

const INITIAL_STATE_BITS: u32 = 6;
const BITSTREAM_SIZE_BITS: u32 = 18;
const TILEMAP_SIZE_BITS: u32 = 24;

/// Parses the 8-byte header at the start of `src`.
pub fn parse_header(src: &[u8]) -> WireResult<Header> {
    if src.len() < HEADER_SIZE {
        return Err(HeaderError::TooSmall {
            actual: src.len(),
            required: HEADER_SIZE,
        });
    }
    let word0 = read_word(src, 0);
    let word1 = read_word(src, 4);

    let raw = (word0 & 0xFF) as u8;
    let mode = CompressionMode::from_raw(raw).ok_or(HeaderError::UnrecognizedMode { raw })?;

    match mode {
        CompressionMode::Lz77 => Ok(Header::Lz77 {
            decompressed_size: word0 >> 8,
        }),
        CompressionMode::Tilemap => Ok(Header::Tilemap(TilemapHeader {
            tile_number_size: (word1 & 0xFFFF) as u16,
            sym_size: (word1 >> 16) as u16,
            tilemap_size: word0 >> 8,
        })),
        CompressionMode::FrameContainer => Err(HeaderError::UnsupportedMode { mode }),
        _ => Ok(Header::Smol(SmolHeader {
            mode,
            lo_size: (word1 & 0xFFFF) as u16,
            sym_size: (word1 >> 16) as u16,
            bitstream_size: word0 >> (8 + INITIAL_STATE_BITS),
            initial_state: ((word0 >> 8) & ((1 << INITIAL_STATE_BITS) - 1)) as u8,
        })),
    }
}

/// Checks whether `data` plausibly holds LZ77-compressed data.
///
/// Mirrors the BIOS header check: type byte 0x10 followed by a 24-bit
/// decompressed size within `[min_size, max_size]`. Returns the
/// decompressed size on success.
#[must_use]
pub fn sniff_lz77(data: &[u8], min_size: u32, max_size: u32) -> Option<u32> {
    if data.len() < 4 || data[0] != CompressionMode::Lz77.raw() {
        return None;
    }
    let size = u32::from(data[1]) | (u32::from(data[2]) << 8) | (u32::from(data[3]) << 16);
    if size >= min_size && size <= max_size {
        Some(size)
    } else {
        None
    }
}

impl SmolHeader {
    /// Encodes the header to its 8-byte wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        debug_assert!(u32::from(self.initial_state) < (1 << INITIAL_STATE_BITS));
        debug_assert!(self.bitstream_size < (1 << BITSTREAM_SIZE_BITS));
        let word0 = u32::from(self.mode.raw())
            | (u32::from(self.initial_state) << 8)
            | (self.bitstream_size << (8 + INITIAL_STATE_BITS));
        let word1 = u32::from(self.lo_size) | (u32::from(self.sym_size) << 16);
        pack_words(word0, word1)
    }
}

impl TilemapHeader {
    /// Encodes the header to its 8-byte wire form.
    #[must_use]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        debug_assert!(self.tilemap_size < (1 << TILEMAP_SIZE_BITS));
        let word0 = u32::from(CompressionMode::Tilemap.raw()) | (self.tilemap_size << 8);
        let word1 = u32::from(self.tile_number_size) | (u32::from(self.sym_size) << 16);
        pack_words(word0, word1)
    }
}

fn read_word(src: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&src[offset..offset + 4]);
    u32::from_le_bytes(word)
}

fn pack_words(word0: u32, word1: u32) -> [u8; HEADER_SIZE] {
    let mut out = [0u8; HEADER_SIZE];
    out[..4].copy_from_slice(&word0.to_le_bytes());
    out[4..].copy_from_slice(&word1.to_le_bytes());
    out
}
