//! Top-level decode dispatch.
//!
//! Source layout after the 8-byte header, in order:
//!
//! 1. packed lo frequencies (3 words, only if the lo stream is coded)
//! 2. packed symbol frequencies (3 words, only if the symbol stream is
//!    coded)
//! 3. the shared tANS bitstream (`bitstream_size` words)
//! 4. the raw symbol stream (only if not coded)
//! 5. the raw lo stream (only if not coded)
//!
//! Tilemap assets carry no entropy coding: the raw symbol stream starts
//! the payload and the lo stream follows at the next word boundary.

use wire::{Header, SmolHeader, TilemapHeader, HEADER_SIZE};

use crate::entropy::EntropyDecoder;
use crate::error::{CodecError, CodecResult};
use crate::freq::{unpack_frequencies, PACKED_FREQ_WORDS};
use crate::instructions::decode_instructions;
use crate::lz77::decompress_lz77;
use crate::scratch::DecodeScratch;
use crate::table::DecodeTable;
use crate::tilemap::apply_delta;

/// Decompresses the asset in `src` into `dest`.
///
/// Returns the number of 16-bit elements written. Allocates fresh working
/// buffers; batch callers should prefer [`decompress_with_scratch`].
pub fn decompress(src: &[u8], dest: &mut [u16]) -> CodecResult<usize> {
    decompress_with_scratch(src, dest, &mut DecodeScratch::new())
}

/// Decompresses the asset in `src` into `dest`, reusing `scratch` for
/// working buffers.
pub fn decompress_with_scratch(
    src: &[u8],
    dest: &mut [u16],
    scratch: &mut DecodeScratch,
) -> CodecResult<usize> {
    match wire::parse_header(src)? {
        Header::Lz77 { decompressed_size } => {
            // The BIOS header is a single word; payload starts at byte 4.
            decode_lz77_asset(&src[4..], decompressed_size, dest, scratch)
        }
        Header::Smol(header) => decode_smol(&header, &src[HEADER_SIZE..], dest, scratch),
        Header::Tilemap(header) => decode_tilemap(&header, &src[HEADER_SIZE..], dest, scratch),
    }
}

fn decode_smol(
    header: &SmolHeader,
    payload: &[u8],
    dest: &mut [u16],
    scratch: &mut DecodeScratch,
) -> CodecResult<usize> {
    // Degenerate assets decode to nothing; the payload is not inspected.
    if header.lo_size == 0 || header.sym_size == 0 {
        return Ok(0);
    }
    let lo_len = usize::from(header.lo_size);
    let sym_len = usize::from(header.sym_size);

    let mut offset = 0usize;
    let lo_freqs = if header.mode.encodes_lo() {
        Some(read_freq_words(payload, &mut offset)?)
    } else {
        None
    };
    let sym_freqs = if header.mode.encodes_syms() {
        Some(read_freq_words(payload, &mut offset)?)
    } else {
        None
    };

    // Fully raw assets ignore the bitstream field; a stale size must not
    // shift the raw tails.
    let bitstream = if header.mode.encodes_lo() || header.mode.encodes_syms() {
        let bitstream_bytes = header.bitstream_size as usize * 4;
        let words = slice_payload(payload, offset, bitstream_bytes)?;
        offset += bitstream_bytes;
        words
    } else {
        &[]
    };

    let (lo_buf, sym_buf) = scratch.lo_and_sym_buffers(lo_len, sym_len);

    // Both coded streams share one bitstream cursor and one state machine,
    // lo first.
    let mut decoder = EntropyDecoder::new(bitstream, header.initial_state);
    if let Some(words) = lo_freqs {
        let table = DecodeTable::build(&unpack_frequencies(words))?;
        decoder.decode_lo(&table, lo_buf)?;
    }
    if let Some(words) = sym_freqs {
        let table = DecodeTable::build(&unpack_frequencies(words))?;
        if header.mode.delta_syms() {
            decoder.decode_delta_syms(&table, sym_buf)?;
        } else {
            decoder.decode_syms(&table, sym_buf)?;
        }
    }

    if !header.mode.encodes_syms() {
        let raw = slice_payload(payload, offset, sym_len * 2)?;
        offset += sym_len * 2;
        for (element, pair) in sym_buf.iter_mut().zip(raw.chunks_exact(2)) {
            *element = u16::from_le_bytes([pair[0], pair[1]]);
        }
    }
    if !header.mode.encodes_lo() {
        lo_buf.copy_from_slice(slice_payload(payload, offset, lo_len)?);
    }

    decode_instructions(lo_buf, sym_buf, dest)
}

fn decode_tilemap(
    header: &TilemapHeader,
    payload: &[u8],
    dest: &mut [u16],
    scratch: &mut DecodeScratch,
) -> CodecResult<usize> {
    if header.tile_number_size == 0 || header.sym_size == 0 {
        return Ok(0);
    }
    let lo_len = usize::from(header.tile_number_size);
    let sym_len = usize::from(header.sym_size);
    // The lo stream starts on the next word boundary after the symbols.
    let lo_offset = sym_len * 2 + 2 * (sym_len % 2);

    let (lo_buf, sym_buf) = scratch.lo_and_sym_buffers(lo_len, sym_len);
    let raw_syms = slice_payload(payload, 0, sym_len * 2)?;
    for (element, pair) in sym_buf.iter_mut().zip(raw_syms.chunks_exact(2)) {
        *element = u16::from_le_bytes([pair[0], pair[1]]);
    }
    lo_buf.copy_from_slice(slice_payload(payload, lo_offset, lo_len)?);

    let written = decode_instructions(lo_buf, sym_buf, dest)?;

    // Tile numbers are delta-coded; restore absolute values over the map
    // region (trailing attribute data, if any, is already absolute).
    let delta_len = (header.tilemap_size / 2) as usize;
    apply_delta(&mut dest[..delta_len.min(written)]);
    Ok(written)
}

fn decode_lz77_asset(
    payload: &[u8],
    decompressed_size: u32,
    dest: &mut [u16],
    scratch: &mut DecodeScratch,
) -> CodecResult<usize> {
    let size = decompressed_size as usize;
    let elements = size.div_ceil(2);
    if elements > dest.len() {
        return Err(CodecError::OutputTooSmall {
            needed: elements,
            available: dest.len(),
        });
    }

    let bytes = scratch.byte_buffer(size);
    decompress_lz77(payload, bytes)?;
    for (element, pair) in dest.iter_mut().zip(bytes.chunks(2)) {
        *element = if pair.len() == 2 {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from(pair[0])
        };
    }
    Ok(elements)
}

fn read_freq_words(payload: &[u8], offset: &mut usize) -> CodecResult<[u32; PACKED_FREQ_WORDS]> {
    let bytes = slice_payload(payload, *offset, PACKED_FREQ_WORDS * 4)?;
    *offset += PACKED_FREQ_WORDS * 4;
    let mut words = [0u32; PACKED_FREQ_WORDS];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}

fn slice_payload(payload: &[u8], offset: usize, len: usize) -> CodecResult<&[u8]> {
    payload
        .get(offset..offset + len)
        .ok_or(CodecError::TruncatedSource {
            needed: offset + len,
            available: payload.len(),
        })
}
