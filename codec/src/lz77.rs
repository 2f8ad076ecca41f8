//! LZ77 fallback decoder.
//!
//! Assets too irregular for the nibble entropy path ship in the classic
//! handheld BIOS LZ77 layout: a flag byte introduces eight blocks, MSB
//! first; a clear bit is one literal byte, a set bit is a two-byte
//! back-reference with a 4-bit length (biased by 3) and a 12-bit
//! displacement (biased by 1).

use crate::error::{CodecError, CodecResult};

/// Decompresses the LZ77 payload in `src` (the bytes after the size
/// header) into `dest`, which must be sized to the header's decompressed
/// size.
pub(crate) fn decompress_lz77(src: &[u8], dest: &mut [u8]) -> CodecResult<()> {
    let mut src_pos = 0usize;
    let mut dest_pos = 0usize;

    let next = |pos: &mut usize| -> CodecResult<u8> {
        let byte = src.get(*pos).copied().ok_or(CodecError::TruncatedSource {
            needed: *pos + 1,
            available: src.len(),
        })?;
        *pos += 1;
        Ok(byte)
    };

    while dest_pos < dest.len() {
        let flags = next(&mut src_pos)?;
        for block in 0..8 {
            if dest_pos == dest.len() {
                break;
            }
            if flags & (0x80 >> block) == 0 {
                dest[dest_pos] = next(&mut src_pos)?;
                dest_pos += 1;
            } else {
                let first = next(&mut src_pos)?;
                let second = next(&mut src_pos)?;
                let length = usize::from(first >> 4) + 3;
                let displacement = (usize::from(first & 0x0F) << 8) | usize::from(second);
                let back = displacement + 1;
                if back > dest_pos {
                    return Err(CodecError::BackReferenceOutOfRange {
                        offset: back,
                        written: dest_pos,
                    });
                }
                if dest_pos + length > dest.len() {
                    return Err(CodecError::OutputTooSmall {
                        needed: dest_pos + length,
                        available: dest.len(),
                    });
                }
                for _ in 0..length {
                    dest[dest_pos] = dest[dest_pos - back];
                    dest_pos += 1;
                }
            }
        }
    }
    Ok(())
}
