//! Copy/literal instruction decoding.
//!
//! The lo stream is a sequence of variable-length tokens that rebuild the
//! output from the symbol stream and from already-written output:
//!
//! * length != 0, any offset: emit one literal element from the symbol
//!   stream, then copy `length` elements starting `offset` back from the
//!   write position. The copy runs forward element by element, so an
//!   offset smaller than the length repeats recent output (offset 1 is a
//!   run of the literal just written).
//! * length == 0: take `offset` elements verbatim from the symbol stream.
//!
//! Token bytes use a 7-bit continuation scheme: if bit 7 of the first
//! byte is set, a second byte extends the length; the offset byte that
//! follows extends the same way.

use crate::error::{CodecError, CodecResult};

/// Cursor over the lo stream's token bytes.
struct TokenReader<'a> {
    lo: &'a [u8],
    pos: usize,
}

impl<'a> TokenReader<'a> {
    fn new(lo: &'a [u8]) -> Self {
        Self { lo, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.lo.len()
    }

    fn next_byte(&mut self) -> CodecResult<u8> {
        let byte = self
            .lo
            .get(self.pos)
            .copied()
            .ok_or(CodecError::TruncatedSource {
                needed: self.pos + 1,
                available: self.lo.len(),
            })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a 7-bit quantity with one optional extension byte.
    fn next_extendable(&mut self) -> CodecResult<usize> {
        let first = self.next_byte()?;
        let mut value = usize::from(first & 0x7F);
        if first & 0x80 != 0 {
            value |= usize::from(self.next_byte()?) << 7;
        }
        Ok(value)
    }
}

/// Replays the token stream in `lo` against the symbol stream `syms`,
/// writing decoded elements to `dest`. Returns the number of elements
/// written.
pub(crate) fn decode_instructions(
    lo: &[u8],
    syms: &[u16],
    dest: &mut [u16],
) -> CodecResult<usize> {
    let mut reader = TokenReader::new(lo);
    let mut sym_pos = 0usize;
    let mut written = 0usize;

    while !reader.is_empty() {
        let length = reader.next_extendable()?;
        let offset = reader.next_extendable()?;

        if length == 0 {
            // Literal run straight from the symbol stream.
            take_literals(syms, &mut sym_pos, dest, &mut written, offset)?;
        } else {
            take_literals(syms, &mut sym_pos, dest, &mut written, 1)?;
            copy_back(dest, &mut written, offset, length)?;
        }
    }

    Ok(written)
}

fn take_literals(
    syms: &[u16],
    sym_pos: &mut usize,
    dest: &mut [u16],
    written: &mut usize,
    count: usize,
) -> CodecResult<()> {
    let source = syms
        .get(*sym_pos..*sym_pos + count)
        .ok_or(CodecError::SymbolsExhausted {
            requested: count,
            available: syms.len() - *sym_pos,
        })?;
    let available = dest.len();
    let target = dest
        .get_mut(*written..*written + count)
        .ok_or(CodecError::OutputTooSmall {
            needed: *written + count,
            available,
        })?;
    target.copy_from_slice(source);
    *sym_pos += count;
    *written += count;
    Ok(())
}

fn copy_back(
    dest: &mut [u16],
    written: &mut usize,
    offset: usize,
    length: usize,
) -> CodecResult<()> {
    if offset == 0 || offset > *written {
        return Err(CodecError::BackReferenceOutOfRange {
            offset,
            written: *written,
        });
    }
    if *written + length > dest.len() {
        return Err(CodecError::OutputTooSmall {
            needed: *written + length,
            available: dest.len(),
        });
    }
    // Forward element-wise copy; source and destination may overlap when
    // the offset is shorter than the length.
    for _ in 0..length {
        dest[*written] = dest[*written - offset];
        *written += 1;
    }
    Ok(())
}
