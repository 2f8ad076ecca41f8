//! Reusable decode scratch space.
//!
//! A decode needs working room for the decoded lo stream, the decoded
//! symbol stream, and (for the LZ77 path) a byte-level staging buffer.
//! Callers decoding many assets keep one [`DecodeScratch`] alive and hand
//! it to [`decompress_with_scratch`](crate::decompress_with_scratch) so
//! the allocations amortize to zero after the largest asset.

/// Working buffers reused across decode calls.
#[derive(Debug, Default)]
pub struct DecodeScratch {
    lo: Vec<u8>,
    syms: Vec<u16>,
    bytes: Vec<u8>,
}

impl DecodeScratch {
    /// Creates empty scratch space; buffers grow on first use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lo buffer resized to `len` bytes.
    pub(crate) fn lo_buffer(&mut self, len: usize) -> &mut [u8] {
        self.lo.clear();
        self.lo.resize(len, 0);
        &mut self.lo
    }

    /// Returns the symbol buffer resized to `len` elements.
    pub(crate) fn sym_buffer(&mut self, len: usize) -> &mut [u16] {
        self.syms.clear();
        self.syms.resize(len, 0);
        &mut self.syms
    }

    /// Returns lo and symbol buffers together, for decodes that need both
    /// borrowed at once.
    pub(crate) fn lo_and_sym_buffers(
        &mut self,
        lo_len: usize,
        sym_len: usize,
    ) -> (&mut [u8], &mut [u16]) {
        self.lo.clear();
        self.lo.resize(lo_len, 0);
        self.syms.clear();
        self.syms.resize(sym_len, 0);
        (&mut self.lo, &mut self.syms)
    }

    /// Returns the byte staging buffer resized to `len` bytes.
    pub(crate) fn byte_buffer(&mut self, len: usize) -> &mut [u8] {
        self.bytes.clear();
        self.bytes.resize(len, 0);
        &mut self.bytes
    }
}
