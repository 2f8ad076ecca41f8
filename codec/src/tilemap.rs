//! Tilemap delta reconstruction.
//!
//! Tilemap assets store map entries as differences from the previous
//! entry, which clusters the entropy coder's input around small values.
//! After instruction decoding, a wrapping prefix sum over the leading
//! entries restores the absolute tile numbers. Entries past the tilemap
//! region (if any) are left untouched.

/// Applies a wrapping prefix sum in place over `entries`.
pub(crate) fn apply_delta(entries: &mut [u16]) {
    let mut previous = 0u16;
    for entry in entries {
        previous = previous.wrapping_add(*entry);
        *entry = previous;
    }
}
