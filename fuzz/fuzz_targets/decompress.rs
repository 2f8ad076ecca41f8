#![no_main]

use codec::{decompress_with_scratch, DecodeScratch};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Large enough for any header the size fields can describe.
    let mut dest = vec![0u16; 0x1_0000];
    let mut scratch = DecodeScratch::new();
    let _ = decompress_with_scratch(data, &mut dest, &mut scratch);
});
