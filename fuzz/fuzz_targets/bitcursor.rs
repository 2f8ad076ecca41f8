#![no_main]

use bitstream::BitCursor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = BitCursor::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of reads.
    while idx < data.len() && idx < 1024 {
        let width = u32::from(data[idx] % 7);
        idx += 1;
        let mask = (1u32 << width) - 1;
        if cursor.read_renorm(width, mask).is_err() {
            break;
        }
    }
});
