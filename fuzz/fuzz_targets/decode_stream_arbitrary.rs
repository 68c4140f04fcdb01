#![no_main]
use libfuzzer_sys::fuzz_target;
use lzend::decode_stream;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are never a crash, only a well-formed Result either
    // way: an out-of-range link/length must produce an error, never a
    // panic or out-of-bounds phrase-store access.
    let _ = decode_stream(&mut &data[..]);
});
