#![no_main]
use libfuzzer_sys::fuzz_target;
use lzend::{decode_all, Parser};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // Derive a small, nonzero window size from the input itself so the
    // fuzzer explores window-rotation edge cases as well as content.
    let window = (data[0] as usize % 64) + 1;
    let parsing = match Parser::parse(data, window) {
        Ok(p) => p,
        Err(_) => return,
    };
    let recovered = decode_all(&parsing);
    assert_eq!(recovered, data, "round trip mismatch with window={window}");
});
