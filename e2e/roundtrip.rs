//! End-to-end round-trip coverage: parse arbitrary text into an LZ-End
//! phrase store, encode it to the wire format, decode it back, and check
//! the reconstructed text matches byte-for-byte.

use lzend::{decode_all, decode_stream, encode_phrases, Parser};

fn roundtrip_via_wire(text: &[u8], window: usize) -> Vec<u8> {
    let parsing = Parser::parse(text, window).expect("parse should succeed");
    let mut buf = Vec::new();
    encode_phrases(&parsing, &mut buf).expect("encode should succeed");
    let decoded = decode_stream(&mut &buf[..]).expect("decode should succeed");
    decode_all(&decoded)
}

#[test]
fn empty_input_round_trips() {
    assert_eq!(roundtrip_via_wire(b"", 32), b"");
}

#[test]
fn single_character_round_trips() {
    assert_eq!(roundtrip_via_wire(b"x", 32), b"x");
}

#[test]
fn highly_repetitive_text_round_trips() {
    let text = "the quick brown fox jumps over the lazy dog. ".repeat(50);
    assert_eq!(roundtrip_via_wire(text.as_bytes(), 256), text.as_bytes());
}

#[test]
fn low_redundancy_text_round_trips() {
    let mut state: u32 = 12345;
    let mut text = Vec::with_capacity(3000);
    for _ in 0..3000 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        text.push((state % 251) as u8);
    }
    assert_eq!(roundtrip_via_wire(&text, 512), text);
}

#[test]
fn text_longer_than_several_windows_round_trips() {
    let unit = b"abcdefghijklmnopqrstuvwxyz";
    let mut text = Vec::new();
    for _ in 0..400 {
        text.extend_from_slice(unit);
    }
    assert_eq!(roundtrip_via_wire(&text, 64), text);
}
