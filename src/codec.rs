//! Wire format: a flat stream of phrases, each encoded as a one-byte flag
//! followed by either a literal byte or a pair of LEB128 varints (link, len)
//! and a terminal literal byte.
//!
//! Grounded in this crate's general varint handling conventions,
//! adapted here to the two-phrase-kind codec this format actually needs.

use std::io::{self, Read, Write};

use crate::error::{Error, Result};
use crate::parsing::{LZEndParsing, PhraseId};

const FLAG_LITERAL: u8 = 0;
const FLAG_REFERENCE: u8 = 1;

fn write_varint(out: &mut impl Write, mut v: u64) -> io::Result<()> {
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            out.write_all(&[byte])?;
            return Ok(());
        }
        out.write_all(&[byte | 0x80])?;
    }
}

fn read_varint(input: &mut impl Read) -> Result<u64> {
    let mut result: u64 = 0;
    let mut shift = 0u32;
    loop {
        let mut byte = [0u8; 1];
        input.read_exact(&mut byte).map_err(Error::from)?;
        let b = byte[0];
        result |= ((b & 0x7f) as u64) << shift;
        if b & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
        if shift >= 64 {
            return Err(Error::InvalidArgument("varint too long"));
        }
    }
}

/// Encodes `parsing` as a flat phrase stream to `out`.
pub fn encode_phrases(parsing: &LZEndParsing, out: &mut impl Write) -> Result<()> {
    for id in 1..=parsing.size() as PhraseId {
        let p = parsing.phrase(id);
        if p.len == 1 && p.link == 0 {
            out.write_all(&[FLAG_LITERAL])?;
            out.write_all(&[p.last])?;
        } else {
            out.write_all(&[FLAG_REFERENCE])?;
            write_varint(out, p.link as u64)?;
            write_varint(out, p.len as u64)?;
            out.write_all(&[p.last])?;
        }
    }
    Ok(())
}

/// Decodes a flat phrase stream from `input` into a fresh parsing.
pub fn decode_stream(input: &mut impl Read) -> Result<LZEndParsing> {
    let mut store = LZEndParsing::new();
    loop {
        let mut flag = [0u8; 1];
        match input.read(&mut flag) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::from(e)),
        }
        match flag[0] {
            FLAG_LITERAL => {
                let mut lit = [0u8; 1];
                input.read_exact(&mut lit).map_err(Error::from)?;
                store.append(0, 1, lit[0]);
            }
            FLAG_REFERENCE => {
                let link = read_varint(input)?;
                let len = read_varint(input)?;
                if link > store.size() as u64 {
                    return Err(Error::InvalidArgument("phrase link out of range"));
                }
                if len == 0 || len > u32::MAX as u64 {
                    return Err(Error::InvalidArgument("phrase length out of range"));
                }
                let mut lit = [0u8; 1];
                input.read_exact(&mut lit).map_err(Error::from)?;
                store.append(link as PhraseId, len as u32, lit[0]);
            }
            _ => return Err(Error::InvalidArgument("unknown phrase flag")),
        }
    }
    Ok(store)
}

/// Reconstructs the original text from a parsing by decoding the whole text
/// in reverse from the last phrase, then reversing the result once.
pub fn decode_all(parsing: &LZEndParsing) -> Vec<u8> {
    let total = parsing.total_len();
    if total == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(total as usize);
    parsing.decode_reverse_from_end_of(parsing.size() as PhraseId, total, |b| {
        out.push(b);
        true
    });
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    #[test]
    fn wire_round_trip() {
        let text = b"ababbbabbabbbabbaa";
        let parsing = Parser::parse(text, 8).unwrap();
        let mut buf = Vec::new();
        encode_phrases(&parsing, &mut buf).unwrap();
        let decoded = decode_stream(&mut &buf[..]).unwrap();
        assert_eq!(decoded.size(), parsing.size());
        assert_eq!(decode_all(&decoded), text);
    }

    #[test]
    fn truncated_stream_errors() {
        let text = b"abcabcabcabc";
        let parsing = Parser::parse(text, 4).unwrap();
        let mut buf = Vec::new();
        encode_phrases(&parsing, &mut buf).unwrap();
        buf.truncate(buf.len() - 1);
        let result = decode_stream(&mut &buf[..]);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_link_errors() {
        let mut buf = Vec::new();
        buf.push(FLAG_REFERENCE);
        write_varint(&mut buf, 99).unwrap();
        write_varint(&mut buf, 3).unwrap();
        buf.push(b'x');
        let result = decode_stream(&mut &buf[..]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn empty_text_round_trip() {
        let parsing = Parser::parse(b"", 8).unwrap();
        let mut buf = Vec::new();
        encode_phrases(&parsing, &mut buf).unwrap();
        assert!(buf.is_empty());
        let decoded = decode_stream(&mut &buf[..]).unwrap();
        assert_eq!(decoded.size(), 0);
    }
}
