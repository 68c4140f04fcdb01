//! Bounded-memory LZ-End text compression core.
//!
//! Implements the LZ-End parsing variant of LZ77 — every back-reference
//! phrase ends at the terminal character of some earlier phrase — which
//! keeps random-access decoding local instead of requiring a full
//! reconstruction from the start of the text.

pub mod bitops;
pub mod bitset;
pub mod cli;
pub mod codec;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod fingerprint;
pub mod parser;
pub mod parsing;
pub mod suffix;
pub mod window_index;

pub use codec::{decode_all, decode_stream, encode_phrases};
pub use error::{Error, Result};
pub use parser::Parser;
pub use parsing::{LZEndParsing, Phrase, PhraseId};

/// Crate version string, mirrored into `--version` output.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
