//! Command-line surface for the `lzend` binary.

pub mod args;
pub mod constants;
