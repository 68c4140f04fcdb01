//! Error types for the LZ-End core.
//!
//! Mirrors this crate's lineage: a small `Copy`able error enum with a hand
//! written `Display`/`Error` impl, consumed by the CLI layer through
//! `anyhow::Context` rather than boxed at the library boundary.

use std::fmt;

/// Errors surfaced by the library crate.
///
/// `Internal` corresponds to an internal invariant violation: it is
/// only ever constructed from a `debug_assert!`-guarded path and never
/// returned by release builds, which silently decline the optimisation
/// instead (see the absorb veto policy in `parser`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Reading input or writing output failed. The `io::Error`'s `kind()`
    /// is preserved; the message itself is not (keeps this type `Copy`).
    Io(std::io::ErrorKind),
    /// A caller-supplied argument was out of range (non-positive window
    /// size, empty input file name, ...).
    InvalidArgument(&'static str),
    /// A marked-LCP candidate failed fingerprint re-confirmation outside
    /// the assumed collision bound. Debug builds only.
    Internal(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(kind) => write!(f, "I/O error: {kind}"),
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Error::Internal(msg) => write!(f, "internal invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.kind())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_displays_kind() {
        let e = Error::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(e.to_string().contains("I/O error"));
    }

    #[test]
    fn invalid_argument_displays_message() {
        let e = Error::InvalidArgument("window size must be positive");
        assert!(e.to_string().contains("window size must be positive"));
    }

    #[test]
    fn errors_are_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Error>();
    }
}
