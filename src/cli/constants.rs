//! CLI display-level infrastructure.
//!
//! A crate-level atomic
//! verbosity level plus a family of `display*!` macros, so verbosity can be
//! threaded through the whole crate without passing a logger handle
//! everywhere.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "lzend";

// 0 = no output; 1 = errors only; 2 = normal (downgradable); 3 = non-downgradable; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout — equivalent to C `DISPLAYOUT(...)`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr — equivalent to C `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output — only active in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}
