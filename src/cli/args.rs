//! Command-line argument parsing for the `lzend` binary, via `clap`'s
//! derive API (grounded in the example pack's `clap`-based CLIs; the
//! teacher's hand-rolled getopt-style parser is not reused here since the
//! option set is small enough that a derive struct is the idiomatic fit).

use clap::Parser as ClapParser;

use crate::config::WINDOW_SIZE_DEFAULT;

/// Bounded-memory LZ-End text compression core.
#[derive(ClapParser, Debug)]
#[command(name = "lzend", version, about, long_about = None)]
pub struct Args {
    /// Input file. Reads from stdin when omitted or `-`.
    pub input: Option<String>,

    /// Output file. Writes to stdout when omitted or `-`.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Decompress the input instead of compressing it.
    #[arg(short = 'd', long)]
    pub decompress: bool,

    /// Sliding window size in bytes.
    #[arg(short, long, default_value_t = WINDOW_SIZE_DEFAULT)]
    pub window: usize,

    /// Reserved for a future top-k frequent-substring report; currently
    /// accepted and ignored.
    #[arg(short = 'k', long = "top-k")]
    pub top_k: Option<usize>,

    /// Reserved for a future tabular phrase dump (row count); currently
    /// accepted and ignored.
    #[arg(long = "rows")]
    pub rows: Option<usize>,

    /// Reserved for a future tabular phrase dump (column count); currently
    /// accepted and ignored.
    #[arg(long = "cols")]
    pub cols: Option<usize>,

    /// Force writing compressed output to a terminal.
    #[arg(short = 'c', long = "stdout")]
    pub force_stdout: bool,

    /// Increase verbosity; may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Resolves the effective display level from `-v`/`-q`, matching the
    /// teacher's 0..=4 scale (2 is the downgradable default).
    pub fn display_level(&self) -> u32 {
        if self.quiet {
            0
        } else {
            (2 + self.verbose as u32).min(4)
        }
    }
}
