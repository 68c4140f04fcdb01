//! Binary entry point for the `lzend` command-line tool.
//!
//! Parses arguments, reads the input, runs the parser or the decoder, and
//! writes the result. Exit codes: `0` success, `1` I/O error, `2` invalid
//! argument (including an internal invariant violation, which is itself a
//! debug-only symptom of a malformed input triggering a fingerprint
//! collision).

use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

use lzend::cli::args::Args;
use lzend::cli::constants::set_display_level;
use lzend::{decode_all, decode_stream, encode_phrases, displaylevel, Error, Parser};

fn read_input(path: &Option<String>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path.as_deref() {
        None | Some("-") => {
            if io::stdin().is_terminal() {
                anyhow::bail!("refusing to read from a console");
            }
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
        }
        Some(p) => {
            File::open(p)
                .with_context(|| format!("opening {p}"))?
                .read_to_end(&mut buf)
                .with_context(|| format!("reading {p}"))?;
        }
    }
    Ok(buf)
}

fn write_output(path: &Option<String>, bytes: &[u8], force_stdout: bool) -> Result<()> {
    match path.as_deref() {
        None | Some("-") => {
            if io::stdout().is_terminal() && !force_stdout {
                anyhow::bail!("refusing to write to console without -c");
            }
            io::stdout().write_all(bytes).context("writing stdout")?;
        }
        Some(p) => {
            File::create(p)
                .with_context(|| format!("creating {p}"))?
                .write_all(bytes)
                .with_context(|| format!("writing {p}"))?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    set_display_level(args.display_level());
    if args.window == 0 {
        return Err(Error::InvalidArgument("window size must be positive").into());
    }
    let input = read_input(&args.input)?;

    if args.decompress {
        displaylevel!(3, "decoding {} bytes\n", input.len());
        let parsing = decode_stream(&mut &input[..]).context("decoding phrase stream")?;
        let text = decode_all(&parsing);
        write_output(&args.output, &text, args.force_stdout)?;
    } else {
        displaylevel!(3, "parsing {} bytes, window = {}\n", input.len(), args.window);
        let parsing = Parser::parse(&input, args.window).context("parsing input")?;
        displaylevel!(2, "{} phrases\n", parsing.size());
        let mut out = Vec::new();
        encode_phrases(&parsing, &mut out).context("encoding phrase stream")?;
        write_output(&args.output, &out, args.force_stdout)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("lzend: {e:#}");
        let code = match e.downcast_ref::<Error>() {
            Some(Error::Io(_)) => 1,
            Some(Error::InvalidArgument(_)) | Some(Error::Internal(_)) => 2,
            None => 1,
        };
        std::process::exit(code);
    }
}
