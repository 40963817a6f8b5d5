//! CLI module containing the main entry point logic.
//!
//! Kept separate from main.rs so the binary stays a one-line wrapper.

use crate::{collector, fatal_error, render};
use clap::Parser as ClapParser;
use std::io::{self, Write};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for artquote. There are none beyond `--help` and `--version`.
#[derive(ClapParser)]
#[command(name = "artquote")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Escape character art from stdin into string-literal fragments",
    long_about = "Reads lines until an empty line or end of input, then prints each one \
                  as a quoted fragment ending in `\\n\" +`, followed by a closing `\"\"`."
)]
struct Cli {}

/// Prompt, collect from stdin, then print the fragments to stdout.
///
/// # Errors
///
/// Returns `Err` if writing to stdout fails.
pub fn run<W: Write>(input: impl io::BufRead, out: &mut W) -> io::Result<()> {
    render::write_prompt(out)?;
    let lines = collector::collect_lines(input);
    render::render(&lines, out)
}

/// Main CLI logic.
pub fn run_cli() {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(stdin.lock(), &mut out) {
        fatal_error(&format!("Error writing output: {e}"));
    }
}
