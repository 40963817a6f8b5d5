//! Rendering escaped lines as concatenated string-literal fragments.

use crate::escape::escape_line;
use std::io::{self, Write};

/// Prompt shown before any input is read.
pub const PROMPT: &str = "请输入字符画，输入空行结束：";

/// Header printed between the collected input and the fragments.
///
/// The surrounding newlines are part of the header, so it shows up as an
/// empty line, the text, and another empty line.
pub const HEADER: &str = "\n转义后的字符画：\n";

/// Final fragment that closes the `+` chain.
pub const TERMINATOR: &str = "\"\"";

/// Wrap an already escaped line as `"<escaped>\n" +`.
///
/// The `\n` is the two characters backslash and `n`, left for the target
/// language to interpret.
#[must_use]
pub fn fragment(escaped: &str) -> String {
    format!("\"{escaped}\\n\" +")
}

/// Escape and format every raw line, then append the terminator.
///
/// Always returns `lines.len() + 1` entries.
#[must_use]
pub fn format_lines(lines: &[String]) -> Vec<String> {
    let mut out: Vec<String> = lines
        .iter()
        .map(|line| fragment(&escape_line(line)))
        .collect();
    out.push(TERMINATOR.to_string());
    out
}

/// Write the prompt and flush it so it is visible before input blocks.
///
/// # Errors
///
/// Returns `Err` if writing to or flushing `out` fails.
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{PROMPT}")?;
    out.flush()
}

/// Write the header followed by one fragment per line and the terminator.
///
/// # Errors
///
/// Returns `Err` if writing to or flushing `out` fails.
pub fn render<W: Write>(lines: &[String], out: &mut W) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for line in format_lines(lines) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
