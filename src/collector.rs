//! Reading raw lines of character art until an empty line or end of input.

use std::io::BufRead;

/// A group of raw lines, in the order they were entered.
pub type Lines = Vec<String>;

/// Remove one trailing line terminator (`\n` or `\r\n`).
fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Collect lines from `reader` until an empty line or end of input.
///
/// The empty line that ends collection is consumed but not kept. Reaching end
/// of input without one is a normal stop, and whatever was gathered is
/// returned. A read error is reported on stderr and also ends collection with
/// the lines gathered so far.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn collect_lines<R: BufRead>(mut reader: R) -> Lines {
    let mut lines = Lines::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let raw = String::from_utf8_lossy(&buf);
                let line = strip_terminator(&raw);
                if line.is_empty() {
                    break;
                }
                lines.push(line.to_string());
            }
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }
    }

    lines
}
