//! Character escaping for embedding a line inside a double-quoted literal.

/// Escape a single raw line.
///
/// Every `\` becomes `\\`, then every `"` becomes `\"`. Backslashes go first so
/// the backslash introduced in front of a quote is not doubled again.
///
/// This is a single pass: escaping an already escaped line escapes it again.
#[must_use]
pub fn escape_line(line: &str) -> String {
    line.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape every line, keeping order.
#[must_use]
pub fn escape_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| escape_line(line)).collect()
}
