//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROMPT: &str = "请输入字符画，输入空行结束：";
pub const HEADER: &str = "转义后的字符画：";

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_artquote"))
}

/// Run the binary with `input` piped to stdin and wait for it to exit.
pub fn run_with_stdin(input: &str) -> Output {
    let mut child = Command::new(get_binary_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    {
        let mut stdin = child.stdin.take().expect("Failed to open stdin");
        // The binary may stop reading at the empty line and exit early
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait on child")
}

/// Stdout lines that follow the prompt and header block.
pub fn fragment_lines(output: &Output) -> Vec<String> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], PROMPT);
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], HEADER);
    assert_eq!(lines[3], "");
    lines[4..].iter().map(|s| (*s).to_string()).collect()
}
