//! # artquote
//!
//! Turns character art typed on stdin into a chain of string-literal fragments
//! (`"line\n" +` ... `""`) that can be pasted into source code.

pub mod cli;
pub mod collector;
pub mod escape;
pub mod render;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
