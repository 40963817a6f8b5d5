//! # artquote
//!
//! Paste character art, finish with an empty line (or Ctrl+D), and get it back
//! as escaped string fragments ready for concatenation in source code.
//!
//! ## Usage
//!
//! - Interactive: `artquote`
//! - From a file: `artquote < art.txt`

fn main() {
    artquote::cli::run_cli();
}
