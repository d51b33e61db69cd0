//! Line-oriented prompt helpers for the menu shell.

use std::io::{self, Write};

/// Prints a prompt and reads one line, without the trailing newline.
pub fn prompt(label: &str) -> String {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim_end_matches(['\n', '\r']).to_string()
}

/// Like [`prompt`], but empty input becomes `None`.
pub fn prompt_optional(label: &str) -> Option<String> {
    let value = prompt(label);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
