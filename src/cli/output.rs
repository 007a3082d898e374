//! Output formatting utilities for CLI commands

use is_terminal::IsTerminal;
use std::io::{self, Write};

/// Colorize text with ANSI escape codes (only if stderr is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Format error message consistently
pub fn format_error(operation: &str, details: &str) -> String {
    format!("Failed to {}: {}", operation, details)
}

/// Log success message with color (respects quiet flag)
pub fn log_success(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", color("32", "✓"), msg);
    }
}

/// Write text to stdout and flush
pub fn write_stdout(content: &str) -> Result<(), String> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| format_error("write to stdout", &e.to_string()))
}
