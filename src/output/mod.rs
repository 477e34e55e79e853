//! Terminal output styling for plansum

use owo_colors::OwoColorize;

/// Print an error message with a red X
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.bright_white());
}
