//! Terminal output
//!
//! stdout carries nothing but the version line; everything else goes to
//! stderr. Colours switch off when stderr is not a terminal.

use console::style;

/// Print the computed version, the only line written to stdout.
pub fn print_version(version: &str) {
    println!("{}", version);
}

/// Format a recoverable failure. The line always starts with `ERROR:`.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().for_stderr(), message)
}

/// Report a recoverable failure
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Report an environment failure as-is
pub fn display_fatal(message: &str) {
    eprintln!("{}", message);
}
