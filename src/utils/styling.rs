//! Terminal styling utilities for diagnostics

use console::style;

/// Print a per-file skip notice.
///
/// Notices share stdout with the rendered match blocks so a run reads
/// top to bottom; styling is dropped automatically when stdout is piped.
pub fn print_skip(message: &str) {
    println!("{}", style(message).yellow());
}
