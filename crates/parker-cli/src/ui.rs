//! Console styling for diagnostics.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Format a rejected input line for stderr.
#[must_use]
pub fn format_rejection(line_no: usize, line: &str, reason: &str) -> String {
    let location = format!("line {line_no}: `{}`", line.trim());
    if is_color_disabled() {
        format!("[ERROR] {location}: {reason}")
    } else {
        format!(
            "{} {}: {reason}",
            style("[ERROR]").red().bold(),
            style(location).dim()
        )
    }
}

/// Print a rejected input line to stderr.
pub fn print_rejection(line_no: usize, line: &str, reason: &str) {
    eprintln!("{}", format_rejection(line_no, line, reason));
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Print a fatal message for a broken internal invariant.
pub fn print_fatal(text: &str) {
    if is_color_disabled() {
        eprintln!("[FATAL] {text}");
    } else {
        eprintln!("{} {text}", style("[FATAL]").red().bold().reverse());
    }
}
