//! Terminal UI helpers for status messages and color handling.
//!
//! Status messages go to stderr so stdout stays reserved for documents.
//! Color handling respects the `--no-color` flag plus the `NO_COLOR` and
//! `FORCE_COLOR` environment variables, falling back to terminal
//! capability detection.

use console::style;

/// Initialize color support based on flags and environment.
///
/// Should be called early in the application lifecycle, before any status
/// messages are printed.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_colors();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Check if colored output should be enabled.
///
/// # Environment Variables
///
/// - `NO_COLOR`: if set, disables colors
/// - `FORCE_COLOR`: if set, forces colors even in non-TTY
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("success message");
        info("info message");
        warning("warning message");
        error("error message");
    }
}
