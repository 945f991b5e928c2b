//! Logging infrastructure for the sitewire CLI.
//!
//! This module sets up structured logging using the `tracing` ecosystem.
//! Verbosity comes from the global `--verbose` and `--quiet` flags, with
//! the `RUST_LOG` environment variable honored when neither is given.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for sitewire crates
/// 2. `--quiet` flag: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for sitewire crates
pub fn init_logger(verbose: bool, quiet: bool) {
    // Logs go to stderr so `show` output stays pipeable
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter_from_flags(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Build the level filter for the given flag combination.
fn filter_from_flags(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("sitewire_config=debug,sitewire_cli=debug")
    } else if quiet {
        EnvFilter::new("sitewire_config=error,sitewire_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sitewire_config=info,sitewire_cli=info"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is global and can only be installed once per process,
    // so these cover filter selection rather than actual output.

    #[test]
    fn verbose_selects_debug_directives() {
        let filter = filter_from_flags(true, false).to_string();
        assert!(filter.contains("debug"));
    }

    #[test]
    fn quiet_selects_error_directives() {
        let filter = filter_from_flags(false, true).to_string();
        assert!(filter.contains("error"));
    }

    #[test]
    fn verbose_wins_over_quiet() {
        let filter = filter_from_flags(true, true).to_string();
        assert!(filter.contains("debug"));
    }
}
