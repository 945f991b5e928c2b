//! Show command implementation.
//!
//! Prints the assembled build configuration as JSON on stdout, suitable
//! for piping into the bundling engine or into `jq`.

use crate::cli::ShowArgs;
use crate::commands::load_config;
use crate::error::Result;

/// Execute the show command.
///
/// Loads the configuration, applies the requested profile, and prints the
/// resulting build document to stdout. Status output stays on stderr.
///
/// # Errors
///
/// Returns errors for unreadable or malformed configuration files.
pub fn execute(args: ShowArgs) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.profile.as_deref())?;

    let rendered = if args.compact {
        serde_json::to_string(&config.build)?
    } else {
        serde_json::to_string_pretty(&config.build)?
    };
    println!("{rendered}");

    Ok(())
}
