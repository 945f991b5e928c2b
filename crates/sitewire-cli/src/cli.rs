//! Command-line interface definition for the sitewire CLI.
//!
//! This module defines the complete CLI structure using clap v4's derive
//! macros. It provides type-safe argument parsing with clear error messages.
//!
//! # Command Structure
//!
//! - `sitewire show` - Print the assembled build configuration
//! - `sitewire check` - Validate configuration and referenced files

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Sitewire - build-configuration assembly for static sites
#[derive(Parser, Debug)]
#[command(
    name = "sitewire",
    version,
    about = "Assemble and inspect sitewire build configurations",
    long_about = "Sitewire assembles the build configuration a bundling engine consumes:\n\
                  entry points, output naming, module rules with loader chains, plugins,\n\
                  and chunk-splitting policy. Use it to print the document a project\n\
                  resolves to, or to check that everything it references exists."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows detailed information about configuration discovery and
    /// profile merging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only errors will be displayed. Useful for CI environments or when
    /// piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Outputs plain text without ANSI color codes. Also honored via the
    /// NO_COLOR environment variable.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available sitewire subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled build configuration as JSON
    ///
    /// Resolves the project configuration (explicit file, sitewire.toml, or
    /// the "sitewire" field in package.json), applies the requested profile,
    /// and prints the resulting build document to stdout.
    Show(ShowArgs),

    /// Validate configuration and referenced files
    ///
    /// Checks the configuration for schema errors and verifies that every
    /// entry point and page template exists on disk.
    Check(CheckArgs),
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to a configuration file
    ///
    /// Bypasses discovery and loads this file directly. Accepts a
    /// sitewire.toml style document or a package.json with a "sitewire"
    /// field.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile whose overrides should be applied
    ///
    /// Profiles are defined under [profiles.<name>] and merge on top of
    /// the base configuration.
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Print compact single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to a configuration file
    ///
    /// Bypasses discovery and loads this file directly.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile whose overrides should be applied before checking
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Project root entry points and templates are resolved against
    ///
    /// Defaults to the configuration file's directory, or the current
    /// directory when discovery is used.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_profile() {
        let cli = Cli::parse_from(["sitewire", "show", "--profile", "production"]);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.profile.as_deref(), Some("production"));
                assert!(!args.compact);
            }
            _ => panic!("expected show command"),
        }
    }

    #[test]
    fn parses_check_with_config_and_root() {
        let cli = Cli::parse_from([
            "sitewire",
            "check",
            "--config",
            "site/sitewire.toml",
            "--root",
            "site",
        ]);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.config, Some(PathBuf::from("site/sitewire.toml")));
                assert_eq!(args.root, Some(PathBuf::from("site")));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn global_flags_apply_after_the_subcommand() {
        let cli = Cli::parse_from(["sitewire", "show", "--verbose"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["sitewire", "show", "--verbose", "--quiet"]).is_err());
    }
}
