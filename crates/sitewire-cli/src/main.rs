//! Main entry point for the sitewire CLI.
//!
//! Handles command-line argument parsing, logging initialization, and
//! command dispatch.

use clap::Parser;
use miette::Result;
use sitewire_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet);
    ui::init_colors(args.no_color);

    // Execute the appropriate command
    let result = match args.command {
        cli::Command::Show(show_args) => commands::show_execute(show_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for terminal rendering
    result.map_err(error::cli_error_to_miette)
}
