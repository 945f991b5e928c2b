//! Error handling for the sitewire CLI.
//!
//! Command implementations return [`CliError`], which wraps the domain
//! errors from `sitewire-config` and adds CLI-specific failures. Before an
//! error reaches the user, [`cli_error_to_miette`] turns it into a
//! diagnostic report with an actionable hint where one exists.

use miette::Report;
use sitewire_config::ConfigError;
use thiserror::Error;

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Top-level CLI error type.
///
/// Domain errors convert automatically via `#[from]`, so command code can
/// use `?` on anything the configuration layer returns.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization errors while printing documents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from filesystem access
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert a CLI error to a miette report for terminal rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{err}"),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NotFound => miette::miette!(
            help = "create a sitewire.toml or add a \"sitewire\" field to package.json",
            "no configuration found"
        ),
        ConfigError::EntryNotFound { name, path } => miette::miette!(
            help = "check the paths under [build.entry]",
            "entry `{name}` not found: {}",
            path.display()
        ),
        ConfigError::TemplateNotFound { path } => miette::miette!(
            help = "check the template paths of your html-page plugins",
            "page template not found: {}",
            path.display()
        ),
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!(help = hint, "schema validation failed: {message}"),
        _ => miette::miette!("{err}"),
    }
}
