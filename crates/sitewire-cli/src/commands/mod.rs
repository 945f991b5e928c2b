//! Command implementations for the sitewire CLI.
//!
//! - [`show`] - Print the assembled build configuration
//! - [`check`] - Validate configuration and referenced files
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed command arguments and returns a Result.

pub mod check;
pub mod show;

use std::path::{Path, PathBuf};

use sitewire_config::{ConfigDiscovery, ConfigError, SiteConfig, load_path};

use crate::error::Result;
use crate::ui;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use show::execute as show_execute;

/// Resolve the configuration a command operates on.
///
/// An explicit `--config` path bypasses discovery. Otherwise the current
/// directory is searched for a sitewire.toml or a package.json "sitewire"
/// field, and a missing configuration falls back to the built-in document
/// with a warning. Profile overrides are applied last.
pub(crate) fn load_config(path: Option<&Path>, profile: Option<&str>) -> Result<SiteConfig> {
    let config = match path {
        Some(path) => load_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match ConfigDiscovery::new(&cwd).load() {
                Ok(config) => config,
                Err(ConfigError::NotFound) => {
                    ui::warning("No configuration found, using the built-in document");
                    SiteConfig::default()
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    Ok(config.materialize_profile(profile)?)
}

/// Resolve the directory filesystem checks run against.
///
/// An explicit `--root` wins, then the configuration file's directory,
/// then the current directory.
pub(crate) fn project_root(config_path: Option<&Path>, root: Option<&Path>) -> Result<PathBuf> {
    if let Some(root) = root {
        return Ok(root.to_path_buf());
    }

    match config_path.and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Ok(std::env::current_dir()?),
    }
}
