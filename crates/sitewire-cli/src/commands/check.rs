//! Check command implementation.
//!
//! Validates configuration shape and verifies that the files it references
//! exist, without invoking the bundling engine.

use std::path::Path;

use sitewire_config::{ConfigError, Plugin, SiteConfig, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::{load_config, project_root};
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the configuration and apply the requested profile
/// 2. Validate the document shape (entries, rules, plugins, cache groups)
/// 3. Check that every entry point exists
/// 4. Check that every html-page template exists
///
/// # Errors
///
/// Returns the first schema or filesystem failure encountered.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = load_config(args.config.as_deref(), args.profile.as_deref())?;
    let root = project_root(args.config.as_deref(), args.root.as_deref())?;
    tracing::debug!("resolving referenced files against {}", root.display());

    validate_schema(&config.build)?;
    ui::success("Configuration shape is valid");

    check_entries(&config, &root)?;
    check_templates(&config, &root)?;

    ui::success("All checks passed!");
    Ok(())
}

/// Check that every entry point resolves to an existing file.
fn check_entries(config: &SiteConfig, root: &Path) -> Result<()> {
    ui::info("Checking entry points...");

    for (name, source) in config.build.entry.iter() {
        let path = root.join(source);
        if path.exists() {
            ui::success(&format!("  {name}: {} exists", source.display()));
        } else {
            ui::error(&format!("  {name}: {} is missing", source.display()));
            return Err(CliError::Config(ConfigError::EntryNotFound {
                name: name.to_string(),
                path,
            }));
        }
    }

    Ok(())
}

/// Check that every html-page plugin references an existing template.
fn check_templates(config: &SiteConfig, root: &Path) -> Result<()> {
    let pages: Vec<_> = config
        .build
        .plugins
        .iter()
        .filter_map(|plugin| match plugin {
            Plugin::HtmlPage(options) => Some(options),
            _ => None,
        })
        .collect();

    if pages.is_empty() {
        return Ok(());
    }

    ui::info("Checking page templates...");

    for page in pages {
        let path = root.join(&page.template);
        if path.exists() {
            ui::success(&format!("  {} exists", page.template.display()));
        } else {
            ui::error(&format!("  {} is missing", page.template.display()));
            return Err(CliError::Config(ConfigError::TemplateNotFound { path }));
        }
    }

    Ok(())
}
