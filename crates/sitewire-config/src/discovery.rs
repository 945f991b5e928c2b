//! File-based config discovery for CLI use
//!
//! Handles finding and loading sitewire configuration files from the
//! filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::{ConfigError, Result};

/// File-based configuration discovery
///
/// Searches for sitewire configuration files in conventional locations and
/// loads them. This is primarily for CLI use - library users should use
/// `SiteConfig::from_value()` directly.
///
/// # Example
///
/// ```no_run
/// use sitewire_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: sitewire.toml
    /// 2. package.json (sitewire field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("sitewire.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        // package.json with sitewire field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("sitewire").is_some() && !parsed["sitewire"].is_null() {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<SiteConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_path(path)
    }

    /// Load config with profile merging
    pub fn load_with_profile(&self, profile: &str) -> Result<SiteConfig> {
        let config = self.load()?;
        config.materialize_profile(Some(profile))
    }
}

/// Load config from an explicit file path
///
/// `package.json` is read through its `sitewire` field; anything else is
/// parsed as TOML.
pub fn load_path(path: impl AsRef<Path>) -> Result<SiteConfig> {
    let path = path.as_ref();
    tracing::debug!("loading configuration from {}", path.display());

    // Handle package.json specially
    if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
        return load_package_json(path);
    }

    let content = fs::read_to_string(path)?;

    let toml_val: toml::Value = toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: format!("Invalid TOML syntax: {}", e),
    })?;

    let value = serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
        field: "toml".to_string(),
        hint: format!("TOML to JSON conversion failed: {}", e),
    })?;

    SiteConfig::from_value(value)
}

fn load_package_json(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;

    let parsed: Value = serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
        field: "package.json".to_string(),
        hint: format!("Invalid JSON: {}", e),
    })?;

    let site_value = parsed
        .get("sitewire")
        .ok_or_else(|| ConfigError::InvalidValue {
            field: "sitewire".to_string(),
            hint: "Add a 'sitewire' field to your package.json".to_string(),
        })?;

    if site_value.is_null() {
        return Err(ConfigError::InvalidValue {
            field: "sitewire".to_string(),
            hint: "The 'sitewire' field cannot be null".to_string(),
        });
    }

    SiteConfig::from_value(site_value.clone())
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use sitewire_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<SiteConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config with profile (convenience function)
///
/// # Example
///
/// ```no_run
/// use sitewire_config::discover_with_profile;
///
/// let config = discover_with_profile("production").unwrap();
/// ```
pub fn discover_with_profile(profile: &str) -> Result<SiteConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
