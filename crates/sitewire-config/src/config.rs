//! Top-level project configuration and profile merging.
//!
//! This module provides the main `SiteConfig` struct and the merge logic
//! that folds a named profile into the base document. For file discovery,
//! see the `discovery` module.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::BuildConfig;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The engine-facing document; defaults to the static-site preset
    /// when the config source has no `build` section.
    #[serde(default = "BuildConfig::static_site")]
    pub build: BuildConfig,

    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::static_site(),
            profiles: HashMap::new(),
            settings: GlobalSettings::default(),
        }
    }
}

/// Partial overrides kept as raw values until a profile is materialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub build: Value,

    #[serde(default)]
    pub settings: Value,
}

impl SiteConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sitewire_config::SiteConfig;
    /// use serde_json::json;
    /// use std::path::Path;
    ///
    /// let value = json!({
    ///     "build": {
    ///         "entry": { "main": "src/index.js" }
    ///     }
    /// });
    ///
    /// let config = SiteConfig::from_value(value).unwrap();
    /// assert_eq!(config.build.entry.get("main"), Some(Path::new("src/index.js")));
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: e.to_string(),
        })
    }

    /// Fold the named profile into the base configuration.
    ///
    /// Objects merge key-wise; arrays and scalars replace wholesale. An
    /// unknown profile name leaves the configuration untouched.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };

        let Some(profile_cfg) = self.profiles.get(name).cloned() else {
            tracing::debug!("profile `{name}` not defined, nothing to merge");
            return Ok(self);
        };

        if !profile_cfg.build.is_null() {
            let mut base = serde_json::to_value(&self.build).map_err(override_error)?;
            merge_values(&mut base, &profile_cfg.build);
            self.build = serde_json::from_value(base).map_err(override_error)?;
        }

        if !profile_cfg.settings.is_null() {
            let mut base = serde_json::to_value(&self.settings).map_err(override_error)?;
            merge_values(&mut base, &profile_cfg.settings);
            self.settings = serde_json::from_value(base).map_err(override_error)?;
        }

        Ok(self)
    }
}

fn override_error(err: serde_json::Error) -> ConfigError {
    ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    }
}

/// Deep merge: objects combine key-wise, arrays and scalars replace.
pub(crate) fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
