//! Core build document types shared across sitewire crates.

mod entry;
mod helpers;
mod loader;
mod optimization;
mod output;
mod plugin;
mod preset;
mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use entry::EntryMap;
pub use loader::{
    CssLoaderOptions, FileLoaderOptions, GifsicleOptions, HtmlLoaderOptions, ImageminOptions,
    Loader, MozjpegOptions, OptipngOptions, PngquantOptions, PostcssOptions, PostcssPlugin,
    QualityRange, WebpOptions,
};
pub use optimization::{
    CacheGroup, ChunkScope, Minimizer, Optimization, ScriptMinifyOptions, SplitChunks,
};
pub use output::{FilenameTemplate, OutputOptions, TemplateVars};
pub use plugin::{
    CleanOptions, CssExtractOptions, HtmlPageOptions, Plugin, StripUnusedCssOptions,
};
pub use rules::{PathMatcher, Rule, RuleSet};

/// The complete document handed to the bundling engine.
///
/// Top-level shape follows the engine contract: `entry`, `output`,
/// `optimization`, `module.rules` and `plugins`. The document is plain
/// data; assembling it performs no I/O, so the same inputs always produce
/// a deep-equal document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Named entry points the engine starts traversal from
    #[serde(default)]
    pub entry: EntryMap,

    /// Output directory and bundle naming
    #[serde(default)]
    pub output: OutputOptions,

    /// Chunk splitting and minification policy
    #[serde(default)]
    pub optimization: Optimization,

    /// Per-file processing rules
    #[serde(default)]
    pub module: ModuleOptions,

    /// Whole-build transformations, applied in order
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

/// Per-file processing section of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Ordered rules; the first match claims a file
    #[serde(default)]
    pub rules: RuleSet,
}

impl BuildConfig {
    /// Create from serde_json::Value (for programmatic configuration)
    ///
    /// # Example
    ///
    /// ```
    /// use sitewire_config::BuildConfig;
    /// use serde_json::json;
    /// use std::path::Path;
    ///
    /// let value = json!({
    ///     "entry": { "main": "src/index.js" }
    /// });
    ///
    /// let config = BuildConfig::from_value(value).unwrap();
    /// assert_eq!(config.entry.get("main"), Some(Path::new("src/index.js")));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: e.to_string(),
        })
    }

    /// Convert to serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use sitewire_config::BuildConfig;
    ///
    /// let document = BuildConfig::static_site().to_value().unwrap();
    /// assert!(document["entry"].is_object());
    /// ```
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: e.to_string(),
        })
    }
}
