//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use).

use std::path::Path;

use crate::build::{BuildConfig, Loader, PathMatcher, Plugin};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a build document
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this for library use cases where source files are in-memory or
/// virtual.
///
/// # Example
///
/// ```
/// use sitewire_config::{BuildConfig, SchemaValidator, ConfigValidator};
///
/// let config = BuildConfig::static_site();
/// let validator = SchemaValidator;
/// validator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // Entry validation
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, source) in config.entry.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "entry names cannot be empty".to_string(),
                    hint: Some("Give every entry a non-empty bundle name".to_string()),
                });
            }
            if source.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("entry `{}` has an empty source path", name),
                    hint: Some("Point each entry at a source file".to_string()),
                });
            }
        }

        // Several entries writing through one pattern must not collide
        if config.entry.len() > 1 && !config.output.filename.has_token("[name]") {
            return Err(ConfigError::SchemaValidation {
                message: format!(
                    "output filename `{}` is shared by {} entries but has no [name] token",
                    config.output.filename,
                    config.entry.len()
                ),
                hint: Some("Add a [name] token so each bundle gets its own file".to_string()),
            });
        }

        // Rule validation
        for (index, rule) in config.module.rules.iter().enumerate() {
            if rule.loaders.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule {} has no transformation steps", index),
                    hint: Some("Give each rule at least one loader".to_string()),
                });
            }

            validate_matcher(&format!("rule {}", index), &rule.test)?;
            if let Some(exclude) = &rule.exclude {
                validate_matcher(&format!("rule {} exclude", index), exclude)?;
            }

            for step in &rule.loaders {
                validate_loader(index, step)?;
            }
        }

        // Cache group validation
        for (key, group) in &config.optimization.split_chunks.cache_groups {
            if let Some(test) = &group.test {
                validate_matcher(&format!("cache group `{}`", key), test)?;
            }
            if group.min_chunks == 0 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group `{}` has min_chunks = 0", key),
                    hint: Some("min_chunks counts sharing chunks and must be at least 1".to_string()),
                });
            }
            if group.max_initial_requests == 0 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("cache group `{}` has max_initial_requests = 0", key),
                    hint: Some("max_initial_requests must be at least 1".to_string()),
                });
            }
        }

        // Plugin validation
        for plugin in &config.plugins {
            validate_plugin(plugin)?;
        }

        Ok(())
    }
}

fn validate_matcher(context: &str, matcher: &PathMatcher) -> Result<()> {
    match matcher {
        PathMatcher::Extension { any_of, .. } => {
            if any_of.is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("{} matches no extensions", context),
                    hint: Some("List at least one extension".to_string()),
                });
            }
            for extension in any_of {
                if extension.is_empty() || extension.starts_with('.') {
                    return Err(ConfigError::SchemaValidation {
                        message: format!("{} has invalid extension `{}`", context, extension),
                        hint: Some("Write extensions without a leading dot, e.g. \"js\"".to_string()),
                    });
                }
            }
        }
        PathMatcher::Segment { name } => {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("{} has invalid segment `{}`", context, name),
                    hint: Some("Segments are single directory names, e.g. \"node_modules\"".to_string()),
                });
            }
        }
    }
    Ok(())
}

fn validate_loader(rule_index: usize, step: &Loader) -> Result<()> {
    match step {
        Loader::Postcss(options) if options.plugins.is_empty() => {
            Err(ConfigError::SchemaValidation {
                message: format!("rule {} runs postcss with no passes", rule_index),
                hint: Some("List the PostCSS passes to apply, or drop the step".to_string()),
            })
        }
        Loader::Imagemin(options) => {
            if options.mozjpeg.quality > 100 || options.webp.quality > 100 {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule {} has an image quality above 100", rule_index),
                    hint: Some("Qualities are percentages, 0-100".to_string()),
                });
            }
            let range = options.pngquant.quality;
            if range.min > range.max || range.max > 100 {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "rule {} has an invalid pngquant quality range {}-{}",
                        rule_index, range.min, range.max
                    ),
                    hint: Some("Use min <= max with both in 0-100".to_string()),
                });
            }
            if options.pngquant.speed == 0 || options.pngquant.speed > 11 {
                return Err(ConfigError::SchemaValidation {
                    message: format!(
                        "rule {} has pngquant speed {}",
                        rule_index, options.pngquant.speed
                    ),
                    hint: Some("Speed ranges from 1 (slowest) to 11".to_string()),
                });
            }
            Ok(())
        }
        Loader::File(options) if options.output_path.as_os_str().is_empty() => {
            Err(ConfigError::SchemaValidation {
                message: format!("rule {} emits files into an empty directory path", rule_index),
                hint: Some("Set output_path to a directory under the output root".to_string()),
            })
        }
        _ => Ok(()),
    }
}

fn validate_plugin(plugin: &Plugin) -> Result<()> {
    match plugin {
        Plugin::Clean(options) if options.paths.is_empty() => {
            Err(ConfigError::SchemaValidation {
                message: "clean plugin has no paths to remove".to_string(),
                hint: Some("List the directories to clean, or drop the plugin".to_string()),
            })
        }
        Plugin::HtmlPage(options) => {
            if options.template.as_os_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "html-page plugin has an empty template path".to_string(),
                    hint: Some("Point the plugin at a source template".to_string()),
                });
            }
            if options.filename.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "html-page plugin has an empty output filename".to_string(),
                    hint: Some("Name the generated page, e.g. \"index.html\"".to_string()),
                });
            }
            Ok(())
        }
        Plugin::StripUnusedCss(options) if options.content.is_empty() => {
            Err(ConfigError::SchemaValidation {
                message: "strip-unused-css plugin scans no content".to_string(),
                hint: Some("List the content globs whose selectors keep styles alive".to_string()),
            })
        }
        _ => Ok(()),
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that entry sources and page templates exist on disk.
///
/// # Example
///
/// ```no_run
/// use sitewire_config::{BuildConfig, FsValidator, ConfigValidator};
///
/// let config = BuildConfig::static_site();
/// let validator = FsValidator::new(".");
/// validator.validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        // Then validate filesystem references
        for (name, source) in config.entry.iter() {
            let path = self.root.join(source);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound {
                    name: name.to_string(),
                    path,
                });
            }
        }

        for plugin in &config.plugins {
            if let Plugin::HtmlPage(options) = plugin {
                let path = self.root.join(&options.template);
                if !path.exists() {
                    return Err(ConfigError::TemplateNotFound { path });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
///
/// # Example
///
/// ```
/// use sitewire_config::{BuildConfig, validate_schema};
///
/// validate_schema(&BuildConfig::static_site()).unwrap();
/// ```
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
///
/// # Example
///
/// ```no_run
/// use sitewire_config::{BuildConfig, validate_fs};
///
/// validate_fs(&BuildConfig::static_site(), ".").unwrap();
/// ```
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{EntryMap, FileLoaderOptions, PngquantOptions, QualityRange, Rule};

    fn minimal_config() -> BuildConfig {
        let mut config = BuildConfig::default();
        config.entry.insert("main", "src/index.js");
        config
    }

    #[test]
    fn schema_validator_rejects_empty_entries() {
        let config = BuildConfig::default(); // No entries
        let result = SchemaValidator.validate(&config);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::NoEntries));
    }

    #[test]
    fn schema_validator_accepts_minimal_config() {
        assert!(SchemaValidator.validate(&minimal_config()).is_ok());
    }

    #[test]
    fn schema_validator_accepts_the_preset() {
        assert!(SchemaValidator.validate(&BuildConfig::static_site()).is_ok());
    }

    #[test]
    fn schema_validator_rejects_unparameterized_multi_entry_output() {
        let mut config = minimal_config();
        config.entry.insert("vendor", "src/vendor.js");
        config.output.filename = "bundle.js".into();
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn single_entry_may_use_a_fixed_filename() {
        let mut config = minimal_config();
        config.output.filename = "bundle.js".into();
        assert!(SchemaValidator.validate(&config).is_ok());
    }

    #[test]
    fn schema_validator_rejects_rules_without_steps() {
        let mut config = minimal_config();
        config
            .module
            .rules
            .push(Rule::new(PathMatcher::extensions(["js"]), vec![]));
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_dotted_extensions() {
        let mut config = minimal_config();
        config.module.rules.push(Rule::new(
            PathMatcher::extensions([".js"]),
            vec![Loader::Babel],
        ));
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_inverted_quality_range() {
        let mut config = minimal_config();
        let imagemin = crate::build::ImageminOptions {
            pngquant: PngquantOptions {
                quality: QualityRange { min: 90, max: 65 },
                speed: 4,
            },
            ..Default::default()
        };
        config.module.rules.push(Rule::new(
            PathMatcher::extensions(["png"]),
            vec![Loader::Imagemin(imagemin)],
        ));
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_emit_directory() {
        let mut config = minimal_config();
        config.module.rules.push(Rule::new(
            PathMatcher::extensions(["woff"]),
            vec![Loader::File(FileLoaderOptions {
                name: "[name].[ext]".into(),
                output_path: "".into(),
                public_path: "../fonts/".into(),
            })],
        ));
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_zero_min_chunks() {
        let mut config = minimal_config();
        config.optimization.split_chunks.cache_groups.insert(
            "broken".to_string(),
            crate::build::CacheGroup {
                min_chunks: 0,
                ..Default::default()
            },
        );
        let result = SchemaValidator.validate(&config);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::SchemaValidation { .. }
        ));
    }

    #[test]
    fn validate_schema_helper_works() {
        let mut config = BuildConfig::default();
        config.entry = EntryMap::from_iter([("main", "src/index.js")]);
        assert!(validate_schema(&config).is_ok());
    }
}
