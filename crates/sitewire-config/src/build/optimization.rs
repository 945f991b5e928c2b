//! Bundle-wide optimization policy: chunk splitting and minification.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_max_initial_requests, default_min_chunks, default_min_size, default_true,
};
use crate::build::rules::PathMatcher;

/// Optimization section of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    #[serde(default)]
    pub split_chunks: SplitChunks,

    /// Minification passes over the final bundle, in order.
    #[serde(default)]
    pub minimizers: Vec<Minimizer>,
}

/// Chunk-splitting policy: named cache groups in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitChunks {
    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

impl SplitChunks {
    /// Decide which cache group claims a module.
    ///
    /// `shared_by` is how many entry chunks import the module. A group with
    /// a `test` is eligible only when the test matches; `enforce` then makes
    /// the match sufficient on its own, otherwise `shared_by` must reach the
    /// group's `min_chunks`. Among eligible groups the highest `priority`
    /// wins and ties go to the earliest-declared group.
    ///
    /// Returns the group's explicit `name`, falling back to its map key.
    pub fn classify(&self, path: &Path, shared_by: u32) -> Option<&str> {
        let mut winner: Option<(&str, &CacheGroup)> = None;
        for (key, group) in &self.cache_groups {
            if !group.accepts(path, shared_by) {
                continue;
            }
            match &winner {
                Some((_, best)) if best.priority >= group.priority => {}
                _ => winner = Some((key, group)),
            }
        }
        winner.map(|(key, group)| group.name.as_deref().unwrap_or(key))
    }
}

/// One named grouping rule for the engine's chunk splitter.
///
/// `max_initial_requests` and `min_size` are thresholds the engine enforces
/// while materializing chunks; they do not affect group selection here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheGroup {
    /// Restrict the group to matching module paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<PathMatcher>,

    /// Which chunks the group may pull modules from.
    #[serde(default)]
    pub chunks: ChunkScope,

    /// Output name override; the map key is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// How many chunks must share a module before the group claims it.
    #[serde(default = "default_min_chunks")]
    pub min_chunks: u32,

    /// Cap on parallel requests at an entry point.
    #[serde(default = "default_max_initial_requests")]
    pub max_initial_requests: u32,

    /// Minimum byte size before a split chunk is worth creating.
    #[serde(default = "default_min_size")]
    pub min_size: u64,

    /// Higher priority wins when several groups claim a module.
    #[serde(default)]
    pub priority: i32,

    /// Claim on a `test` match alone, ignoring the share threshold.
    #[serde(default)]
    pub enforce: bool,
}

impl Default for CacheGroup {
    fn default() -> Self {
        Self {
            test: None,
            chunks: ChunkScope::default(),
            name: None,
            min_chunks: default_min_chunks(),
            max_initial_requests: default_max_initial_requests(),
            min_size: default_min_size(),
            priority: 0,
            enforce: false,
        }
    }
}

impl CacheGroup {
    fn accepts(&self, path: &Path, shared_by: u32) -> bool {
        if let Some(test) = &self.test {
            if !test.matches(path) {
                return false;
            }
        }
        self.enforce || shared_by >= self.min_chunks
    }
}

/// Which chunks a cache group may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkScope {
    /// Entry-point chunks only (default)
    #[default]
    Initial,
    /// Lazily-loaded chunks only
    Async,
    /// Both
    All,
}

/// One minification pass, adjacently tagged like loaders and plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "minimizer", content = "options", rename_all = "kebab-case")]
pub enum Minimizer {
    /// Minify emitted scripts.
    Scripts(ScriptMinifyOptions),

    /// Minify extracted stylesheets.
    Styles,
}

/// Script minification options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMinifyOptions {
    /// Reuse minification results across builds
    #[serde(default = "default_true")]
    pub cache: bool,

    /// Fan the work out across cores
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Emit source maps for the minified output
    #[serde(default)]
    pub source_map: bool,
}

impl Default for ScriptMinifyOptions {
    fn default() -> Self {
        Self {
            cache: true,
            parallel: true,
            source_map: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_groups(first_priority: i32, second_priority: i32) -> SplitChunks {
        SplitChunks {
            cache_groups: IndexMap::from([
                (
                    "first".to_string(),
                    CacheGroup {
                        priority: first_priority,
                        ..CacheGroup::default()
                    },
                ),
                (
                    "second".to_string(),
                    CacheGroup {
                        priority: second_priority,
                        ..CacheGroup::default()
                    },
                ),
            ]),
        }
    }

    #[test]
    fn higher_priority_wins() {
        let split = two_groups(0, 10);
        assert_eq!(split.classify(Path::new("src/a.js"), 1), Some("second"));
    }

    #[test]
    fn ties_go_to_the_earliest_declared_group() {
        let split = two_groups(5, 5);
        assert_eq!(split.classify(Path::new("src/a.js"), 1), Some("first"));
    }

    #[test]
    fn explicit_name_overrides_the_key() {
        let split = SplitChunks {
            cache_groups: IndexMap::from([(
                "deps".to_string(),
                CacheGroup {
                    name: Some("vendor".to_string()),
                    ..CacheGroup::default()
                },
            )]),
        };
        assert_eq!(split.classify(Path::new("src/a.js"), 1), Some("vendor"));
    }

    #[test]
    fn enforce_bypasses_the_share_threshold() {
        let split = SplitChunks {
            cache_groups: IndexMap::from([(
                "vendor".to_string(),
                CacheGroup {
                    test: Some(PathMatcher::segment("node_modules")),
                    min_chunks: 5,
                    enforce: true,
                    ..CacheGroup::default()
                },
            )]),
        };
        assert_eq!(
            split.classify(Path::new("node_modules/lodash/index.js"), 0),
            Some("vendor")
        );
        assert_eq!(split.classify(Path::new("src/a.js"), 0), None);
    }

    #[test]
    fn share_threshold_gates_groups_without_enforce() {
        let split = SplitChunks {
            cache_groups: IndexMap::from([(
                "shared".to_string(),
                CacheGroup {
                    min_chunks: 2,
                    ..CacheGroup::default()
                },
            )]),
        };
        assert_eq!(split.classify(Path::new("src/util.js"), 1), None);
        assert_eq!(split.classify(Path::new("src/util.js"), 2), Some("shared"));
    }
}
