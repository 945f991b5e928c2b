//! Global configuration settings shared across profiles.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Preferred log filter for tooling that consumes the document
    #[serde(default)]
    pub log_level: Option<String>,

    /// Worker cap for engine passes that fan out (parallel minification)
    #[serde(default)]
    pub parallel_jobs: Option<usize>,
}
