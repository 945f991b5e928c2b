//! Named entry points for the build.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named entry points with their source files.
///
/// Keys are the logical bundle names, values are the source files the
/// engine starts traversal from. Declaration order is preserved, both in
/// iteration and in the serialized document.
///
/// # Example
///
/// ```
/// use sitewire_config::EntryMap;
/// use std::path::Path;
///
/// let mut entries = EntryMap::new();
/// entries.insert("main", "src/index.js");
/// assert_eq!(entries.get("main"), Some(Path::new("src/index.js")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryMap(IndexMap<String, PathBuf>);

impl EntryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Returns the previous source file when the
    /// name was already present.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<PathBuf>) -> Option<PathBuf> {
        self.0.insert(name.into(), source.into())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.0.get(name).map(PathBuf::as_path)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Bundle names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// (name, source) pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0.iter().map(|(name, source)| (name.as_str(), source.as_path()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, S: Into<PathBuf>> FromIterator<(N, S)> for EntryMap {
    fn from_iter<I: IntoIterator<Item = (N, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, source)| (name.into(), source.into()))
                .collect(),
        )
    }
}
