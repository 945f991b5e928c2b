//! Path matching and ordered transformation rules.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::build::loader::Loader;

/// Structured path predicate used by rules and cache groups.
///
/// Matchers are plain data rather than patterns, so documents stay
/// deep-comparable and serialize without escaping concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMatcher {
    /// Match files whose extension is one of `any_of` (no leading dot).
    Extension {
        any_of: Vec<String>,
        /// Compare extensions case-insensitively (`logo.PNG` matches `png`).
        #[serde(default)]
        ignore_case: bool,
    },

    /// Match paths with a directory component equal to `name`.
    ///
    /// Comparison is per component, so `node_modules` does not match a
    /// sibling directory named `node_modules_cache`.
    Segment { name: String },
}

impl PathMatcher {
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Extension {
            any_of: extensions.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    pub fn extensions_any_case<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Extension {
            any_of: extensions.into_iter().map(Into::into).collect(),
            ignore_case: true,
        }
    }

    pub fn segment(name: impl Into<String>) -> Self {
        Self::Segment { name: name.into() }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Extension {
                any_of,
                ignore_case,
            } => {
                let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
                    return false;
                };
                if *ignore_case {
                    any_of.iter().any(|e| e.eq_ignore_ascii_case(extension))
                } else {
                    any_of.iter().any(|e| e == extension)
                }
            }
            Self::Segment { name } => path
                .components()
                .any(|component| component.as_os_str() == name.as_str()),
        }
    }
}

/// One (predicate, transformation chain) association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Paths the rule applies to.
    pub test: PathMatcher,

    /// Paths vetoed even when `test` matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<PathMatcher>,

    /// Steps in application order; each step consumes the previous step's
    /// output.
    pub loaders: Vec<Loader>,
}

impl Rule {
    pub fn new(test: PathMatcher, loaders: Vec<Loader>) -> Self {
        Self {
            test,
            exclude: None,
            loaders,
        }
    }

    pub fn with_exclude(mut self, exclude: PathMatcher) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Whether the rule claims `path`: `test` matches and `exclude` does not.
    pub fn applies_to(&self, path: &Path) -> bool {
        if !self.test.matches(path) {
            return false;
        }
        !self.exclude.as_ref().is_some_and(|m| m.matches(path))
    }
}

/// Ordered rule list with first-match-wins selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    pub fn push(&mut self, rule: Rule) {
        self.0.push(rule);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All rules claiming `path`, in declaration order.
    pub fn matching<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a Rule> + 'a {
        self.0.iter().filter(move |rule| rule.applies_to(path))
    }

    /// The rule whose chain processes `path`: the earliest declared match.
    pub fn first_match(&self, path: &Path) -> Option<&Rule> {
        self.0.iter().find(|rule| rule.applies_to(path))
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
