//! Output destination and filename templating.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_output_filename, default_output_path};

/// Where and how the engine names emitted bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Root directory for every emitted artifact.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Filename pattern for entry bundles, relative to `path`.
    #[serde(default = "default_output_filename")]
    pub filename: FilenameTemplate,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_output_filename(),
        }
    }
}

/// Filename pattern with `[name]`, `[id]` and `[ext]` substitution tokens.
///
/// Tokens without a supplied value, and any bracketed text that is not a
/// known token, pass through untouched.
///
/// # Example
///
/// ```
/// use sitewire_config::{FilenameTemplate, TemplateVars};
///
/// let template = FilenameTemplate::new("js/[name].js");
/// assert_eq!(template.render(&TemplateVars::name("main")), "js/main.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the pattern contains the given token, e.g. `"[name]"`.
    pub fn has_token(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Substitute every token that has a value in `vars`.
    pub fn render(&self, vars: &TemplateVars<'_>) -> String {
        let mut rendered = self.0.clone();
        for (token, value) in [
            ("[name]", vars.name),
            ("[id]", vars.id),
            ("[ext]", vars.ext),
        ] {
            if let Some(value) = value {
                rendered = rendered.replace(token, value);
            }
        }
        rendered
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilenameTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for FilenameTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

/// Substitution values for [`FilenameTemplate::render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateVars<'a> {
    pub name: Option<&'a str>,
    pub id: Option<&'a str>,
    pub ext: Option<&'a str>,
}

impl<'a> TemplateVars<'a> {
    /// Vars with only the bundle name set (the common case for entry output).
    pub fn name(name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_ext(mut self, ext: &'a str) -> Self {
        self.ext = Some(ext);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_name() {
        let template = FilenameTemplate::new("js/[name].js");
        assert_eq!(template.render(&TemplateVars::name("main")), "js/main.js");
    }

    #[test]
    fn render_substitutes_multiple_tokens() {
        let template = FilenameTemplate::new("[name].[ext]");
        let vars = TemplateVars::name("logo").with_ext("png");
        assert_eq!(template.render(&vars), "logo.png");
    }

    #[test]
    fn missing_vars_leave_tokens_in_place() {
        let template = FilenameTemplate::new("[name]-[id].js");
        assert_eq!(template.render(&TemplateVars::name("app")), "app-[id].js");
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let template = FilenameTemplate::new("[name].[contenthash].js");
        assert_eq!(
            template.render(&TemplateVars::name("app")),
            "app.[contenthash].js"
        );
    }

    #[test]
    fn output_defaults() {
        let output = OutputOptions::default();
        assert_eq!(output.path, PathBuf::from("dist"));
        assert_eq!(output.filename.as_str(), "[name].js");
    }
}
