//! Whole-build transformations applied outside the rule chains.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_content_extensions, default_page_filename, default_style_extensions,
    default_stylesheet_chunk_filename, default_stylesheet_filename,
};
use crate::build::output::FilenameTemplate;

/// One whole-build transformation.
///
/// Plugins run against the build as a unit rather than per file, in the
/// order they are declared. Serialized with an adjacent tag:
/// `{ "plugin": "clean", "options": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    /// Delete stale output directories before anything is written.
    Clean(CleanOptions),

    /// Render one template into a standalone page wired to the build's assets.
    HtmlPage(HtmlPageOptions),

    /// Collect extracted styles into standalone stylesheet files.
    CssExtract(CssExtractOptions),

    /// Drop style rules never referenced by the site's content.
    StripUnusedCss(StripUnusedCssOptions),
}

impl Plugin {
    /// The plugin's document tag, e.g. `"html-page"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clean(_) => "clean",
            Self::HtmlPage(_) => "html-page",
            Self::CssExtract(_) => "css-extract",
            Self::StripUnusedCss(_) => "strip-unused-css",
        }
    }
}

/// Output cleanup options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanOptions {
    /// Directories removed before the build writes anything
    pub paths: Vec<PathBuf>,
}

/// Standalone page generation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlPageOptions {
    /// Source template the page is rendered from
    pub template: PathBuf,

    /// Output filename, relative to `output.path` (default: "index.html")
    #[serde(default = "default_page_filename")]
    pub filename: String,
}

/// Stylesheet extraction options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    /// Filename pattern for stylesheets owned by an entry
    #[serde(default = "default_stylesheet_filename")]
    pub filename: FilenameTemplate,

    /// Filename pattern for stylesheets split off into their own chunk
    #[serde(default = "default_stylesheet_chunk_filename")]
    pub chunk_filename: FilenameTemplate,
}

impl Default for CssExtractOptions {
    fn default() -> Self {
        Self {
            filename: default_stylesheet_filename(),
            chunk_filename: default_stylesheet_chunk_filename(),
        }
    }
}

/// Unused style elimination options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripUnusedCssOptions {
    /// Globs for content files whose selectors keep style rules alive
    pub content: Vec<String>,

    /// Stylesheet extensions scanned for removable rules
    #[serde(default = "default_style_extensions")]
    pub style_extensions: Vec<String>,

    /// Content extensions scanned for selector usage
    #[serde(default = "default_content_extensions")]
    pub content_extensions: Vec<String>,
}
