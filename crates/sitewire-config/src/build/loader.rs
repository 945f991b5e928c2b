//! Per-file transformation steps and their option bags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::build::helpers::{
    default_emit_name, default_jpeg_quality, default_pngquant_speed, default_true,
    default_webp_quality,
};
use crate::build::output::FilenameTemplate;

/// One transformation step inside a rule's chain.
///
/// Serialized with an adjacent tag, so a step reads as
/// `{ "loader": "file", "options": { ... } }` in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "loader", content = "options", rename_all = "kebab-case")]
pub enum Loader {
    /// Transpile scripts for older runtimes.
    Babel,

    /// Render pug templates into HTML.
    Pug,

    /// Post-process generated HTML.
    Html(HtmlLoaderOptions),

    /// Resolve stylesheet imports and asset references.
    Css(CssLoaderOptions),

    /// Run PostCSS passes over the stylesheet.
    Postcss(PostcssOptions),

    /// Compile SCSS into CSS.
    Sass,

    /// Hand the stylesheet to the extraction plugin instead of inlining it.
    StyleExtract,

    /// Recompress images before they are emitted.
    Imagemin(ImageminOptions),

    /// Emit the file into the output tree and rewrite references to it.
    File(FileLoaderOptions),
}

/// HTML post-processing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlLoaderOptions {
    /// Minify the generated markup
    #[serde(default = "default_true")]
    pub minimize: bool,

    /// Strip HTML comments during minification
    #[serde(default = "default_true")]
    pub remove_comments: bool,

    /// Collapse runs of whitespace during minification
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,
}

impl Default for HtmlLoaderOptions {
    fn default() -> Self {
        Self {
            minimize: true,
            remove_comments: true,
            collapse_whitespace: true,
        }
    }
}

/// Stylesheet resolution options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssLoaderOptions {
    /// Minify the resolved stylesheet
    #[serde(default)]
    pub minimize: bool,
}

/// PostCSS pass selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcssOptions {
    /// Passes applied in order
    pub plugins: Vec<PostcssPlugin>,
}

/// A single PostCSS pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostcssPlugin {
    /// Future-CSS syntax (nesting, custom selectors)
    Precss,
    /// Vendor prefixes from browserslist data
    Autoprefixer,
    /// Merge duplicate media queries
    Mqpacker,
}

/// Image recompression options, one section per codec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageminOptions {
    #[serde(default)]
    pub mozjpeg: MozjpegOptions,

    #[serde(default)]
    pub optipng: OptipngOptions,

    #[serde(default)]
    pub pngquant: PngquantOptions,

    #[serde(default)]
    pub gifsicle: GifsicleOptions,

    #[serde(default)]
    pub webp: WebpOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MozjpegOptions {
    /// Emit progressive JPEGs
    #[serde(default = "default_true")]
    pub progressive: bool,

    /// Compression quality, 0-100
    #[serde(default = "default_jpeg_quality")]
    pub quality: u8,
}

impl Default for MozjpegOptions {
    fn default() -> Self {
        Self {
            progressive: true,
            quality: 75,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptipngOptions {
    /// Run the lossless PNG pass at all
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for OptipngOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PngquantOptions {
    /// Acceptable quality window; conversion is skipped when the result
    /// would fall below `min`
    #[serde(default)]
    pub quality: QualityRange,

    /// Speed/quality trade-off, 1 (slowest) to 11
    #[serde(default = "default_pngquant_speed")]
    pub speed: u8,
}

impl Default for PngquantOptions {
    fn default() -> Self {
        Self {
            quality: QualityRange::default(),
            speed: 4,
        }
    }
}

/// Inclusive quality window, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRange {
    pub min: u8,
    pub max: u8,
}

impl Default for QualityRange {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifsicleOptions {
    /// Emit interlaced GIFs
    #[serde(default)]
    pub interlaced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebpOptions {
    /// Compression quality, 0-100
    #[serde(default = "default_webp_quality")]
    pub quality: u8,
}

impl Default for WebpOptions {
    fn default() -> Self {
        Self { quality: 75 }
    }
}

/// File emission options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLoaderOptions {
    /// Emitted filename; `[name]` and `[ext]` come from the source file
    #[serde(default = "default_emit_name")]
    pub name: FilenameTemplate,

    /// Directory under `output.path` the file is emitted into
    pub output_path: PathBuf,

    /// Prefix prepended to rewritten references in consuming assets
    pub public_path: String,
}
