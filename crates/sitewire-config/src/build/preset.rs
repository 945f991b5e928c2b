//! The built-in document for the two-page pug/scss site layout.

use indexmap::IndexMap;

use crate::build::entry::EntryMap;
use crate::build::loader::{
    CssLoaderOptions, FileLoaderOptions, GifsicleOptions, HtmlLoaderOptions, ImageminOptions,
    Loader, MozjpegOptions, OptipngOptions, PngquantOptions, PostcssOptions, PostcssPlugin,
    QualityRange, WebpOptions,
};
use crate::build::optimization::{
    CacheGroup, ChunkScope, Minimizer, Optimization, ScriptMinifyOptions, SplitChunks,
};
use crate::build::output::OutputOptions;
use crate::build::plugin::{
    CleanOptions, CssExtractOptions, HtmlPageOptions, Plugin, StripUnusedCssOptions,
};
use crate::build::rules::{PathMatcher, Rule, RuleSet};
use crate::build::{BuildConfig, ModuleOptions};

impl BuildConfig {
    /// The canonical static-site document.
    ///
    /// Two entries (`vendor`, then `main`), bundles under `dist/js/`,
    /// extracted stylesheets under `dist/styles/`, recompressed images and
    /// fonts emitted beside them, and a vendor chunk split off for anything
    /// imported out of `node_modules`.
    ///
    /// Pure construction: no I/O and no failure modes. Missing source files
    /// surface through [`validate_fs`](crate::validate_fs) or when the
    /// engine consumes the document.
    pub fn static_site() -> Self {
        Self {
            entry: EntryMap::from_iter([
                ("vendor", "src/scripts/vendor.js"),
                ("main", "src/index.js"),
            ]),
            output: OutputOptions {
                path: "dist".into(),
                filename: "js/[name].js".into(),
            },
            optimization: Optimization {
                split_chunks: SplitChunks {
                    cache_groups: IndexMap::from([
                        (
                            "main".to_string(),
                            CacheGroup {
                                chunks: ChunkScope::Initial,
                                min_chunks: 2,
                                max_initial_requests: 5,
                                min_size: 0,
                                ..CacheGroup::default()
                            },
                        ),
                        (
                            "vendor".to_string(),
                            CacheGroup {
                                test: Some(PathMatcher::segment("node_modules")),
                                chunks: ChunkScope::Initial,
                                name: Some("vendor".to_string()),
                                priority: 10,
                                enforce: true,
                                ..CacheGroup::default()
                            },
                        ),
                    ]),
                },
                minimizers: vec![
                    Minimizer::Scripts(ScriptMinifyOptions {
                        cache: true,
                        parallel: true,
                        source_map: true,
                    }),
                    Minimizer::Styles,
                ],
            },
            module: ModuleOptions {
                rules: RuleSet::new(vec![
                    Rule::new(PathMatcher::extensions(["js"]), vec![Loader::Babel])
                        .with_exclude(PathMatcher::segment("node_modules")),
                    Rule::new(
                        PathMatcher::extensions(["pug"]),
                        vec![
                            Loader::Pug,
                            Loader::Html(HtmlLoaderOptions {
                                minimize: true,
                                remove_comments: false,
                                collapse_whitespace: false,
                            }),
                        ],
                    ),
                    Rule::new(
                        PathMatcher::extensions(["scss"]),
                        vec![
                            Loader::Sass,
                            Loader::Postcss(PostcssOptions {
                                plugins: vec![
                                    PostcssPlugin::Precss,
                                    PostcssPlugin::Autoprefixer,
                                    PostcssPlugin::Mqpacker,
                                ],
                            }),
                            Loader::Css(CssLoaderOptions { minimize: true }),
                            Loader::StyleExtract,
                        ],
                    )
                    .with_exclude(PathMatcher::segment("node_modules")),
                    Rule::new(
                        PathMatcher::extensions_any_case(["gif", "png", "jpg", "jpeg", "svg"]),
                        vec![
                            Loader::Imagemin(ImageminOptions {
                                mozjpeg: MozjpegOptions {
                                    progressive: true,
                                    quality: 65,
                                },
                                optipng: OptipngOptions { enabled: false },
                                pngquant: PngquantOptions {
                                    quality: QualityRange { min: 65, max: 90 },
                                    speed: 4,
                                },
                                gifsicle: GifsicleOptions { interlaced: false },
                                webp: WebpOptions { quality: 75 },
                            }),
                            Loader::File(FileLoaderOptions {
                                name: "[name].[ext]".into(),
                                output_path: "images/".into(),
                                public_path: "../images/".into(),
                            }),
                        ],
                    ),
                    Rule::new(
                        PathMatcher::extensions(["ttf", "eot", "woff", "woff2"]),
                        vec![Loader::File(FileLoaderOptions {
                            name: "[name].[ext]".into(),
                            output_path: "fonts/".into(),
                            public_path: "../fonts/".into(),
                        })],
                    ),
                ]),
            },
            plugins: vec![
                Plugin::Clean(CleanOptions {
                    paths: vec!["dist".into()],
                }),
                Plugin::HtmlPage(HtmlPageOptions {
                    template: "src/index.pug".into(),
                    filename: "index.html".into(),
                }),
                Plugin::HtmlPage(HtmlPageOptions {
                    template: "src/pages/about.pug".into(),
                    filename: "about.html".into(),
                }),
                Plugin::CssExtract(CssExtractOptions {
                    filename: "styles/[name].css".into(),
                    chunk_filename: "[id].css".into(),
                }),
                Plugin::StripUnusedCss(StripUnusedCssOptions {
                    content: vec!["src/**/*.pug".into()],
                    style_extensions: vec![".scss".into(), ".css".into()],
                    content_extensions: vec![".pug".into(), ".html".into()],
                }),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_declares_vendor_before_main() {
        let config = BuildConfig::static_site();
        let names: Vec<_> = config.entry.names().collect();
        assert_eq!(names, vec!["vendor", "main"]);
    }

    #[test]
    fn preset_is_pure_construction() {
        assert_eq!(BuildConfig::static_site(), BuildConfig::static_site());
    }
}
