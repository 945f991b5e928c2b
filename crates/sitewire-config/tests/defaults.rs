//! Tests for default values and the built-in static-site document.

use sitewire_config::{
    BuildConfig, CacheGroup, ChunkScope, FilenameTemplate, GlobalSettings, Loader, Minimizer,
    OutputOptions, PathMatcher, Plugin, SiteConfig, TemplateVars,
};
use std::path::{Path, PathBuf};

#[test]
fn site_config_defaults_to_the_preset() {
    let config = SiteConfig::default();
    assert_eq!(config.build, BuildConfig::static_site());
    assert!(config.profiles.is_empty());
}

#[test]
fn build_config_defaults_are_empty() {
    let config = BuildConfig::default();
    assert!(config.entry.is_empty());
    assert!(config.module.rules.is_empty());
    assert!(config.plugins.is_empty());
    assert!(config.optimization.split_chunks.cache_groups.is_empty());
    assert!(config.optimization.minimizers.is_empty());
}

#[test]
fn output_options_defaults() {
    let output = OutputOptions::default();
    assert_eq!(output.path, PathBuf::from("dist"));
    assert_eq!(output.filename, FilenameTemplate::new("[name].js"));
}

#[test]
fn cache_group_defaults() {
    let group = CacheGroup::default();
    assert!(group.test.is_none());
    assert_eq!(group.chunks, ChunkScope::Initial);
    assert!(group.name.is_none());
    assert_eq!(group.min_chunks, 1);
    assert_eq!(group.max_initial_requests, 3);
    assert_eq!(group.min_size, 30_000);
    assert_eq!(group.priority, 0);
    assert!(!group.enforce);
}

#[test]
fn global_settings_defaults() {
    let settings = GlobalSettings::default();
    assert!(settings.log_level.is_none());
    assert!(settings.parallel_jobs.is_none());
}

#[test]
fn preset_entry_names_are_vendor_and_main() {
    let config = BuildConfig::static_site();
    let names: Vec<_> = config.entry.names().collect();
    assert_eq!(names, vec!["vendor", "main"]);
    assert_eq!(
        config.entry.get("vendor"),
        Some(Path::new("src/scripts/vendor.js"))
    );
    assert_eq!(config.entry.get("main"), Some(Path::new("src/index.js")));
}

#[test]
fn preset_output_renders_under_the_js_directory() {
    let config = BuildConfig::static_site();
    assert_eq!(config.output.path, PathBuf::from("dist"));
    assert_eq!(
        config.output.filename.render(&TemplateVars::name("main")),
        "js/main.js"
    );
    assert_eq!(
        config.output.filename.render(&TemplateVars::name("vendor")),
        "js/vendor.js"
    );
}

#[test]
fn preset_declares_five_rules() {
    let config = BuildConfig::static_site();
    let rules: Vec<_> = config.module.rules.iter().collect();
    assert_eq!(rules.len(), 5);

    // Scripts first, fonts last
    assert_eq!(rules[0].test, PathMatcher::extensions(["js"]));
    assert_eq!(
        rules[0].exclude,
        Some(PathMatcher::segment("node_modules"))
    );
    assert_eq!(
        rules[4].test,
        PathMatcher::extensions(["ttf", "eot", "woff", "woff2"])
    );
}

#[test]
fn preset_stylesheet_chain_runs_in_application_order() {
    let config = BuildConfig::static_site();
    let scss_rule = config
        .module
        .rules
        .first_match(Path::new("src/styles/main.scss"))
        .expect("scss rule");

    let steps: Vec<_> = scss_rule
        .loaders
        .iter()
        .map(|step| match step {
            Loader::Sass => "sass",
            Loader::Postcss(_) => "postcss",
            Loader::Css(_) => "css",
            Loader::StyleExtract => "style-extract",
            _ => "other",
        })
        .collect();
    assert_eq!(steps, vec!["sass", "postcss", "css", "style-extract"]);
}

#[test]
fn preset_plugins_run_in_declared_order() {
    let config = BuildConfig::static_site();
    let names: Vec<_> = config.plugins.iter().map(Plugin::name).collect();
    assert_eq!(
        names,
        vec![
            "clean",
            "html-page",
            "html-page",
            "css-extract",
            "strip-unused-css"
        ]
    );
}

#[test]
fn preset_generates_both_pages() {
    let config = BuildConfig::static_site();
    let pages: Vec<_> = config
        .plugins
        .iter()
        .filter_map(|plugin| match plugin {
            Plugin::HtmlPage(options) => Some((options.template.as_path(), options.filename.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(
        pages,
        vec![
            (Path::new("src/index.pug"), "index.html"),
            (Path::new("src/pages/about.pug"), "about.html"),
        ]
    );
}

#[test]
fn preset_cache_groups_declare_main_then_vendor() {
    let config = BuildConfig::static_site();
    let groups = &config.optimization.split_chunks.cache_groups;
    let keys: Vec<_> = groups.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["main", "vendor"]);

    let main = &groups["main"];
    assert_eq!(main.min_chunks, 2);
    assert_eq!(main.max_initial_requests, 5);
    assert_eq!(main.min_size, 0);
    assert!(main.test.is_none());

    let vendor = &groups["vendor"];
    assert_eq!(vendor.test, Some(PathMatcher::segment("node_modules")));
    assert_eq!(vendor.name.as_deref(), Some("vendor"));
    assert_eq!(vendor.priority, 10);
    assert!(vendor.enforce);
}

#[test]
fn preset_minimizes_scripts_and_styles() {
    let config = BuildConfig::static_site();
    assert_eq!(config.optimization.minimizers.len(), 2);

    let Minimizer::Scripts(scripts) = &config.optimization.minimizers[0] else {
        panic!("expected the script minimizer first");
    };
    assert!(scripts.cache);
    assert!(scripts.parallel);
    assert!(scripts.source_map);

    assert_eq!(config.optimization.minimizers[1], Minimizer::Styles);
}
