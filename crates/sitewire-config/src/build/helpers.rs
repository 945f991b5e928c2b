use std::path::PathBuf;

use crate::build::output::FilenameTemplate;

// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_output_path() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_output_filename() -> FilenameTemplate {
    FilenameTemplate::new("[name].js")
}

pub(crate) fn default_emit_name() -> FilenameTemplate {
    FilenameTemplate::new("[name].[ext]")
}

pub(crate) fn default_page_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_stylesheet_filename() -> FilenameTemplate {
    FilenameTemplate::new("[name].css")
}

pub(crate) fn default_stylesheet_chunk_filename() -> FilenameTemplate {
    FilenameTemplate::new("[id].css")
}

pub(crate) fn default_style_extensions() -> Vec<String> {
    vec![".scss".to_string(), ".css".to_string()]
}

pub(crate) fn default_content_extensions() -> Vec<String> {
    vec![".pug".to_string(), ".html".to_string()]
}

pub(crate) fn default_jpeg_quality() -> u8 {
    75
}

pub(crate) fn default_webp_quality() -> u8 {
    75
}

pub(crate) fn default_pngquant_speed() -> u8 {
    4
}

pub(crate) fn default_min_chunks() -> u32 {
    1
}

pub(crate) fn default_max_initial_requests() -> u32 {
    3
}

pub(crate) fn default_min_size() -> u64 {
    30_000
}
