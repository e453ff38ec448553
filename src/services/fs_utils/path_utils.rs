use std::path::{Path, PathBuf};

/// Default width for paths shown in summaries.
pub const DISPLAY_PATH_LEN: usize = 50;

/// Shorten `path` for display, keeping its tail: `"..." + last (max_len - 3) chars`.
///
/// Counts characters, not bytes, so multi-byte names are never split.
pub fn truncate_path(path: &str, max_len: usize) -> String {
    let len = path.chars().count();
    if len <= max_len {
        return path.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = path.chars().skip(len - keep).collect();
    format!("...{tail}")
}

/// Where generated wallpapers go: a subfolder named after the imported theme,
/// or `output_dir` itself when the images were picked by hand.
pub fn resolve_output_dir(output_dir: &Path, theme_name: Option<&str>) -> PathBuf {
    match theme_name {
        Some(name) if !name.is_empty() => output_dir.join(name),
        _ => output_dir.to_path_buf(),
    }
}
