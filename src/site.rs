//! Site page discovery.
//!
//! Walks the generated site's HTML root and pairs every page file with the
//! URL route it is served under.

use jwalk::WalkDir;
use std::path::{Path, PathBuf};

use crate::core::RoutePath;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A page slated for enhancement.
#[derive(Debug, Clone)]
pub struct Page {
    pub file: PathBuf,
    pub route: RoutePath,
}

/// Collect all HTML pages under `dir` recursively, in a stable order.
pub fn collect_pages(dir: &Path) -> Vec<Page> {
    WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|path| is_html(path))
        .map(|file| Page {
            route: RoutePath::for_output_file(dir, &file),
            file,
        })
        .collect()
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}
