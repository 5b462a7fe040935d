//! Shared test utilities for the grimoire test suite.
//!
//! Provides content-tree builders and lookup helpers that panic with the
//! available alternatives on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = content_tree(&[
//!     ("01-guides/intro.md", "# Intro"),
//!     ("faq.md", "questions"),
//! ]);
//! let result = scan_default(tmp.path());
//!
//! let intro = find_page(&result, "01-guides-intro");
//! assert_eq!(intro.levels, vec!["Guides"]);
//! ```

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{FormattingConfig, PathsConfig};
use crate::naming::NameFormatter;
use crate::scan;
use crate::types::{Frontmatter, GENERAL_CATEGORY, Page, ScanResult};

// =========================================================================
// Fixture setup
// =========================================================================

/// Write `(relative path, content)` pairs into a fresh temp directory.
pub fn content_tree(files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    tmp
}

/// Scan with stock exclusions and formatting.
pub fn scan_default(root: &std::path::Path) -> ScanResult {
    scan::scan(
        root,
        &PathsConfig::default().exclude_folders,
        &NameFormatter::new(&FormattingConfig::default()),
    )
    .unwrap()
}

/// Build a page in memory from a relative `.md` path.
///
/// Levels are formatted with stock settings; the title is the given one.
pub fn make_page(rel: &str, title: &str) -> Page {
    let formatter = NameFormatter::new(&FormattingConfig::default());
    let relative = PathBuf::from(rel);
    let levels_raw: Vec<String> = relative
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    let levels: Vec<String> = levels_raw.iter().map(|l| formatter.format(l)).collect();
    let category = if levels.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        levels.join(" > ")
    };
    Page {
        id: crate::loader::page_id(&relative),
        url: crate::loader::page_url(&relative),
        title: title.to_string(),
        icon: None,
        depth: levels.len(),
        levels_raw,
        levels,
        category,
        body_html: format!("<p>{title}</p>"),
        reading_time: 1,
        relative_path: relative,
        frontmatter: Frontmatter::default(),
    }
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a page by id. Panics if not found.
pub fn find_page<'a>(result: &'a ScanResult, id: &str) -> &'a Page {
    result
        .pages
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| {
            let ids = page_ids(result);
            panic!("page '{id}' not found. Available: {ids:?}")
        })
}

/// All page ids in scan order.
pub fn page_ids(result: &ScanResult) -> Vec<&str> {
    result.pages.iter().map(|p| p.id.as_str()).collect()
}

/// Read a generated file relative to `root`. Panics with the directory
/// listing if it does not exist.
pub fn read_output(root: &std::path::Path, rel: &str) -> String {
    let path = root.join(rel);
    fs::read_to_string(&path).unwrap_or_else(|e| {
        let listing: Vec<String> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .display()
                    .to_string()
            })
            .collect();
        panic!("cannot read '{rel}': {e}. Available: {listing:?}")
    })
}

/// Strip tags from an HTML fragment and collapse whitespace.
pub fn text_content(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
