//! Content discovery.
//!
//! Walks the content directory and turns every eligible Markdown file into a
//! [`Page`]. The result is an immutable [`ScanResult`]: pages in path order
//! plus the top-level category index.
//!
//! ## Directory Structure
//!
//! ```text
//! input/notes/                     # Content root
//! ├── index.md                     # Landing page body (not a content page)
//! ├── faq.md                       # Root page, category "General"
//! ├── 01-guides/                   # Category "Guides"
//! │   ├── intro.md
//! │   └── 02-advanced/             # Subcategory "Advanced"
//! │       └── tuning.md
//! ├── 02-api-reference/
//! │   └── endpoints.md
//! ├── .obsidian/                   # Excluded folder, never walked
//! └── ---/                         # Invalid name, never walked
//! ```
//!
//! ## Eligibility Rules
//!
//! - Only `*.md` files are considered.
//! - Files literally named `index.md` are skipped at every level.
//! - Folders whose name is in the exclusion list are pruned at any depth.
//! - Folders and file stems made only of separators (`---`, `...`) are skipped.
//!
//! Eligible files are sorted by path before loading so output order never
//! depends on filesystem enumeration order.

use crate::loader;
use crate::naming::{self, NameFormatter};
use crate::types::{Page, ScanResult};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// File name reserved for the landing page.
pub const INDEX_FILE: &str = "index.md";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Content directory not found: {}", .0.display())]
    MissingContentDir(PathBuf),
    #[error("Content path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Scan `root` and load every eligible document.
pub fn scan(
    root: &Path,
    exclude_folders: &[String],
    formatter: &NameFormatter,
) -> Result<ScanResult, ScanError> {
    let files = discover(root, exclude_folders)?;
    tracing::debug!(count = files.len(), root = %root.display(), "Discovered Markdown files");

    let pages: Vec<Page> = files
        .par_iter()
        .filter_map(|path| loader::load(path, root, formatter))
        .collect();

    Ok(ScanResult::new(dedupe_ids(pages)))
}

/// List eligible Markdown files under `root`, sorted by path.
pub fn discover(root: &Path, exclude_folders: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::MissingContentDir(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let excluded: HashSet<&str> = exclude_folders.iter().map(String::as_str).collect();
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_type().is_dir() || keep_dir(e, &excluded));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() && is_eligible_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn keep_dir(entry: &DirEntry, excluded: &HashSet<&str>) -> bool {
    let name = entry.file_name().to_string_lossy();
    if excluded.contains(name.as_ref()) {
        tracing::debug!(path = %entry.path().display(), "Excluded folder");
        return false;
    }
    naming::is_valid_name(&name)
}

fn is_eligible_file(path: &Path) -> bool {
    // Exact match, so `index.MD` can never slip past the reserved-name check.
    if path.extension().is_none_or(|e| e != "md") {
        return false;
    }
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if name == INDEX_FILE {
        return false;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    naming::is_valid_name(&stem)
}

/// Make page ids unique by suffixing later duplicates with `-2`, `-3`, ...
///
/// Distinct paths can map to the same id (`a-b/c.md` and `a/b-c.md`). The
/// first page in path order keeps the plain id.
fn dedupe_ids(mut pages: Vec<Page>) -> Vec<Page> {
    let mut seen: HashSet<String> = HashSet::new();
    for page in &mut pages {
        if seen.insert(page.id.clone()) {
            continue;
        }
        let mut n = 2;
        let unique = loop {
            let candidate = format!("{}-{n}", page.id);
            if !seen.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        tracing::warn!(
            path = %page.relative_path.display(),
            id = %page.id,
            renamed = %unique,
            "Duplicate page id"
        );
        seen.insert(unique.clone());
        page.id = unique;
    }
    pages
}
