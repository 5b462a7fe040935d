//! Document loading: one Markdown file in, one [`Page`] out.
//!
//! The loader owns every per-file decision: frontmatter split, title
//! resolution, id and URL derivation, hierarchy levels and reading time.
//! Failures stop at this boundary. A file that cannot be read is logged and
//! skipped so one bad document never aborts a build.

use crate::frontmatter;
use crate::markdown;
use crate::naming::NameFormatter;
use crate::types::{CATEGORY_SEPARATOR, GENERAL_CATEGORY, Page};
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Average reading speed used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{} is not under {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// Load `path` as a page, logging and returning `None` on failure.
pub fn load(path: &Path, root: &Path, formatter: &NameFormatter) -> Option<Page> {
    match try_load(path, root, formatter) {
        Ok(page) => Some(page),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable document");
            None
        }
    }
}

/// Load `path` as a page, surfacing the failure.
pub fn try_load(path: &Path, root: &Path, formatter: &NameFormatter) -> Result<Page, LoadError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| LoadError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?
        .to_path_buf();
    let content = fs::read_to_string(path)?;
    Ok(build_page(&relative, &content, formatter))
}

/// Build a page from its content-root-relative path and raw text.
pub fn build_page(relative: &Path, content: &str, formatter: &NameFormatter) -> Page {
    let doc = frontmatter::parse(content);
    let parts = path_parts(relative);
    let stem = file_stem(relative);

    let levels_raw: Vec<String> = parts[..parts.len().saturating_sub(1)].to_vec();
    let levels: Vec<String> = levels_raw.iter().map(|l| formatter.format(l)).collect();
    let category = if levels.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        levels.join(CATEGORY_SEPARATOR)
    };

    let title = doc
        .frontmatter
        .text("display_name")
        .or_else(|| doc.frontmatter.text("title"))
        .unwrap_or_else(|| formatter.format(&stem));

    Page {
        id: page_id(relative),
        url: page_url(relative),
        title,
        icon: doc.frontmatter.text("icon"),
        depth: levels.len(),
        levels_raw,
        levels,
        category,
        body_html: markdown::to_html(&doc.body),
        reading_time: reading_time(markdown::word_count(&doc.body)),
        relative_path: relative.to_path_buf(),
        frontmatter: doc.frontmatter,
    }
}

/// Minutes to read `words` words: rounded up, never below one.
pub fn reading_time(words: usize) -> u32 {
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Relative path with the extension removed and every separator replaced by `-`.
pub fn page_id(relative: &Path) -> String {
    let mut parts = path_parts(relative);
    if let Some(last) = parts.last_mut() {
        *last = file_stem(relative);
    }
    parts.join("-")
}

/// Relative path with a `.html` extension, always `/`-separated.
pub fn page_url(relative: &Path) -> String {
    let mut parts = path_parts(relative);
    if let Some(last) = parts.last_mut() {
        *last = format!("{}.html", file_stem(relative));
    }
    parts.join("/")
}

fn path_parts(relative: &Path) -> Vec<String> {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn file_stem(relative: &Path) -> String {
    relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
