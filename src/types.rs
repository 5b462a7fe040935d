//! Shared types used across all pipeline stages.
//!
//! Pages are built once by the scanner and then only read: the tree builder,
//! navigation, breadcrumbs, SEO and the page renderer all borrow them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Category name used for pages at the root of the content tree.
pub const GENERAL_CATEGORY: &str = "General";

/// Separator between level display names in [`Page::category`].
pub const CATEGORY_SEPARATOR: &str = " > ";

/// Metadata block parsed from the head of a document.
///
/// YAML values are kept as JSON values so both frontmatter formats share one
/// representation; legacy `% Key: Value` lines always produce strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(pub BTreeMap<String, serde_json::Value>);

impl Frontmatter {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty textual value for `key`. Numbers and booleans are rendered
    /// as text; lists, maps and null are ignored.
    pub fn text(&self, key: &str) -> Option<String> {
        let text = match self.0.get(key)? {
            serde_json::Value::String(s) => s.trim().to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }
}

/// A content page built from one Markdown file.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Relative path without extension, separators replaced with `-`.
    pub id: String,
    /// Relative path with `.html` extension, `/`-separated.
    pub url: String,
    pub title: String,
    /// Icon class from frontmatter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Raw folder names from the content root to the parent folder.
    pub levels_raw: Vec<String>,
    /// Display names, parallel to `levels_raw`.
    pub levels: Vec<String>,
    /// Levels joined with `" > "`, or `"General"` at the root.
    pub category: String,
    /// Number of levels.
    pub depth: usize,
    pub body_html: String,
    /// Minutes, at least 1.
    pub reading_time: u32,
    /// Path relative to the content root, extension included.
    pub relative_path: PathBuf,
    pub frontmatter: Frontmatter,
}

impl Page {
    /// Raw key of the top-level category bucket this page belongs to.
    pub fn top_level(&self) -> &str {
        self.levels_raw
            .first()
            .map_or(GENERAL_CATEGORY, String::as_str)
    }

    /// Output depth: how many folders the written HTML file sits below the
    /// output root.
    pub fn output_depth(&self) -> usize {
        self.relative_path.components().count().saturating_sub(1)
    }
}

/// Pages grouped by top-level raw folder name, in first-seen order.
///
/// Buckets hold indices into [`ScanResult::pages`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex(Vec<(String, Vec<usize>)>);

impl CategoryIndex {
    /// Build the index from pages in scan order.
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut buckets: Vec<(String, Vec<usize>)> = Vec::new();
        for (i, page) in pages.iter().enumerate() {
            let key = page.top_level();
            match buckets.iter_mut().find(|(k, _)| k == key) {
                Some((_, members)) => members.push(i),
                None => buckets.push((key.to_string(), vec![i])),
            }
        }
        Self(buckets)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Category keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Page indices for `key`, in scan order.
    pub fn get(&self, key: &str) -> Option<&[usize]> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, members)| members.as_slice())
    }
}

/// Immutable output of the content scan.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Pages sorted by source path.
    pub pages: Vec<Page>,
    pub categories: CategoryIndex,
}

impl ScanResult {
    pub fn new(pages: Vec<Page>) -> Self {
        let categories = CategoryIndex::from_pages(&pages);
        Self { pages, categories }
    }

    /// Pages of one top-level category, in scan order.
    pub fn category_pages(&self, key: &str) -> Vec<&Page> {
        self.categories
            .get(key)
            .unwrap_or_default()
            .iter()
            .map(|&i| &self.pages[i])
            .collect()
    }
}
