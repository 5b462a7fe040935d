//! Category tree built from the flat page list.
//!
//! Each node is a folder, keyed by its raw on-disk name, so the tree mirrors
//! the content directory but only where pages exist. Children live in a
//! `BTreeMap`, which gives raw-key order for free; pages are kept in
//! insertion order and sorted by title on demand.

use crate::types::Page;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct CategoryNode<'a> {
    /// Folder name as on disk. Empty for the root.
    pub raw_key: String,
    /// Formatted folder name. Empty for the root.
    pub display_name: String,
    pub children: BTreeMap<String, CategoryNode<'a>>,
    /// Pages directly inside this folder.
    pub pages: Vec<&'a Page>,
}

impl<'a> CategoryNode<'a> {
    fn new(raw_key: &str, display_name: &str) -> Self {
        Self {
            raw_key: raw_key.to_string(),
            display_name: display_name.to_string(),
            ..Self::default()
        }
    }

    /// Direct pages sorted by title, ties broken by id.
    pub fn sorted_pages(&self) -> Vec<&'a Page> {
        let mut pages = self.pages.clone();
        pages.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        pages
    }

    /// Number of pages in this subtree.
    pub fn page_count(&self) -> usize {
        self.pages.len() + self.children.values().map(CategoryNode::page_count).sum::<usize>()
    }
}

/// Fold pages into a tree rooted at an unnamed node.
pub fn build(pages: &[Page]) -> CategoryNode<'_> {
    let mut root = CategoryNode::default();
    for page in pages {
        let mut node = &mut root;
        for (raw, display) in page.levels_raw.iter().zip(&page.levels) {
            node = node
                .children
                .entry(raw.clone())
                .or_insert_with(|| CategoryNode::new(raw, display));
        }
        node.pages.push(page);
    }
    root
}
