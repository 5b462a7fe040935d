//! CLI output formatting for the check and build commands.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every category and
//! page leads with its positional index and display title; source paths and
//! output paths are secondary context, either on an indented `Source:` line
//! or after an arrow. The listing reads as a table of contents of the site
//! while still pointing back to the files behind it.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Categories
//! 001 Guides (3 pages)
//!     Source: 01-guides/
//!     001 Advanced (1 page)
//!         Source: 01-guides/02-advanced/
//!         001 Tuning
//!             Source: 01-guides/02-advanced/tuning.md
//!     001 Basics
//!         Source: 01-guides/basics.md
//!     002 Intro
//!         Source: 01-guides/intro.md
//!
//! General
//!     001 FAQ
//!         Source: faq.md
//!
//! Index
//!     index.md
//!
//! Found 4 pages in 2 categories
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html (from index.md)
//! 001 Guides
//!     001 Advanced
//!         001 Tuning → 01-guides/02-advanced/tuning.html
//!     001 Basics → 01-guides/basics.html
//!     002 Intro → 01-guides/intro.html
//! General
//!     001 FAQ → faq.html
//!
//! Pages
//!     001 About → about.html
//!
//! Assets
//!     css/style.css
//!     js/app.js
//!
//! Generated 4 pages, 1 static page, sitemap.xml, robots.txt
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! do no writing of their own.

use crate::generate::GenerateReport;
use crate::scan::INDEX_FILE;
use crate::tree::{self, CategoryNode};
use crate::types::{GENERAL_CATEGORY, Page, ScanResult};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `3 pages`.
fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Category header: positional index + display name, with optional count.
///
/// ```text
/// 001 Guides (3 pages)
/// 001 Guides
/// ```
fn category_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({})", format_index(index), title, plural(n, "page", "pages")),
        None => format!("{} {}", format_index(index), title),
    }
}

fn source_path(page: &Page) -> String {
    page.relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ============================================================================
// Tree walker
// ============================================================================

/// One line-worthy entry from walking the category tree.
enum TreeEntry<'a> {
    Category {
        depth: usize,
        position: usize,
        node: &'a CategoryNode<'a>,
        /// Raw folder path from the content root, `/`-separated.
        source_dir: String,
    },
    Page {
        depth: usize,
        position: usize,
        page: &'a Page,
    },
}

/// Flatten the tree below `root` in navigation order: each folder's
/// subfolders by raw key, then its pages by title. Positions are counted
/// separately for subfolders and pages.
fn walk_tree<'a>(root: &'a CategoryNode<'a>) -> Vec<TreeEntry<'a>> {
    let mut entries = Vec::new();
    for (i, child) in root.children.values().enumerate() {
        walk_category(child, 0, i + 1, String::new(), &mut entries);
    }
    entries
}

fn walk_category<'a>(
    node: &'a CategoryNode<'a>,
    depth: usize,
    position: usize,
    parent_dir: String,
    entries: &mut Vec<TreeEntry<'a>>,
) {
    let source_dir = format!("{parent_dir}{}/", node.raw_key);
    entries.push(TreeEntry::Category {
        depth,
        position,
        node,
        source_dir: source_dir.clone(),
    });
    for (i, child) in node.children.values().enumerate() {
        walk_category(child, depth + 1, i + 1, source_dir.clone(), entries);
    }
    for (i, page) in node.sorted_pages().into_iter().enumerate() {
        entries.push(TreeEntry::Page {
            depth: depth + 1,
            position: i + 1,
            page,
        });
    }
}

// ============================================================================
// Check / scan output
// ============================================================================

/// Format the scan result as a category tree with source paths.
pub fn format_scan_output(scan: &ScanResult, content_root: &Path) -> Vec<String> {
    let tree = tree::build(&scan.pages);
    let mut lines = vec!["Categories".to_string()];

    for entry in walk_tree(&tree) {
        match entry {
            TreeEntry::Category {
                depth,
                position,
                node,
                source_dir,
            } => {
                let header = category_header(position, &node.display_name, Some(node.page_count()));
                lines.push(format!("{}{}", indent(depth), header));
                lines.push(format!("{}    Source: {}", indent(depth), source_dir));
            }
            TreeEntry::Page {
                depth,
                position,
                page,
            } => {
                lines.push(format!("{}{} {}", indent(depth), format_index(position), page.title));
                lines.push(format!("{}    Source: {}", indent(depth), source_path(page)));
            }
        }
    }

    if !tree.pages.is_empty() {
        lines.push(String::new());
        lines.push(GENERAL_CATEGORY.to_string());
        for (i, page) in tree.sorted_pages().into_iter().enumerate() {
            lines.push(format!("    {} {}", format_index(i + 1), page.title));
            lines.push(format!("        Source: {}", source_path(page)));
        }
    }

    lines.push(String::new());
    lines.push("Index".to_string());
    if content_root.join(INDEX_FILE).is_file() {
        lines.push(format!("    {INDEX_FILE}"));
    } else {
        lines.push("    (welcome page)".to_string());
    }

    lines.push(String::new());
    lines.push(format!(
        "Found {} in {}",
        plural(scan.pages.len(), "page", "pages"),
        plural(scan.categories.len(), "category", "categories")
    ));

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(scan: &ScanResult, content_root: &Path) {
    for line in format_scan_output(scan, content_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Build / generate output
// ============================================================================

/// Format the generated files: every page with `→` and its output path.
pub fn format_generate_output(scan: &ScanResult, report: &GenerateReport) -> Vec<String> {
    let tree = tree::build(&scan.pages);
    let mut lines = Vec::new();

    let index_source = if report.index_from_markdown {
        "from index.md"
    } else {
        "welcome page"
    };
    lines.push(format!("Home \u{2192} index.html ({index_source})"));

    for entry in walk_tree(&tree) {
        match entry {
            TreeEntry::Category {
                depth,
                position,
                node,
                ..
            } => {
                let header = category_header(position, &node.display_name, None);
                lines.push(format!("{}{}", indent(depth), header));
            }
            TreeEntry::Page {
                depth,
                position,
                page,
            } => {
                lines.push(format!(
                    "{}{} {} \u{2192} {}",
                    indent(depth),
                    format_index(position),
                    page.title,
                    page.url
                ));
            }
        }
    }

    if !tree.pages.is_empty() {
        lines.push(GENERAL_CATEGORY.to_string());
        for (i, page) in tree.sorted_pages().into_iter().enumerate() {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(i + 1),
                page.title,
                page.url
            ));
        }
    }

    if !report.static_pages.is_empty() {
        lines.push(String::new());
        lines.push("Pages".to_string());
        for (i, (title, file)) in report.static_pages.iter().enumerate() {
            lines.push(format!("    {} {} \u{2192} {}", format_index(i + 1), title, file));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    if report.assets.is_empty() {
        lines.push("    (none)".to_string());
    }
    for asset in &report.assets {
        lines.push(format!("    {asset}"));
    }
    if report.builtin_template {
        lines.push("    (built-in template)".to_string());
    }

    lines.push(String::new());
    let mut summary = vec![
        plural(report.content_pages.len(), "page", "pages"),
        plural(report.static_pages.len(), "static page", "static pages"),
    ];
    if report.sitemap {
        summary.push("sitemap.xml".to_string());
    }
    summary.push("robots.txt".to_string());
    lines.push(format!("Generated {}", summary.join(", ")));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(scan: &ScanResult, report: &GenerateReport) {
    for line in format_generate_output(scan, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
