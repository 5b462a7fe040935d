//! # Grimoire
//!
//! A static documentation site generator for folders of Markdown notes.
//! The folder tree is the table of contents: folders become categories,
//! Markdown files become pages, and every page is rendered into one HTML
//! template together with the full navigation, a breadcrumb trail and SEO
//! metadata.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      notes/     →  ScanResult   (filesystem → pages + categories)
//! 2. Generate  ScanResult →  output/      (template + pages → HTML site)
//! ```
//!
//! The scan result is immutable once built. Generation only reads it, which
//! is what lets content pages be rendered in parallel.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content directory, filters and loads every eligible Markdown file |
//! | [`loader`] | Turns one file into a [`types::Page`]: id, URL, levels, title, reading time |
//! | [`frontmatter`] | YAML and legacy `%` header parsing |
//! | [`markdown`] | Markdown to HTML with heading ids |
//! | [`naming`] | Display names from folder and file names |
//! | [`tree`] | Category tree built from the page list |
//! | [`nav`] | Sidebar navigation markup, one copy per output depth |
//! | [`icons`] | Category icon lookup |
//! | [`breadcrumb`] | Breadcrumb trail above each article |
//! | [`seo`] | Titles, descriptions, canonical URLs, JSON-LD, sitemap and robots.txt |
//! | [`template`] | The `{{PLACEHOLDER}}` contract and one-pass substitution |
//! | [`partials`] | Sidebar, footer, welcome block and client data fragments |
//! | [`generate`] | Writes the index, content pages, static pages and assets |
//! | [`context`] | Config, paths and generation date shared by one build |
//! | [`config`] | `config.toml` loading, merging over defaults, validation |
//! | [`output`] | CLI summary formatting |
//! | [`logging`] | Diagnostic subscriber setup |
//!
//! # Design Decisions
//!
//! ## Relative Links Everywhere
//!
//! Every link in the output is relative to the page it sits on, so the site
//! can be served from any base path or opened straight from disk. The cost
//! is that navigation markup depends on page depth; it is rendered once per
//! distinct depth and reused.
//!
//! ## One Template, Closed Placeholder Set
//!
//! The page layout lives in a single `template.html` owned by the site, not
//! in Rust. Fragments that need structure (navigation, breadcrumb, footer)
//! are built with Maud, so interpolated text is escaped, and dropped into the
//! template's `{{NAME}}` slots in one substitution pass.
//!
//! ## Failures Stay Local
//!
//! A broken file is logged and skipped; a missing stylesheet or template is
//! logged and worked around. Only a missing content directory or a scan that
//! finds nothing stops the build.

pub mod breadcrumb;
pub mod config;
pub mod context;
pub mod frontmatter;
pub mod generate;
pub mod icons;
pub mod loader;
pub mod logging;
pub mod markdown;
pub mod naming;
pub mod nav;
pub mod output;
pub mod partials;
pub mod scan;
pub mod seo;
pub mod template;
pub mod tree;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
