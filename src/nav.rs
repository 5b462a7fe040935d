//! Sidebar navigation rendering.
//!
//! The category tree is rendered recursively. Markup for a folder depends on
//! how deep it sits in the tree, looked up from [`FolderStyle::for_level`]:
//!
//! ```text
//! level 0   nav-category      category icon + chevron
//! level 1   nav-subcategory   folder-open icon + chevron
//! level 2+  nav-level-deep    angle-right marker, tagged with data-depth
//! ```
//!
//! Every folder gets a stable DOM id: its parent's id, a dash, and the slug
//! of its raw name. The client script keys collapse state on these ids.
//!
//! Links are relative, so the same tree renders differently for pages at
//! different output depths: a page two folders down needs `../../` in front
//! of every URL.

use crate::config::UiConfig;
use crate::icons::category_icon;
use crate::naming::nav_slug;
use crate::tree::CategoryNode;
use crate::types::Page;
use maud::{Markup, html};

/// Markup classes for one folder level.
#[derive(Debug, PartialEq, Eq)]
pub struct FolderStyle {
    pub wrapper: &'static str,
    pub header: &'static str,
    pub items: &'static str,
    /// Icon before the name. `None` means the category icon is looked up.
    pub marker: Option<&'static str>,
    pub chevron: Option<&'static str>,
    /// Emit `data-depth` on the wrapper.
    pub tag_depth: bool,
}

const CATEGORY: FolderStyle = FolderStyle {
    wrapper: "nav-category",
    header: "category-header",
    items: "category-items",
    marker: None,
    chevron: Some("fas fa-chevron-right category-chevron"),
    tag_depth: false,
};

const SUBCATEGORY: FolderStyle = FolderStyle {
    wrapper: "nav-subcategory",
    header: "subcategory-header",
    items: "subcategory-items",
    marker: Some("fas fa-folder-open"),
    chevron: Some("fas fa-chevron-right subcategory-chevron"),
    tag_depth: false,
};

const DEEP: FolderStyle = FolderStyle {
    wrapper: "nav-level-deep",
    header: "deep-header",
    items: "deep-items",
    marker: Some("fas fa-angle-right deep-chevron"),
    chevron: None,
    tag_depth: true,
};

impl FolderStyle {
    pub fn for_level(level: usize) -> &'static FolderStyle {
        match level {
            0 => &CATEGORY,
            1 => &SUBCATEGORY,
            _ => &DEEP,
        }
    }
}

/// `../` repeated once per output folder level.
pub fn url_prefix(relative_depth: usize) -> String {
    "../".repeat(relative_depth)
}

/// Render the whole navigation for a page `relative_depth` folders deep.
pub fn render(tree: &CategoryNode, relative_depth: usize, ui: &UiConfig) -> Markup {
    let ctx = NavContext {
        prefix: url_prefix(relative_depth),
        ui,
    };
    ctx.level(tree, "", 0)
}

struct NavContext<'a> {
    prefix: String,
    ui: &'a UiConfig,
}

impl NavContext<'_> {
    fn level(&self, node: &CategoryNode, parent_id: &str, level: usize) -> Markup {
        html! {
            @for (raw, child) in &node.children {
                @let id = if parent_id.is_empty() {
                    nav_slug(raw)
                } else {
                    format!("{parent_id}-{}", nav_slug(raw))
                };
                (self.folder(child, &id, level))
            }
            @for page in node.sorted_pages() {
                (self.page_link(page, level))
            }
        }
    }

    fn folder(&self, node: &CategoryNode, id: &str, level: usize) -> Markup {
        let style = FolderStyle::for_level(level);
        let marker = match style.marker {
            Some(icon) => icon.to_string(),
            None => format!("{} category-icon", category_icon(&node.raw_key, self.ui)),
        };
        html! {
            div class=(style.wrapper) data-depth=[style.tag_depth.then_some(level)] {
                button class=(style.header) data-category=(id) {
                    span {
                        i class=(marker) {}
                        " "
                        (node.display_name)
                    }
                    @if let Some(chevron) = style.chevron {
                        i class=(chevron) {}
                    }
                }
                div class=(style.items) id=(id) {
                    (self.level(node, id, level + 1))
                }
            }
        }
    }

    fn page_link(&self, page: &Page, level: usize) -> Markup {
        let class = if level == 0 {
            "nav-item".to_string()
        } else {
            format!("nav-item nav-item-depth-{level}")
        };
        html! {
            a href={ (self.prefix) (page.url) } class=(class) data-page=(page.id) {
                span.nav-item-text { (page.title) }
                @if self.ui.show_bookmarks {
                    button.bookmark-btn data-page=(page.id) {
                        i.far.fa-bookmark {}
                    }
                }
            }
        }
    }
}
