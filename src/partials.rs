//! Reusable template fragments.
//!
//! Sidebar sections, contribute links, the footer, the landing-page welcome
//! block and the inline client data script. Each fragment is a small pure
//! function of the site context so the page renderer only has to bind them.

use crate::context::SiteContext;
use crate::icons::category_icon;
use crate::types::{Page, ScanResult};
use maud::{Markup, PreEscaped, html};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of category cards on the default landing page.
pub const WELCOME_CARD_LIMIT: usize = 6;

const PROJECT_URL: &str = "https://github.com/TristanInSec/Grimoire";

// ============================================================================
// Sidebar sections
// ============================================================================

/// "Recent" sidebar block, filled client-side. Empty when disabled.
pub fn recent_section(ctx: &SiteContext) -> Markup {
    if !ctx.config.ui.show_recent {
        return html! {};
    }
    quick_access("quick-access", "recent", "Recent", "recentItems")
}

/// "Bookmarks" sidebar block, filled client-side. Empty when disabled.
pub fn bookmarks_section(ctx: &SiteContext) -> Markup {
    if !ctx.config.ui.show_bookmarks {
        return html! {};
    }
    quick_access("favorites-section", "bookmarks", "Bookmarks", "bookmarkedItems")
}

fn quick_access(wrapper: &str, key: &str, label: &str, items_id: &str) -> Markup {
    let title = capitalized(key);
    html! {
        div class=(wrapper) {
            div.quick-access-title id={ (key) "Title" } data-section=(key) {
                div.title-left {
                    button.collapse-btn id={ "collapse" (title) } {
                        i.fas.fa-chevron-down {}
                    }
                    span.title-text { (label) }
                }
                button.clear-btn id={ "clear" (title) } { "Clear" }
            }
            div.collapsible-content id={ (key) "Content" } {
                div id=(items_id) {}
            }
        }
    }
}

fn capitalized(key: &str) -> String {
    let mut chars = key.chars();
    chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

// ============================================================================
// Contribute and footer
// ============================================================================

pub fn contribute_button(ctx: &SiteContext, url: &str) -> Markup {
    let ui = &ctx.config.ui;
    html! {
        @if ui.show_contribute {
            a.contribute-btn #contributeBtn href=(url) {
                i.fas.fa-edit {}
                " "
                span.contribute-text { (ui.contribute_text) }
            }
        }
    }
}

pub fn contribute_footer_link(ctx: &SiteContext, url: &str) -> Markup {
    let ui = &ctx.config.ui;
    html! {
        @if ui.show_contribute {
            li { a href=(url) { (ui.contribute_text) } }
        }
    }
}

/// Footer copyright, timestamp and credit lines. Empty when all are off.
pub fn footer_bottom(ctx: &SiteContext) -> Markup {
    let footer = &ctx.config.footer;
    let stamp = &ctx.stamp;

    let mut lines: Vec<Markup> = Vec::new();
    if footer.show_copyright {
        let copyright = if footer.copyright_text.is_empty() {
            html! { "© " (stamp.year) " " (ctx.site_name()) }
        } else {
            // Custom copyright text is trusted HTML from the site owner.
            PreEscaped(
                footer
                    .copyright_text
                    .replace("{year}", &stamp.year.to_string())
                    .replace("{site_name}", ctx.site_name()),
            )
        };
        lines.push(html! {
            p {
                (copyright)
                @if footer.show_timestamp {
                    ". Generated on " (stamp.display) "."
                } @else {
                    "."
                }
            }
        });
    } else if footer.show_timestamp {
        lines.push(html! { p { "Generated on " (stamp.display) "." } });
    }
    if footer.show_powered_by {
        lines.push(html! {
            p.powered-by {
                "Made with " i.fas.fa-heart.heart-icon {} " using "
                a href=(PROJECT_URL) target="_blank" rel="noopener" { "Grimoire" }
            }
        });
    }

    if lines.is_empty() {
        return html! {};
    }
    html! {
        div.footer-bottom {
            div.footer-bottom-content {
                @for line in lines { (line) }
            }
        }
    }
}

// ============================================================================
// Landing page
// ============================================================================

/// Default landing-page body used when the content root has no `index.md`.
pub fn welcome(ctx: &SiteContext, scan: &ScanResult) -> Markup {
    let mut keys: Vec<&str> = scan.categories.keys().collect();
    keys.sort_unstable();

    html! {
        div.article-content {
            div.welcome-section {
                h1.welcome-title {
                    span.title-icon { i.fas.fa-book-open {} }
                    " Welcome to " (ctx.site_name())
                }
                p.welcome-description {
                    (ctx.description()) ". Browse " (scan.pages.len()) " articles across "
                    (scan.categories.len()) " categories."
                }
                div.welcome-cards {
                    @for key in keys.into_iter().take(WELCOME_CARD_LIMIT) {
                        @if let Some(first) = scan.category_pages(key).first() {
                            a.welcome-card href=(first.url) data-page=(first.id) {
                                i class=(category_icon(key, &ctx.config.ui)) {}
                                " "
                                span { (ctx.formatter.format(key)) }
                            }
                        }
                    }
                }
                div.welcome-search-prompt {
                    p {
                        i.fas.fa-lightbulb {}
                        " Use the search bar or browse categories to find what you need."
                    }
                }
            }
        }
    }
}

// ============================================================================
// Client data
// ============================================================================

#[derive(Serialize)]
struct PageDataEntry<'a> {
    page: &'a str,
    category: &'a str,
    url: &'a str,
    levels: &'a [String],
    reading_time: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteConfigData<'a> {
    site_name: &'a str,
    site_url: &'a str,
}

/// `window.siteConfig` and `window.pageData` assignments, shared by every page.
pub fn site_data_js(ctx: &SiteContext, pages: &[Page]) -> Result<String, serde_json::Error> {
    let site = SiteConfigData {
        site_name: ctx.site_name(),
        site_url: &ctx.config.site.url,
    };
    let data: BTreeMap<&str, PageDataEntry> = pages
        .iter()
        .map(|p| {
            (
                p.id.as_str(),
                PageDataEntry {
                    page: &p.title,
                    category: &p.category,
                    url: &p.url,
                    levels: &p.levels,
                    reading_time: p.reading_time,
                },
            )
        })
        .collect();

    Ok(format!(
        "window.siteConfig = {};\nwindow.pageData = {};\n",
        script_json(&serde_json::to_string_pretty(&site)?),
        script_json(&serde_json::to_string_pretty(&data)?),
    ))
}

/// `window.currentPageId` assignment for one page.
pub fn current_page_js(id: &str) -> Result<String, serde_json::Error> {
    Ok(format!(
        "window.currentPageId = {};",
        script_json(&serde_json::to_string(id)?)
    ))
}

/// JSON made safe for an inline `<script>`: `</` cannot close the element.
fn script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
