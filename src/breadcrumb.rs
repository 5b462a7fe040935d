//! Breadcrumb trail above each article.
//!
//! Content pages show every level's display name between the home link and
//! the page title. The index shows only the (unlinked) home segment, and
//! static pages show home plus their own title.

use crate::types::Page;
use maud::{Markup, html};

/// Which trail to draw.
#[derive(Debug, Clone, Copy)]
pub enum Trail<'a> {
    /// The landing page itself.
    Home,
    /// A root-level static page such as About.
    Static { title: &'a str },
    /// A content page with its full level path.
    Page(&'a Page),
}

/// Settings shared by every breadcrumb on one page.
#[derive(Debug, Clone, Copy)]
pub struct Breadcrumb<'a> {
    pub home_url: &'a str,
    pub home_label: &'a str,
    /// Preformatted generation date.
    pub generated: &'a str,
}

impl Breadcrumb<'_> {
    pub fn render(&self, trail: Trail) -> Markup {
        html! {
            nav.breadcrumb-nav {
                div.breadcrumb #breadcrumb {
                    @match trail {
                        Trail::Home => {
                            span.breadcrumb-home { (self.home_icon()) }
                        }
                        Trail::Static { title } => {
                            (self.home_link())
                            (separator())
                            span.breadcrumb-category #breadcrumbCategory { (title) }
                        }
                        Trail::Page(page) => {
                            (self.home_link())
                            @for (i, level) in page.levels.iter().enumerate() {
                                (separator())
                                span.breadcrumb-level data-level=(i + 1) { (level) }
                            }
                            (separator())
                            span.breadcrumb-page #breadcrumbPage { (page.title) }
                        }
                    }
                }
                div.breadcrumb-meta #breadcrumbMeta {
                    @if let Trail::Page(page) = trail {
                        span.reading-time {
                            i.fas.fa-clock {}
                            " " (page.reading_time) " min read"
                        }
                        " "
                    }
                    span #lastUpdated { "Generated " (self.generated) }
                }
            }
        }
    }

    fn home_icon(&self) -> Markup {
        html! { i.fas.fa-home {} " " (self.home_label) }
    }

    fn home_link(&self) -> Markup {
        html! {
            a.breadcrumb-home href=(self.home_url) data-page="welcome" { (self.home_icon()) }
        }
    }
}

fn separator() -> Markup {
    html! { " " span.breadcrumb-separator { "›" } " " }
}
