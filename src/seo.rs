//! Search-engine metadata.
//!
//! Everything here is a pure function of the page being rendered and the
//! site settings: titles, descriptions, keywords, canonical links, JSON-LD
//! blocks, the sitemap and robots.txt. Values are returned unescaped; the
//! page renderer escapes them for the attribute they land in.

use crate::config::{SeoConfig, SiteSection};
use crate::types::{Frontmatter, GENERAL_CATEGORY, Page};
use serde_json::json;

/// Upper bound for description-like fields, in characters.
pub const DESCRIPTION_LIMIT: usize = 160;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Root-level static pages always listed in the sitemap.
pub const SITEMAP_STATIC_PAGES: &[&str] = &["about.html", "contribute.html"];

/// Path of the social preview image under the site root.
const OG_IMAGE_PATH: &str = "assets/img/og-image.jpg";

/// The page a set of metadata is generated for.
#[derive(Debug, Clone, Copy)]
pub enum SeoPage<'a> {
    Index,
    Static {
        title: &'a str,
        url: &'a str,
        frontmatter: &'a Frontmatter,
    },
    Content(&'a Page),
}

impl<'a> SeoPage<'a> {
    fn title(&self) -> Option<&'a str> {
        match *self {
            SeoPage::Index => None,
            SeoPage::Static { title, .. } => Some(title),
            SeoPage::Content(page) => Some(&page.title),
        }
    }

    fn levels(&self) -> &'a [String] {
        match *self {
            SeoPage::Content(page) => &page.levels,
            _ => Default::default(),
        }
    }

    fn url(&self) -> &'a str {
        match *self {
            SeoPage::Index => "",
            SeoPage::Static { url, .. } => url,
            SeoPage::Content(page) => &page.url,
        }
    }

    fn frontmatter(&self) -> Option<&'a Frontmatter> {
        match *self {
            SeoPage::Index => None,
            SeoPage::Static { frontmatter, .. } => Some(frontmatter),
            SeoPage::Content(page) => Some(&page.frontmatter),
        }
    }
}

/// All per-page SEO values, ready for template binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoFields {
    pub page_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical_url: String,
    pub og_title: String,
    pub og_image_url: String,
    pub json_ld: String,
}

/// SEO generator bound to one site's settings.
#[derive(Debug, Clone, Copy)]
pub struct SeoEmitter<'a> {
    pub site: &'a SiteSection,
    pub seo: &'a SeoConfig,
}

impl<'a> SeoEmitter<'a> {
    pub fn new(site: &'a SiteSection, seo: &'a SeoConfig) -> Self {
        Self { site, seo }
    }

    fn base_url(&self) -> &str {
        self.site.url.trim_end_matches('/')
    }

    pub fn fields(&self, page: SeoPage) -> SeoFields {
        SeoFields {
            page_title: self.page_title(page),
            meta_description: self.meta_description(page),
            meta_keywords: self.meta_keywords(page),
            canonical_url: self.canonical_url(page.url()),
            og_title: page.title().unwrap_or(&self.site.name).to_string(),
            og_image_url: self.og_image_url(),
            json_ld: self.json_ld(page),
        }
    }

    pub fn page_title(&self, page: SeoPage) -> String {
        let site = &self.site.name;
        match page {
            SeoPage::Index => format!("{site} - {}", self.site.description),
            SeoPage::Static { title, .. } => format!("{title} | {site}"),
            SeoPage::Content(p) => match p.levels.first() {
                Some(top) => format!("{} - {top} | {site}", p.title),
                None => format!("{} | {site}", p.title),
            },
        }
    }

    /// Frontmatter `description`, else the page template, else the site
    /// description.
    pub fn meta_description(&self, page: SeoPage) -> String {
        let site = &self.site.name;
        let text = match page {
            SeoPage::Index => match &self.seo.index_description {
                Some(template) => template.replace("{site_name}", site),
                None => format!("{site} - comprehensive documentation and guides."),
            },
            _ => {
                let from_frontmatter = page.frontmatter().and_then(|fm| fm.text("description"));
                let template = self.seo.page_description_template.trim();
                match (from_frontmatter, page.title()) {
                    (Some(description), _) => description,
                    (None, Some(title)) if !template.is_empty() => {
                        let category = page
                            .levels()
                            .last()
                            .map_or(GENERAL_CATEGORY, String::as_str);
                        template
                            .replace("{title}", title)
                            .replace("{category}", category)
                            .replace("{site_name}", site)
                    }
                    _ => self.site.description.clone(),
                }
            }
        };
        truncate_chars(&text, DESCRIPTION_LIMIT)
    }

    /// Base keywords, then every level and the title, lower-cased.
    pub fn meta_keywords(&self, page: SeoPage) -> String {
        let mut keywords = vec![self.seo.keywords.clone()];
        if !matches!(page, SeoPage::Index) {
            keywords.extend(page.levels().iter().map(|l| l.to_lowercase()));
            if let Some(title) = page.title().filter(|t| !t.is_empty()) {
                keywords.push(title.to_lowercase());
            }
        }
        keywords.join(", ")
    }

    /// Base URL joined to a page URL. An empty page URL yields the base.
    pub fn canonical_url(&self, page_url: &str) -> String {
        if page_url.is_empty() {
            return self.base_url().to_string();
        }
        format!("{}/{}", self.base_url(), page_url.trim_start_matches('/'))
    }

    pub fn og_image_url(&self) -> String {
        format!("{}/{OG_IMAGE_PATH}", self.base_url())
    }

    /// JSON-LD script block: `WebSite` with a search action for the index,
    /// `TechArticle` for everything else.
    pub fn json_ld(&self, page: SeoPage) -> String {
        let base = self.base_url();
        let name = &self.site.name;
        let data = match page {
            SeoPage::Index => json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": name,
                "description": self.site.description,
                "url": base,
                "potentialAction": {
                    "@type": "SearchAction",
                    "target": format!("{base}/?q={{search_term_string}}"),
                    "query-input": "required name=search_term_string",
                },
            }),
            _ => {
                let canonical = self.canonical_url(page.url());
                let mut article = json!({
                    "@context": "https://schema.org",
                    "@type": "TechArticle",
                    "headline": page.title().unwrap_or("Article"),
                    "description": self.meta_description(page),
                    "url": canonical,
                    "author": { "@type": "Organization", "name": name },
                    "publisher": {
                        "@type": "Organization",
                        "name": name,
                        "logo": { "@type": "ImageObject", "url": self.og_image_url() },
                    },
                    "mainEntityOfPage": { "@type": "WebPage", "@id": canonical },
                });
                if let Some(section) = page.levels().first() {
                    article["articleSection"] = json!(section);
                }
                article
            }
        };
        // Pretty-printing a `Value` cannot fail.
        let body = serde_json::to_string_pretty(&data).unwrap_or_default();
        format!(
            "<script type=\"application/ld+json\">\n{}\n</script>",
            body.replace("</", "<\\/")
        )
    }

    /// Sitemap listing home, the fixed static pages and every content page.
    pub fn sitemap(&self, pages: &[Page], lastmod: &str) -> String {
        let base = self.base_url();
        let mut entries: Vec<(String, &str, &str)> = vec![(format!("{base}/"), "weekly", "1.0")];
        entries.extend(
            SITEMAP_STATIC_PAGES
                .iter()
                .map(|p| (format!("{base}/{p}"), "monthly", "0.8")),
        );
        entries.extend(
            pages
                .iter()
                .map(|p| (format!("{base}/{}", p.url), "weekly", "0.7")),
        );

        let mut xml = String::with_capacity(256 + entries.len() * 128);
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{SITEMAP_NS}\">\n"));
        for (loc, changefreq, priority) in entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str(&format!("    <changefreq>{changefreq}</changefreq>\n"));
            xml.push_str(&format!("    <priority>{priority}</priority>\n"));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }

    pub fn robots_txt(&self) -> String {
        format!(
            "# robots.txt generated by Grimoire\n\
             User-agent: *\n\
             Allow: /\n\
             \n\
             Sitemap: {}/sitemap.xml\n\
             \n\
             Crawl-delay: 1\n",
            self.base_url()
        )
    }
}

/// First `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
