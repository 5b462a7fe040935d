//! HTML site generation.
//!
//! Takes the scan result and writes the finished site: every page is the
//! site template with its placeholders bound for that page.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): `index.md` from the content root when
//!   present, otherwise a welcome block with category cards
//! - **Content pages** (`/<folders>/<name>.html`): one per scanned document,
//!   mirroring the source layout
//! - **Static pages** (`/<name>.html`): one per Markdown file in the pages
//!   folder, e.g. About and Contribute
//! - **`sitemap.xml`** (optional) and **`robots.txt`**
//!
//! ## Output Structure
//!
//! ```text
//! output/
//! ├── index.html
//! ├── about.html                 # From pages folder
//! ├── faq.html                   # Root-level content page
//! ├── 01-guides/
//! │   ├── intro.html
//! │   └── 02-advanced/
//! │       └── tuning.html
//! ├── assets/
//! │   ├── css/style.css          # Copied from the template folder
//! │   ├── js/app.js
//! │   └── img/
//! ├── sitemap.xml
//! └── robots.txt
//! ```
//!
//! ## Relative Links
//!
//! The site works from any base path, so every link is relative. A page's
//! output depth (folders below the output root) decides how many `../`
//! segments prefix asset, home and navigation links. Navigation is rendered
//! once per distinct depth and shared by all pages at that depth.
//!
//! ## Parallelism
//!
//! Once the page list, tree and navigation are final, content pages are
//! rendered and written in parallel with rayon. Nothing is shared mutably.

use crate::breadcrumb::{Breadcrumb, Trail};
use crate::context::SiteContext;
use crate::frontmatter;
use crate::markdown;
use crate::nav;
use crate::naming::title_case;
use crate::partials;
use crate::scan::INDEX_FILE;
use crate::seo::{SeoEmitter, SeoPage};
use crate::template::{self, Bindings, Placeholder};
use crate::tree::{self, CategoryNode};
use crate::types::{Frontmatter, Page, ScanResult};
use maud::{Markup, PreEscaped, html};
use rayon::prelude::*;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No Markdown files found in {}", .0.display())]
    NoPages(PathBuf),
}

/// Template file name inside the template folder.
pub const TEMPLATE_FILE: &str = "template.html";

/// Template compiled into the binary, used when the folder has none.
pub const DEFAULT_TEMPLATE: &str = include_str!("../static/template.html");

/// Client-side id of the landing page.
pub const WELCOME_ID: &str = "welcome";

/// What a build produced, for the CLI summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Whether the index came from `index.md` rather than the welcome block.
    pub index_from_markdown: bool,
    /// Output paths of content pages, relative to the output root.
    pub content_pages: Vec<String>,
    /// `(title, file name)` of static pages.
    pub static_pages: Vec<(String, String)>,
    /// Asset paths copied under `assets/`.
    pub assets: Vec<String>,
    pub builtin_template: bool,
    pub sitemap: bool,
    pub categories: usize,
}

/// Depth-relative links for one output depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeLinks {
    pub assets: String,
    pub home: String,
    pub about: String,
    pub contribute: String,
}

impl RelativeLinks {
    pub fn for_depth(depth: usize) -> Self {
        let up = if depth == 0 {
            "./".to_string()
        } else {
            nav::url_prefix(depth)
        };
        Self {
            assets: format!("{}assets/", nav::url_prefix(depth)),
            home: format!("{up}index.html"),
            about: format!("{up}about.html"),
            contribute: format!("{up}contribute.html"),
        }
    }
}

/// A root-level page from the static pages folder.
#[derive(Debug, Clone)]
pub struct StaticPage {
    pub stem: String,
    pub title: String,
    pub body_html: String,
    pub frontmatter: Frontmatter,
}

impl StaticPage {
    pub fn file_name(&self) -> String {
        format!("{}.html", self.stem)
    }
}

/// Write the whole site for `scan` into the context's output folder.
pub fn generate(ctx: &SiteContext, scan: &ScanResult) -> Result<GenerateReport, GenerateError> {
    if scan.pages.is_empty() {
        return Err(GenerateError::NoPages(ctx.paths.content.clone()));
    }
    let output = &ctx.paths.output;
    fs::create_dir_all(output)?;

    let assets = copy_assets(&ctx.paths.template, output)?;
    let (template, builtin_template) = load_template(&ctx.paths.template)?;
    let renderer = Renderer::new(ctx, scan, &template)?;

    // Index
    let index_body = load_index_body(&ctx.paths.content);
    let index_from_markdown = index_body.is_some();
    fs::write(output.join("index.html"), renderer.render_index(index_body)?)?;
    tracing::info!("Generated index.html");

    // Content pages
    let content_pages = scan
        .pages
        .par_iter()
        .map(|page| {
            let html = renderer.render_content(page)?;
            let path = output.join(&page.url);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, html)?;
            tracing::debug!(path = %path.display(), "Generated page");
            Ok(page.url.clone())
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;
    tracing::info!(count = content_pages.len(), "Generated content pages");

    // Static pages
    let mut static_pages = Vec::new();
    for page in load_static_pages(&ctx.paths.pages, &ctx.paths.content)? {
        fs::write(output.join(page.file_name()), renderer.render_static(&page)?)?;
        tracing::info!(file = %page.file_name(), "Generated static page");
        static_pages.push((page.title.clone(), page.file_name()));
    }

    let sitemap = ctx.config.generator.generate_sitemap;
    if sitemap {
        fs::write(
            output.join("sitemap.xml"),
            renderer.seo.sitemap(&scan.pages, &ctx.stamp.iso_date),
        )?;
    }
    fs::write(output.join("robots.txt"), renderer.seo.robots_txt())?;

    Ok(GenerateReport {
        output_dir: output.clone(),
        index_from_markdown,
        content_pages,
        static_pages,
        assets,
        builtin_template,
        sitemap,
        categories: scan.categories.len(),
    })
}

// ============================================================================
// Inputs: template, assets, index, static pages
// ============================================================================

/// Read `template.html` from the template folder, falling back to the
/// built-in template when the file does not exist.
pub fn load_template(template_dir: &Path) -> Result<(String, bool), GenerateError> {
    let path = template_dir.join(TEMPLATE_FILE);
    match fs::read_to_string(&path) {
        Ok(text) => Ok((text, false)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Template not found, using built-in template");
            Ok((DEFAULT_TEMPLATE.to_string(), true))
        }
        Err(e) => Err(e.into()),
    }
}

/// Copy stylesheet, scripts and images from the template folder into
/// `output/assets/`. Missing pieces are skipped.
pub fn copy_assets(template_dir: &Path, output: &Path) -> Result<Vec<String>, GenerateError> {
    let assets = output.join("assets");
    let mut copied = Vec::new();

    let mut copy = |src: PathBuf, rel: String| -> Result<(), GenerateError> {
        let dst = assets.join(&rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst)?;
        tracing::debug!(from = %src.display(), to = %dst.display(), "Copied asset");
        copied.push(rel);
        Ok(())
    };

    let css = template_dir.join("css").join("style.css");
    if css.is_file() {
        copy(css, "css/style.css".to_string())?;
    } else {
        tracing::warn!(path = %css.display(), "Stylesheet not found, skipping");
    }

    let app = template_dir.join("js").join("app.js");
    if app.is_file() {
        copy(app, "js/app.js".to_string())?;
    } else {
        tracing::warn!(path = %app.display(), "Script not found, skipping");
    }

    for file in sorted_files(&template_dir.join("js")) {
        let name = file_name(&file);
        let is_extra_js = file.extension().is_some_and(|e| e == "js") && name != "app.js";
        if is_extra_js {
            copy(file, format!("js/{name}"))?;
        }
    }

    for file in sorted_files(&template_dir.join("img")) {
        let name = file_name(&file);
        copy(file, format!("img/{name}"))?;
    }

    Ok(copied)
}

/// Regular files directly inside `dir`, sorted. Empty when `dir` is missing.
fn sorted_files(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rendered body of `index.md` in the content root, if there is one.
pub fn load_index_body(content_dir: &Path) -> Option<String> {
    let path = content_dir.join(INDEX_FILE);
    if !path.is_file() {
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(text) => Some(markdown::to_html(&frontmatter::parse(&text).body)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Cannot read index, using welcome page");
            None
        }
    }
}

/// Markdown files directly in the static pages folder, sorted by name.
///
/// A missing folder yields no pages. Unreadable files are logged and skipped.
/// When the pages folder is the content root itself, its files are already
/// content pages and nothing is returned.
pub fn load_static_pages(
    pages_dir: &Path,
    content_dir: &Path,
) -> Result<Vec<StaticPage>, GenerateError> {
    if !pages_dir.is_dir() {
        tracing::debug!(path = %pages_dir.display(), "No static pages folder");
        return Ok(Vec::new());
    }
    if same_dir(pages_dir, content_dir) {
        tracing::warn!(path = %pages_dir.display(), "Pages folder is the content folder, skipping static pages");
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for path in sorted_files(pages_dir) {
        if !path.extension().is_some_and(|e| e == "md") {
            continue;
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable static page");
                continue;
            }
        };
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let doc = frontmatter::parse(&text);
        let title = doc
            .frontmatter
            .text("title")
            .unwrap_or_else(|| title_case(&stem.replace('-', " ")));
        pages.push(StaticPage {
            title,
            body_html: markdown::to_html(&doc.body),
            frontmatter: doc.frontmatter,
            stem,
        });
    }
    Ok(pages)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

// ============================================================================
// Page rendering
// ============================================================================

/// Everything shared between pages, computed once per build.
struct Renderer<'a> {
    ctx: &'a SiteContext,
    scan: &'a ScanResult,
    template: &'a str,
    seo: SeoEmitter<'a>,
    tree: CategoryNode<'a>,
    /// Navigation markup keyed by output depth.
    navigation: BTreeMap<usize, String>,
    site_data: String,
    recent: String,
    bookmarks: String,
    footer: String,
}

impl<'a> Renderer<'a> {
    fn new(
        ctx: &'a SiteContext,
        scan: &'a ScanResult,
        template: &'a str,
    ) -> Result<Self, GenerateError> {
        let tree = tree::build(&scan.pages);
        let depths: BTreeSet<usize> = std::iter::once(0)
            .chain(scan.pages.iter().map(Page::output_depth))
            .collect();
        let navigation = depths
            .into_iter()
            .map(|d| (d, nav::render(&tree, d, &ctx.config.ui).into_string()))
            .collect();

        Ok(Self {
            ctx,
            scan,
            template,
            seo: SeoEmitter::new(&ctx.config.site, &ctx.config.seo),
            site_data: partials::site_data_js(ctx, &scan.pages)?,
            recent: partials::recent_section(ctx).into_string(),
            bookmarks: partials::bookmarks_section(ctx).into_string(),
            footer: partials::footer_bottom(ctx).into_string(),
            navigation,
            tree,
        })
    }

    fn navigation(&self, depth: usize) -> Cow<'_, str> {
        match self.navigation.get(&depth) {
            Some(html) => Cow::Borrowed(html.as_str()),
            None => Cow::Owned(nav::render(&self.tree, depth, &self.ctx.config.ui).into_string()),
        }
    }

    fn breadcrumb<'b>(&'b self, links: &'b RelativeLinks) -> Breadcrumb<'b> {
        Breadcrumb {
            home_url: &links.home,
            home_label: &self.ctx.config.ui.home_label,
            generated: &self.ctx.stamp.display,
        }
    }

    fn render_index(&self, index_body: Option<String>) -> Result<String, GenerateError> {
        let links = RelativeLinks::for_depth(0);
        let content = html! {
            (self.breadcrumb(&links).render(Trail::Home))
            @match index_body {
                Some(body) => {
                    div.article-content { (PreEscaped(body)) }
                }
                None => {
                    (partials::welcome(self.ctx, self.scan))
                }
            }
        };
        self.render(0, &links, content, WELCOME_ID, SeoPage::Index)
    }

    fn render_content(&self, page: &Page) -> Result<String, GenerateError> {
        let depth = page.output_depth();
        let links = RelativeLinks::for_depth(depth);
        let content = article(self.breadcrumb(&links).render(Trail::Page(page)), &page.body_html);
        self.render(depth, &links, content, &page.id, SeoPage::Content(page))
    }

    fn render_static(&self, page: &StaticPage) -> Result<String, GenerateError> {
        let links = RelativeLinks::for_depth(0);
        let crumb = self.breadcrumb(&links).render(Trail::Static { title: &page.title });
        let content = article(crumb, &page.body_html);
        let url = page.file_name();
        let seo = SeoPage::Static {
            title: &page.title,
            url: &url,
            frontmatter: &page.frontmatter,
        };
        self.render(0, &links, content, &page.stem, seo)
    }

    fn render(
        &self,
        depth: usize,
        links: &RelativeLinks,
        content: Markup,
        current_id: &str,
        seo_page: SeoPage,
    ) -> Result<String, GenerateError> {
        let ctx = self.ctx;
        let contribute_url = ctx
            .config
            .ui
            .contribute_url
            .as_deref()
            .unwrap_or(&links.contribute);
        let seo = self.seo.fields(seo_page);
        let page_data = format!("{}{}", self.site_data, partials::current_page_js(current_id)?);

        let mut b = Bindings::new();
        b.set(Placeholder::SiteName, template::escape(ctx.site_name()))
            .set(Placeholder::SiteDescription, template::escape(ctx.description()))
            .set(Placeholder::NavigationHtml, self.navigation(depth).into_owned())
            .set(Placeholder::DynamicPageData, page_data)
            .set(Placeholder::GenerationDate, ctx.stamp.display.as_str())
            .set(Placeholder::CurrentYear, ctx.stamp.year.to_string())
            .set(Placeholder::SiteNameInitial, template::escape(&ctx.site_name_initial()))
            .set(Placeholder::DynamicContent, content.into_string())
            .set(Placeholder::TotalPages, self.scan.pages.len().to_string())
            .set(Placeholder::TotalCategories, self.scan.categories.len().to_string())
            .set(Placeholder::HomeUrl, links.home.as_str())
            .set(Placeholder::AssetsPath, links.assets.as_str())
            .set(Placeholder::ContributeUrl, template::escape(contribute_url))
            .set(
                Placeholder::ContributeButton,
                partials::contribute_button(ctx, contribute_url).into_string(),
            )
            .set(
                Placeholder::ContributeFooterLink,
                partials::contribute_footer_link(ctx, contribute_url).into_string(),
            )
            .set(Placeholder::AboutUrl, links.about.as_str())
            .set(Placeholder::GithubUrl, template::escape(&ctx.config.site.github_url))
            .set(Placeholder::RecentSection, self.recent.as_str())
            .set(Placeholder::BookmarksSection, self.bookmarks.as_str())
            .set(Placeholder::FooterBottom, self.footer.as_str())
            .set(Placeholder::PageTitle, template::escape(&seo.page_title))
            .set(Placeholder::MetaDescription, template::escape(&seo.meta_description))
            .set(Placeholder::MetaKeywords, template::escape(&seo.meta_keywords))
            .set(Placeholder::CanonicalUrl, template::escape(&seo.canonical_url))
            .set(Placeholder::OgTitle, template::escape(&seo.og_title))
            .set(Placeholder::OgImageUrl, template::escape(&seo.og_image_url))
            .set(Placeholder::JsonLd, seo.json_ld);
        debug_assert!(b.missing().is_empty(), "unbound placeholders: {:?}", b.missing());

        Ok(template::render(self.template, &b))
    }
}

/// Breadcrumb followed by the article body.
fn article(breadcrumb: Markup, body_html: &str) -> Markup {
    html! {
        (breadcrumb)
        div.article-content {
            (PreEscaped(body_html))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::context::{GenerationStamp, SitePaths};
    use crate::test_helpers::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    /// A workspace with content, template and pages folders under one temp dir.
    struct Site {
        tmp: TempDir,
        ctx: SiteContext,
    }

    impl Site {
        fn new(files: &[(&str, &str)]) -> Self {
            Self::with_config(files, |_| {})
        }

        fn with_config(files: &[(&str, &str)], edit: impl FnOnce(&mut SiteConfig)) -> Self {
            let tmp = content_tree(files);
            let mut config = SiteConfig::default();
            config.site.name = "Field Notes".to_string();
            config.site.url = "https://notes.example.com".to_string();
            edit(&mut config);
            let paths = SitePaths {
                content: tmp.path().join("notes"),
                output: tmp.path().join("out"),
                template: tmp.path().join("theme"),
                pages: tmp.path().join("pages"),
            };
            let stamp = GenerationStamp::at(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
            let ctx = SiteContext::new(config, paths, stamp);
            Self { tmp, ctx }
        }

        fn build(&self) -> GenerateReport {
            let scan = scan_default(&self.ctx.paths.content);
            generate(&self.ctx, &scan).unwrap()
        }

        fn read(&self, rel: &str) -> String {
            read_output(&self.ctx.paths.output, rel)
        }

        fn out(&self) -> &Path {
            &self.ctx.paths.output
        }
    }

    const MINI_TEMPLATE: &str = "<title>{{PAGE_TITLE}}</title>\
        <link href=\"{{ASSETS_PATH}}css/style.css\">\
        <a id=\"home\" href=\"{{HOME_URL}}\"></a>\
        <nav>{{NAVIGATION_HTML}}</nav>\
        <main>{{DYNAMIC_CONTENT_PLACEHOLDER}}</main>\
        <script>{{DYNAMIC_PAGE_DATA}}</script>\
        {{CONTRIBUTE_BUTTON}}|{{CONTRIBUTE_URL}}|{{ABOUT_URL}}|{{UNKNOWN_TOKEN}}";

    // =========================================================================
    // Relative links
    // =========================================================================

    #[test]
    fn links_at_root() {
        let links = RelativeLinks::for_depth(0);
        assert_eq!(links.assets, "assets/");
        assert_eq!(links.home, "./index.html");
        assert_eq!(links.about, "./about.html");
        assert_eq!(links.contribute, "./contribute.html");
    }

    #[test]
    fn links_below_root() {
        let links = RelativeLinks::for_depth(2);
        assert_eq!(links.assets, "../../assets/");
        assert_eq!(links.home, "../../index.html");
        assert_eq!(links.contribute, "../../contribute.html");
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    #[test]
    fn missing_template_uses_builtin() {
        let tmp = TempDir::new().unwrap();
        let (text, builtin) = load_template(tmp.path()).unwrap();
        assert!(builtin);
        for &p in Placeholder::ALL {
            assert!(text.contains(&p.token()), "built-in template lacks {}", p.token());
        }
    }

    #[test]
    fn template_folder_file_preferred() {
        let tmp = content_tree(&[("template.html", "<p>{{SITE_NAME}}</p>")]);
        let (text, builtin) = load_template(tmp.path()).unwrap();
        assert!(!builtin);
        assert_eq!(text, "<p>{{SITE_NAME}}</p>");
    }

    #[test]
    fn assets_copied_when_present() {
        let tmp = content_tree(&[
            ("theme/css/style.css", "body {}"),
            ("theme/js/app.js", "//app"),
            ("theme/js/prism-custom.js", "//prism"),
            ("theme/js/readme.txt", "not js"),
            ("theme/img/og-image.jpg", "jpg"),
        ]);
        let out = tmp.path().join("out");
        let copied = copy_assets(&tmp.path().join("theme"), &out).unwrap();
        assert_eq!(
            copied,
            vec!["css/style.css", "js/app.js", "js/prism-custom.js", "img/og-image.jpg"]
        );
        assert_eq!(read_output(&out, "assets/js/prism-custom.js"), "//prism");
        assert!(!out.join("assets/js/readme.txt").exists());
    }

    #[test]
    fn missing_assets_tolerated() {
        let tmp = TempDir::new().unwrap();
        let copied = copy_assets(&tmp.path().join("nope"), &tmp.path().join("out")).unwrap();
        assert!(copied.is_empty());
    }

    #[test]
    fn static_pages_sorted_with_titles() {
        let tmp = content_tree(&[
            ("pages/contribute.md", "How to help"),
            ("pages/about-us.md", "Who we are"),
            ("pages/legal.md", "---\ntitle: Legal Notice\n---\nFine print"),
            ("pages/notes.txt", "ignored"),
        ]);
        let pages = load_static_pages(&tmp.path().join("pages"), &tmp.path().join("notes")).unwrap();
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["About Us", "Contribute", "Legal Notice"]);
        assert!(pages[2].body_html.contains("Fine print"));
    }

    #[test]
    fn missing_pages_folder_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(load_static_pages(&tmp.path().join("pages"), tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn index_body_strips_frontmatter() {
        let tmp = content_tree(&[("index.md", "---\ntitle: Home\n---\n# Welcome home")]);
        let body = load_index_body(tmp.path()).unwrap();
        assert!(body.contains("Welcome home</h1>"));
        assert!(!body.contains("title: Home"));
        assert!(load_index_body(&tmp.path().join("missing")).is_none());
    }

    // =========================================================================
    // Full generation
    // =========================================================================

    #[test]
    fn empty_scan_is_error() {
        let site = Site::new(&[("notes/.keep", "")]);
        let scan = scan_default(&site.ctx.paths.content);
        assert!(matches!(generate(&site.ctx, &scan), Err(GenerateError::NoPages(_))));
    }

    #[test]
    fn writes_expected_files() {
        let site = Site::new(&[
            ("notes/faq.md", "Questions"),
            ("notes/01-guides/intro.md", "# Intro"),
            ("notes/01-guides/02-advanced/tuning.md", "Knobs"),
            ("pages/about.md", "About us"),
        ]);
        let report = site.build();
        for rel in [
            "index.html",
            "faq.html",
            "01-guides/intro.html",
            "01-guides/02-advanced/tuning.html",
            "about.html",
            "sitemap.xml",
            "robots.txt",
        ] {
            assert!(site.out().join(rel).is_file(), "missing {rel}");
        }
        assert_eq!(report.content_pages.len(), 3);
        assert_eq!(report.static_pages, vec![("About".to_string(), "about.html".to_string())]);
        assert!(report.builtin_template);
        assert!(report.sitemap);
        assert_eq!(report.categories, 2);
    }

    #[test]
    fn every_placeholder_filled_with_builtin_template() {
        let site = Site::new(&[("notes/01-guides/intro.md", "# Intro")]);
        site.build();
        for rel in ["index.html", "01-guides/intro.html"] {
            let html = site.read(rel);
            for &p in Placeholder::ALL {
                assert!(!html.contains(&p.token()), "{rel} still has {}", p.token());
            }
        }
    }

    #[test]
    fn depth_aware_links() {
        let site = Site::new(&[
            ("theme/template.html", MINI_TEMPLATE),
            ("notes/faq.md", "x"),
            ("notes/01-guides/02-advanced/tuning.md", "x"),
        ]);
        site.build();

        let deep = site.read("01-guides/02-advanced/tuning.html");
        assert!(deep.contains(r#"href="../../assets/css/style.css""#));
        assert!(deep.contains(r#"<a id="home" href="../../index.html">"#));
        assert!(deep.contains(r#"href="../../faq.html""#));
        assert!(deep.contains("|../../contribute.html|../../about.html|"));

        let root = site.read("faq.html");
        assert!(root.contains(r#"href="assets/css/style.css""#));
        assert!(root.contains(r#"href="./index.html""#));
        assert!(root.contains(r#"href="01-guides/02-advanced/tuning.html""#));
    }

    #[test]
    fn unknown_tokens_survive() {
        let site = Site::new(&[("theme/template.html", MINI_TEMPLATE), ("notes/a.md", "x")]);
        site.build();
        assert!(site.read("a.html").contains("{{UNKNOWN_TOKEN}}"));
    }

    #[test]
    fn configured_contribute_url_used_everywhere() {
        let site = Site::with_config(
            &[("theme/template.html", MINI_TEMPLATE), ("notes/x/a.md", "x")],
            |c| c.ui.contribute_url = Some("https://github.com/me/docs".to_string()),
        );
        site.build();
        let html = site.read("x/a.html");
        assert!(html.contains(r#"href="https://github.com/me/docs""#));
        assert!(html.contains("|https://github.com/me/docs|"));
    }

    #[test]
    fn current_page_ids() {
        let site = Site::new(&[
            ("theme/template.html", MINI_TEMPLATE),
            ("notes/01-guides/intro.md", "x"),
            ("pages/about.md", "x"),
        ]);
        site.build();
        assert!(site.read("index.html").contains(r#"window.currentPageId = "welcome";"#));
        assert!(site
            .read("01-guides/intro.html")
            .contains(r#"window.currentPageId = "01-guides-intro";"#));
        assert!(site.read("about.html").contains(r#"window.currentPageId = "about";"#));
    }

    #[test]
    fn index_prefers_markdown_over_welcome() {
        let site = Site::new(&[
            ("theme/template.html", MINI_TEMPLATE),
            ("notes/index.md", "# Start here"),
            ("notes/a.md", "x"),
        ]);
        let report = site.build();
        assert!(report.index_from_markdown);
        let html = site.read("index.html");
        assert!(html.contains("Start here</h1>"));
        assert!(!html.contains("welcome-section"));
    }

    #[test]
    fn index_falls_back_to_welcome() {
        let site = Site::new(&[("theme/template.html", MINI_TEMPLATE), ("notes/01-guides/a.md", "x")]);
        let report = site.build();
        assert!(!report.index_from_markdown);
        let html = site.read("index.html");
        assert!(html.contains("welcome-section"));
        assert!(html.contains(r#"href="01-guides/a.html""#));
    }

    #[test]
    fn uppercase_index_extension_never_replaces_landing_page() {
        let site = Site::new(&[
            ("theme/template.html", MINI_TEMPLATE),
            ("notes/index.MD", "# Shadow"),
            ("notes/01-guides/a.md", "x"),
        ]);
        site.build();
        let html = site.read("index.html");
        assert!(html.contains("welcome-section"));
        assert!(html.contains(r#"window.currentPageId = "welcome";"#));
        assert!(!html.contains("Shadow"));
    }

    #[test]
    fn sitemap_toggle() {
        let site = Site::with_config(&[("notes/a.md", "x")], |c| {
            c.generator.generate_sitemap = false;
        });
        let report = site.build();
        assert!(!report.sitemap);
        assert!(!site.out().join("sitemap.xml").exists());
        assert!(site.out().join("robots.txt").exists());
    }

    #[test]
    fn seo_values_escaped_in_attributes() {
        let site = Site::new(&[("notes/a.md", "---\ndescription: Use \"quotes\" & <tags>\n---\nx")]);
        site.build();
        let html = site.read("a.html");
        assert!(html.contains(r#"content="Use &quot;quotes&quot; &amp; &lt;tags&gt;""#));
    }

    #[test]
    fn output_kept_inside_temp_dir() {
        let site = Site::new(&[("notes/a.md", "x")]);
        site.build();
        assert!(site.out().starts_with(site.tmp.path()));
    }
}
