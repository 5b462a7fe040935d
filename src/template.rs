//! Page template placeholders.
//!
//! Templates are plain HTML with `{{NAME}}` tokens. The set of recognised
//! names is closed and listed in [`Placeholder::ALL`]; every page kind binds
//! all of them. Substitution is a single pass over the template, so a value
//! that itself contains `{{...}}` text is never expanded again. Tokens with
//! no binding, or names outside the set, are left in the output untouched.

use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z_]+)\}\}").expect("token pattern is valid"));

macro_rules! placeholders {
    ($($variant:ident => $name:literal,)*) => {
        /// A named slot in the page template.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Placeholder {
            $($variant,)*
        }

        impl Placeholder {
            pub const ALL: &'static [Placeholder] = &[$(Placeholder::$variant,)*];

            /// Token name without braces.
            pub fn name(self) -> &'static str {
                match self {
                    $(Placeholder::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Placeholder::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

placeholders! {
    SiteName => "SITE_NAME",
    SiteDescription => "SITE_DESCRIPTION",
    NavigationHtml => "NAVIGATION_HTML",
    DynamicPageData => "DYNAMIC_PAGE_DATA",
    GenerationDate => "GENERATION_DATE",
    CurrentYear => "CURRENT_YEAR",
    SiteNameInitial => "SITE_NAME_INITIAL",
    DynamicContent => "DYNAMIC_CONTENT_PLACEHOLDER",
    TotalPages => "TOTAL_PAGES",
    TotalCategories => "TOTAL_CATEGORIES",
    HomeUrl => "HOME_URL",
    AssetsPath => "ASSETS_PATH",
    ContributeUrl => "CONTRIBUTE_URL",
    ContributeButton => "CONTRIBUTE_BUTTON",
    ContributeFooterLink => "CONTRIBUTE_FOOTER_LINK",
    AboutUrl => "ABOUT_URL",
    GithubUrl => "GITHUB_URL",
    RecentSection => "RECENT_SECTION",
    BookmarksSection => "BOOKMARKS_SECTION",
    FooterBottom => "FOOTER_BOTTOM",
    PageTitle => "PAGE_TITLE",
    MetaDescription => "META_DESCRIPTION",
    MetaKeywords => "META_KEYWORDS",
    CanonicalUrl => "CANONICAL_URL",
    OgTitle => "OG_TITLE",
    OgImageUrl => "OG_IMAGE_URL",
    JsonLd => "JSON_LD",
}

impl Placeholder {
    /// Token as written in templates, e.g. `{{SITE_NAME}}`.
    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

/// Placeholder values for one page.
#[derive(Debug, Clone, Default)]
pub struct Bindings(BTreeMap<Placeholder, String>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, replacing any earlier one.
    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) -> &mut Self {
        self.0.insert(placeholder, value.into());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.0.get(&placeholder).map(String::as_str)
    }

    /// Placeholders in the closed set that have no value yet.
    pub fn missing(&self) -> Vec<Placeholder> {
        Placeholder::ALL
            .iter()
            .copied()
            .filter(|p| !self.0.contains_key(p))
            .collect()
    }
}

/// Substitute every bound placeholder in `template` in one pass.
pub fn render(template: &str, bindings: &Bindings) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures| {
            Placeholder::from_name(&caps[1])
                .and_then(|p| bindings.get(p))
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Escape text for an HTML attribute or text node.
pub fn escape(text: &str) -> String {
    maud::html! { (text) }.into_string()
}
