//! Site configuration module.
//!
//! Handles loading, merging, and validating the site configuration file.
//! The file is sparse: stock defaults are serialized to a value tree, the
//! user's file is merged on top key-by-key, and the result is deserialized
//! and validated.
//!
//! ## Config File Formats
//!
//! Both TOML (`config.toml`, the default) and JSON (`config.json`) are
//! accepted; the format is picked by file extension.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Documentation"
//! description = "Documentation Platform"
//! url = ""                          # Base URL for canonical links and sitemap
//! github_url = "#"
//!
//! [paths]
//! content_folder = "input/notes"
//! output_folder = "output"
//! template_folder = "templates/default"
//! pages_folder = "input/pages"      # Flat folder of static pages (about, contribute)
//! exclude_folders = [".trash", ".obsidian", ".git", "__pycache__", "node_modules"]
//!
//! [formatting]
//! strip_number_prefix = true        # false = show raw folder/file names
//! acronyms = ["api", "sql"]
//!
//! [formatting.display_name_overrides]
//! "javascript" = "JavaScript"
//!
//! [ui]
//! show_bookmarks = true
//! show_recent = true
//! show_contribute = true
//! contribute_text = "Contribute"
//! home_label = "Home"
//!
//! [ui.category_icons]
//! "guides" = "fas fa-book"
//!
//! [seo]
//! keywords = "documentation, guides, tutorials"
//!
//! [footer]
//! show_copyright = true
//! show_timestamp = true
//! show_powered_by = true
//!
//! [generator]
//! generate_sitemap = true
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: name, tagline, base URL.
    pub site: SiteSection,
    /// Input/output locations and scan exclusions.
    pub paths: PathsConfig,
    /// Display-name formatting for folders and files.
    pub formatting: FormattingConfig,
    /// Sidebar, icon, and feature toggles.
    pub ui: UiConfig,
    /// Meta description and keyword templates.
    pub seo: SeoConfig,
    /// Footer composition.
    pub footer: FooterConfig,
    /// Optional output artifacts.
    pub generator: GeneratorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        let url = &self.site.url;
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "site.url must start with http:// or https:// (got {url:?})"
            )));
        }
        for folder in &self.paths.exclude_folders {
            if folder.is_empty() || folder.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "paths.exclude_folders entries must be single folder names (got {folder:?})"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub name: String,
    pub description: String,
    /// Absolute base URL (`https://docs.example.com`). Empty means relative.
    pub url: String,
    pub github_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Documentation".to_string(),
            description: "Documentation Platform".to_string(),
            url: String::new(),
            github_url: "#".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of the Markdown content tree.
    pub content_folder: String,
    /// Where the generated site is written.
    pub output_folder: String,
    /// Folder holding `template.html`, `css/`, `js/`, `img/`.
    pub template_folder: String,
    /// Flat folder of static pages rendered at the site root.
    pub pages_folder: String,
    /// Folder names skipped anywhere in the content tree.
    pub exclude_folders: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content_folder: "input/notes".to_string(),
            output_folder: "output".to_string(),
            template_folder: "templates/default".to_string(),
            pages_folder: "input/pages".to_string(),
            exclude_folders: [".trash", ".obsidian", ".git", "__pycache__", "node_modules"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormattingConfig {
    /// When false, raw folder and file names are displayed unchanged.
    pub strip_number_prefix: bool,
    /// Words rendered fully upper-case (matched case-insensitively).
    pub acronyms: Vec<String>,
    /// Exact raw or prefix-stripped name → display name.
    pub display_name_overrides: BTreeMap<String, String>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            strip_number_prefix: true,
            acronyms: Vec::new(),
            display_name_overrides: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Category name → icon class, checked before the built-in table.
    pub category_icons: BTreeMap<String, String>,
    /// Icon used when no override or built-in entry matches.
    pub default_icon: Option<String>,
    pub show_bookmarks: bool,
    pub show_recent: bool,
    pub show_contribute: bool,
    pub contribute_text: String,
    /// Fixed contribute link. Unset means the site's own `contribute.html`.
    pub contribute_url: Option<String>,
    /// Label of the first breadcrumb segment.
    pub home_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            category_icons: BTreeMap::new(),
            default_icon: None,
            show_bookmarks: true,
            show_recent: true,
            show_contribute: true,
            contribute_text: "Contribute".to_string(),
            contribute_url: None,
            home_label: "Home".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeoConfig {
    /// Comma-separated base keywords for every page. Also read from the
    /// older `base_keywords` key.
    pub keywords: String,
    /// Index page description; `{site_name}` is substituted.
    pub index_description: Option<String>,
    /// Content page description; `{title}`, `{category}`, `{site_name}` are substituted.
    pub page_description_template: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            keywords: "documentation, guides, tutorials".to_string(),
            index_description: None,
            page_description_template:
                "Learn about {title} in {category}. Documentation from {site_name}.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub show_copyright: bool,
    pub show_timestamp: bool,
    pub show_powered_by: bool,
    /// Custom copyright HTML; `{year}` and `{site_name}` are substituted.
    pub copyright_text: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            show_copyright: true,
            show_timestamp: true,
            show_powered_by: true,
            copyright_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub generate_sitemap: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_sitemap: true,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a JSON value tree.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<serde_json::Value, ConfigError> {
    Ok(serde_json::to_value(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Objects are merged key-by-key (overlay keys override base keys).
/// - Non-object values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_values(base: serde_json::Value, overlay: serde_json::Value) -> serde_json::Value {
    use serde_json::Value;
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Parse raw config text into a value tree, picking the format from the
/// file extension (`.json` → JSON, anything else → TOML).
pub fn parse_raw_config(path: &Path, content: &str) -> Result<serde_json::Value, ConfigError> {
    let is_json = path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}

/// Rename legacy keys in a user overlay to their current names.
///
/// Done before merging: the stock defaults already carry the current key, so
/// a serde alias would see both and reject the duplicate.
fn rename_legacy_keys(overlay: &mut serde_json::Value) {
    if let Some(seo) = overlay.get_mut("seo").and_then(|v| v.as_object_mut())
        && let Some(keywords) = seo.remove("base_keywords")
    {
        seo.entry("keywords").or_insert(keywords);
    }
    let Some(root) = overlay.as_object_mut() else {
        return;
    };
    let strip = root
        .get_mut("ui")
        .and_then(|v| v.as_object_mut())
        .and_then(|ui| ui.remove("strip_number_prefix"));
    if let Some(strip) = strip {
        let formatting = root
            .entry("formatting")
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
        if let Some(formatting) = formatting.as_object_mut() {
            formatting.entry("strip_number_prefix").or_insert(strip);
        }
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<serde_json::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(mut ov) => {
            rename_legacy_keys(&mut ov);
            merge_values(base, ov)
        }
        None => base,
    };
    let config: SiteConfig = serde_json::from_value(merged)?;
    config.validate()?;
    Ok(config)
}

/// Load the config file at `path`.
///
/// A missing file is not an error: a warning is logged and stock defaults
/// are used. A present but malformed or invalid file is an error.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
        return resolve_config(None);
    }
    let content = fs::read_to_string(path)?;
    let overlay = parse_raw_config(path, &content)?;
    resolve_config(Some(overlay))
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Grimoire Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "Documentation"
description = "Documentation Platform"
# Absolute base URL used for canonical links, JSON-LD and the sitemap.
url = ""
github_url = "#"

# ---------------------------------------------------------------------------
# Paths (relative to the working directory)
# ---------------------------------------------------------------------------
[paths]
content_folder = "input/notes"
output_folder = "output"
# Folder with template.html, css/style.css, js/app.js and img/.
template_folder = "templates/default"
# Flat folder of static pages (about.md, contribute.md) rendered at the root.
pages_folder = "input/pages"
# Folder names skipped anywhere in the content tree.
exclude_folders = [".trash", ".obsidian", ".git", "__pycache__", "node_modules"]

# ---------------------------------------------------------------------------
# Display names
# ---------------------------------------------------------------------------
[formatting]
# Strip "01-" style prefixes and title-case names. false = raw names.
strip_number_prefix = true
# Words shown fully upper-case.
acronyms = []

# Exact name -> display name, checked before and after prefix stripping.
[formatting.display_name_overrides]
# "javascript" = "JavaScript"

# ---------------------------------------------------------------------------
# Interface
# ---------------------------------------------------------------------------
[ui]
show_bookmarks = true
show_recent = true
show_contribute = true
contribute_text = "Contribute"
# contribute_url = "https://github.com/you/docs"
home_label = "Home"
# default_icon = "fas fa-folder"

# Category name -> icon class. Keys are matched lower-cased, with and
# without the number prefix.
[ui.category_icons]
# "guides" = "fas fa-book"

# ---------------------------------------------------------------------------
# SEO
# ---------------------------------------------------------------------------
[seo]
keywords = "documentation, guides, tutorials"
# index_description = "{site_name} - comprehensive documentation and guides."
page_description_template = "Learn about {title} in {category}. Documentation from {site_name}."

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
show_copyright = true
show_timestamp = true
show_powered_by = true
# Custom copyright HTML; {year} and {site_name} are substituted.
copyright_text = ""

# ---------------------------------------------------------------------------
# Generator
# ---------------------------------------------------------------------------
[generator]
generate_sitemap = true
"##
}
