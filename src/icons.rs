//! Font Awesome icon lookup for top-level categories.

use crate::config::UiConfig;
use crate::naming::strip_number_prefix;

/// Icon used when nothing else matches.
pub const FALLBACK_ICON: &str = "fas fa-folder";

/// Built-in icons for common documentation categories.
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("getting started", "fas fa-rocket"),
    ("getting-started", "fas fa-rocket"),
    ("guides", "fas fa-book"),
    ("tutorials", "fas fa-graduation-cap"),
    ("api", "fas fa-plug"),
    ("api reference", "fas fa-plug"),
    ("examples", "fas fa-code"),
    ("tools", "fas fa-tools"),
    ("reference", "fas fa-bookmark"),
    ("configuration", "fas fa-cog"),
    ("deployment", "fas fa-rocket"),
    ("security", "fas fa-shield-alt"),
];

fn builtin(key: &str) -> Option<&'static str> {
    BUILTIN_ICONS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, icon)| *icon)
}

/// Icon class for a raw category folder name.
///
/// Lookup order: configured icons keyed by the lower-cased name, then the
/// prefix-stripped name with dashes as spaces, then the prefix-stripped name,
/// then the raw name; then the built-in table; then the configured default.
pub fn category_icon(raw: &str, ui: &UiConfig) -> String {
    let lower = raw.to_lowercase();
    let stripped = strip_number_prefix(&lower);
    let spaced = stripped.replace('-', " ");

    let configured = [lower.as_str(), spaced.as_str(), stripped, raw]
        .into_iter()
        .find_map(|key| ui.category_icons.get(key));
    if let Some(icon) = configured {
        return icon.clone();
    }

    if let Some(icon) = builtin(&spaced).or_else(|| builtin(stripped)) {
        return icon.to_string();
    }

    ui.default_icon
        .clone()
        .unwrap_or_else(|| FALLBACK_ICON.to_string())
}
