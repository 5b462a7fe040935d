//! Display names for folders and files.
//!
//! Every raw filesystem name that reaches the reader (category folders,
//! page file stems, breadcrumb segments) goes through the same formatter so
//! the navigation, breadcrumbs and page titles always agree.
//!
//! ## Formatting Steps
//!
//! 1. If formatting is disabled, the raw name is returned as-is.
//! 2. An exact override for the raw name wins.
//! 3. A leading number prefix is stripped: `01-`, `02_`, `03. `, `04 - `.
//! 4. An exact override for the stripped name wins.
//! 5. Dashes and underscores become spaces.
//! 6. Each word is title-cased, except configured acronyms (upper-cased),
//!    words already in upper case (kept), and English function words after
//!    the first word (lower-cased).
//!
//! ```text
//! 01-getting-started   → "Getting Started"
//! 02_api_reference     → "API Reference"      (acronyms = ["api"])
//! 03. tools of the trade → "Tools of the Trade"
//! TO-DO-list           → "TO DO List"
//! ```

use crate::config::FormattingConfig;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Words kept lower-case unless they open the name.
const FUNCTION_WORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "in", "on", "at", "to", "for", "of", "with",
];

/// Characters trimmed before deciding whether a name carries any content.
const SEPARATOR_CHARS: &[char] = &['-', '_', '=', '.', ' '];

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[-_.\s]+").expect("number prefix pattern is valid"));

/// Strip a leading `NN<separators>` prefix from a name.
///
/// The separator run is greedy, so `04 - Notes` loses the whole `04 - `.
/// Names that are only digits (no separator) are returned unchanged.
pub fn strip_number_prefix(name: &str) -> &str {
    match NUMBER_PREFIX.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Title-case `text` word by word, honouring acronyms and function words.
///
/// `acronyms` must hold lower-case entries. Acronym and existing upper-case
/// checks run before the function-word rule.
pub fn capitalize_with_acronyms(text: &str, acronyms: &BTreeSet<String>) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if acronyms.contains(&lower) {
                word.to_uppercase()
            } else if is_all_upper(word) {
                word.to_string()
            } else if i == 0 || !FUNCTION_WORDS.contains(&lower.as_str()) {
                capitalize(word)
            } else {
                lower
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a raw folder or file name into its display form.
pub fn format_display_name(
    name: &str,
    strip_enabled: bool,
    acronyms: &BTreeSet<String>,
    overrides: &BTreeMap<String, String>,
) -> String {
    if !strip_enabled {
        return name.to_string();
    }
    if let Some(display) = overrides.get(name) {
        return display.clone();
    }

    let stripped = strip_number_prefix(name);
    if let Some(display) = overrides.get(stripped) {
        return display.clone();
    }

    let spaced = stripped.replace(['-', '_'], " ");
    capitalize_with_acronyms(&spaced, acronyms)
}

/// Whether a file stem or folder name carries real content.
///
/// One trailing extension is dropped, separator characters are trimmed, and
/// what remains must contain at least one alphanumeric character. Names like
/// `---` or `...` are rejected.
pub fn is_valid_name(name: &str) -> bool {
    let without_ext = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    let trimmed = without_ext.trim_matches(SEPARATOR_CHARS);
    !trimmed.is_empty() && trimmed.chars().any(char::is_alphanumeric)
}

/// Stable DOM id fragment for a raw folder name.
pub fn nav_slug(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "-").replace('&', "and")
}

/// Title-case each whitespace-separated word, with no acronym handling.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Two or more characters, at least one cased, none lower-case.
fn is_all_upper(word: &str) -> bool {
    word.chars().count() >= 2
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

/// Name formatter bound to one site's formatting settings.
///
/// Built once from [`FormattingConfig`]; acronyms are normalised to lower case
/// so configs may list them in any case.
#[derive(Debug, Clone)]
pub struct NameFormatter {
    strip_enabled: bool,
    acronyms: BTreeSet<String>,
    overrides: BTreeMap<String, String>,
}

impl NameFormatter {
    pub fn new(config: &FormattingConfig) -> Self {
        Self {
            strip_enabled: config.strip_number_prefix,
            acronyms: config.acronyms.iter().map(|a| a.to_lowercase()).collect(),
            overrides: config.display_name_overrides.clone(),
        }
    }

    pub fn format(&self, name: &str) -> String {
        format_display_name(name, self.strip_enabled, &self.acronyms, &self.overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn fmt(name: &str) -> String {
        format_display_name(name, true, &set(&["api", "sql"]), &BTreeMap::new())
    }

    // =========================================================================
    // Number prefix stripping
    // =========================================================================

    #[test]
    fn strips_dash_prefix() {
        assert_eq!(strip_number_prefix("01-fundamentals"), "fundamentals");
    }

    #[test]
    fn strips_underscore_prefix() {
        assert_eq!(strip_number_prefix("02_guides"), "guides");
    }

    #[test]
    fn strips_dot_space_prefix() {
        assert_eq!(strip_number_prefix("03. Reference"), "Reference");
    }

    #[test]
    fn strips_greedy_separator_run() {
        assert_eq!(strip_number_prefix("04 - Notes"), "Notes");
    }

    #[test]
    fn digits_without_separator_unchanged() {
        assert_eq!(strip_number_prefix("2024"), "2024");
        assert_eq!(strip_number_prefix("3d-printing"), "3d-printing");
    }

    #[test]
    fn unprefixed_name_unchanged() {
        assert_eq!(strip_number_prefix("guides"), "guides");
    }

    // =========================================================================
    // Capitalization
    // =========================================================================

    #[test]
    fn acronym_is_uppercased() {
        assert_eq!(
            capitalize_with_acronyms("api testing", &set(&["api"])),
            "API Testing"
        );
    }

    #[test]
    fn existing_uppercase_words_preserved() {
        assert_eq!(capitalize_with_acronyms("TO DO list", &set(&[])), "TO DO List");
    }

    #[test]
    fn function_words_lowered_after_first() {
        assert_eq!(
            capitalize_with_acronyms("tools of the trade", &set(&[])),
            "Tools of the Trade"
        );
    }

    #[test]
    fn function_word_capitalized_when_first() {
        assert_eq!(
            capitalize_with_acronyms("the basics", &set(&[])),
            "The Basics"
        );
    }

    #[test]
    fn acronym_beats_function_word() {
        assert_eq!(
            capitalize_with_acronyms("tips on ssh", &set(&["on", "ssh"])),
            "Tips ON SSH"
        );
    }

    #[test]
    fn single_letter_function_word_lowered() {
        assert_eq!(capitalize_with_acronyms("plan A", &set(&[])), "Plan a");
        assert_eq!(capitalize_with_acronyms("A plan", &set(&[])), "A Plan");
    }

    #[test]
    fn mixed_case_word_recapitalized() {
        assert_eq!(capitalize_with_acronyms("gitHub tips", &set(&[])), "Github Tips");
    }

    // =========================================================================
    // Full formatting
    // =========================================================================

    #[test]
    fn full_pipeline() {
        assert_eq!(fmt("01-getting-started"), "Getting Started");
        assert_eq!(fmt("02_api_reference"), "API Reference");
        assert_eq!(fmt("03. sql in practice"), "SQL in Practice");
    }

    #[test]
    fn disabled_returns_raw_name() {
        let out = format_display_name("01-getting-started", false, &set(&[]), &BTreeMap::new());
        assert_eq!(out, "01-getting-started");
    }

    #[test]
    fn override_on_raw_name() {
        let overrides = BTreeMap::from([("01-misc".to_string(), "Odds & Ends".to_string())]);
        assert_eq!(
            format_display_name("01-misc", true, &set(&[]), &overrides),
            "Odds & Ends"
        );
    }

    #[test]
    fn override_on_stripped_name() {
        let overrides = BTreeMap::from([("javascript".to_string(), "JavaScript".to_string())]);
        assert_eq!(
            format_display_name("07-javascript", true, &set(&[]), &overrides),
            "JavaScript"
        );
    }

    #[test]
    fn override_returned_verbatim() {
        let overrides = BTreeMap::from([("faq".to_string(), "faq & more".to_string())]);
        assert_eq!(format_display_name("faq", true, &set(&[]), &overrides), "faq & more");
    }

    #[test]
    fn empty_name_is_empty() {
        assert_eq!(fmt(""), "");
        assert_eq!(format_display_name("", false, &set(&[]), &BTreeMap::new()), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        for raw in [
            "01-getting-started",
            "02_api_reference",
            "03. sql in practice",
            "TO-DO-list",
            "tools-of-the-trade",
            "04 - Notes",
        ] {
            let once = fmt(raw);
            assert_eq!(fmt(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn formatter_normalises_configured_acronyms() {
        let config = FormattingConfig {
            acronyms: vec!["HTML".to_string()],
            ..FormattingConfig::default()
        };
        let formatter = NameFormatter::new(&config);
        assert_eq!(formatter.format("05-html-basics"), "HTML Basics");
    }

    // =========================================================================
    // Validity and slugs
    // =========================================================================

    #[test]
    fn separator_only_names_are_invalid() {
        assert!(!is_valid_name("---"));
        assert!(!is_valid_name("..."));
        assert!(!is_valid_name("_-_ =."));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn names_with_content_are_valid() {
        assert!(is_valid_name("01-intro"));
        assert!(is_valid_name("03. Reference"));
        assert!(is_valid_name("--x--"));
    }

    #[test]
    fn one_trailing_extension_dropped_before_check() {
        assert!(!is_valid_name("---.md"));
        assert!(is_valid_name("a.---"));
    }

    #[test]
    fn nav_slug_normalises() {
        assert_eq!(nav_slug("Tips & Tricks"), "tips-and-tricks");
        assert_eq!(nav_slug("01-Guides"), "01-guides");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("about us"), "About Us");
        assert_eq!(title_case("CONTRIBUTE"), "Contribute");
    }
}
