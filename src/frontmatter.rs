//! Frontmatter extraction.
//!
//! Two header formats are recognised, chosen by sniffing the first line:
//!
//! ```text
//! ---                          % Title: Port Scanning
//! title: Port Scanning         % Display Name: Scanning 101
//! icon: fas fa-radar           % Author: j.doe
//! ---
//! body...                      body...
//! ```
//!
//! The YAML form needs a closing `---` line. The legacy form reads every
//! leading `%` line as `% Key: Value` (key lower-cased, spaces become
//! underscores) and stops at the first line that does not start with `%`;
//! any `%` lines after that point belong to the body.
//!
//! Parsing never fails outright. A malformed YAML block is logged and the
//! whole document is treated as body with no frontmatter.

use crate::types::Frontmatter;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frontmatter must be a mapping")]
    NotMapping,
    #[error("missing closing `---` line")]
    Unterminated,
}

/// Header style detected from the first line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    Yaml,
    Legacy,
    None,
}

impl HeaderFormat {
    pub fn sniff(content: &str) -> Self {
        if content.starts_with("---") {
            HeaderFormat::Yaml
        } else if content.starts_with('%') {
            HeaderFormat::Legacy
        } else {
            HeaderFormat::None
        }
    }
}

/// A document split into its metadata and Markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Split `content` into frontmatter and body.
pub fn parse(content: &str) -> Document {
    match HeaderFormat::sniff(content) {
        HeaderFormat::Yaml => match parse_yaml(content) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "Frontmatter parsing failed, treating document as body");
                Document {
                    frontmatter: Frontmatter::default(),
                    body: content.to_string(),
                }
            }
        },
        HeaderFormat::Legacy => parse_legacy(content),
        HeaderFormat::None => Document {
            frontmatter: Frontmatter::default(),
            body: content.to_string(),
        },
    }
}

/// Parse a `---` delimited YAML header.
pub fn parse_yaml(content: &str) -> Result<Document, FrontmatterError> {
    let mut lines = content.split_inclusive('\n');
    // Opening delimiter.
    lines.next();

    let mut yaml = String::new();
    let mut closed = false;
    for line in lines.by_ref() {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        yaml.push_str(line);
    }
    if !closed {
        return Err(FrontmatterError::Unterminated);
    }
    let body: String = lines.collect();

    Ok(Document {
        frontmatter: yaml_mapping(&yaml)?,
        body: body.trim().to_string(),
    })
}

fn yaml_mapping(yaml: &str) -> Result<Frontmatter, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    match value {
        serde_yaml::Value::Null => Ok(Frontmatter::default()),
        serde_yaml::Value::Mapping(_) => {
            let map: BTreeMap<String, serde_json::Value> = serde_yaml::from_value(value)?;
            Ok(Frontmatter(map))
        }
        _ => Err(FrontmatterError::NotMapping),
    }
}

/// Parse a legacy `% Key: Value` header.
pub fn parse_legacy(content: &str) -> Document {
    let mut map = BTreeMap::new();
    let lines: Vec<&str> = content.split('\n').collect();
    let mut body_start = 0;

    for (i, line) in lines.iter().enumerate() {
        let Some(rest) = line.strip_prefix('%') else {
            break;
        };
        if let Some((key, value)) = rest.trim().split_once(':') {
            let key = key.trim().to_lowercase().replace(' ', "_");
            map.insert(key, serde_json::Value::String(value.trim().to_string()));
        }
        body_start = i + 1;
    }

    Document {
        frontmatter: Frontmatter(map),
        body: lines[body_start..].join("\n").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sniff_picks_format_from_first_line() {
        assert_eq!(HeaderFormat::sniff("---\na: 1\n---\n"), HeaderFormat::Yaml);
        assert_eq!(HeaderFormat::sniff("% Title: x\n"), HeaderFormat::Legacy);
        assert_eq!(HeaderFormat::sniff("# Heading\n"), HeaderFormat::None);
        assert_eq!(HeaderFormat::sniff(""), HeaderFormat::None);
    }

    // =========================================================================
    // YAML
    // =========================================================================

    #[test]
    fn yaml_header_split_from_body() {
        let doc = parse("---\ntitle: Port Scanning\nicon: fas fa-radar\n---\n\n# Scan\n\nText.\n");
        assert_eq!(doc.frontmatter.text("title").as_deref(), Some("Port Scanning"));
        assert_eq!(doc.frontmatter.text("icon").as_deref(), Some("fas fa-radar"));
        assert_eq!(doc.body, "# Scan\n\nText.");
    }

    #[test]
    fn yaml_values_keep_their_types() {
        let doc = parse("---\norder: 3\ntags: [a, b]\n---\nbody");
        assert_eq!(doc.frontmatter.0.get("order"), Some(&json!(3)));
        assert_eq!(doc.frontmatter.0.get("tags"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn empty_yaml_header_is_empty_frontmatter() {
        let doc = parse("---\n---\nbody");
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn body_may_contain_horizontal_rules() {
        let doc = parse("---\ntitle: T\n---\nabove\n\n---\n\nbelow");
        assert_eq!(doc.body, "above\n\n---\n\nbelow");
    }

    #[test]
    fn malformed_yaml_falls_back_to_whole_document() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        let doc = parse(content);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn scalar_yaml_is_rejected() {
        assert!(matches!(
            parse_yaml("---\njust a string\n---\nbody"),
            Err(FrontmatterError::NotMapping)
        ));
    }

    #[test]
    fn unterminated_yaml_is_rejected() {
        assert!(matches!(
            parse_yaml("---\ntitle: x\nno closing line"),
            Err(FrontmatterError::Unterminated)
        ));
        let doc = parse("---\ntitle: x\n");
        assert!(doc.frontmatter.is_empty());
    }

    #[test]
    fn crlf_delimiters_accepted() {
        let doc = parse("---\r\ntitle: Win\r\n---\r\nbody\r\n");
        assert_eq!(doc.frontmatter.text("title").as_deref(), Some("Win"));
        assert_eq!(doc.body, "body");
    }

    // =========================================================================
    // Legacy
    // =========================================================================

    #[test]
    fn legacy_keys_normalised() {
        let doc = parse("% Title: Port Scanning\n% Display Name: Scanning 101\n\nBody text");
        assert_eq!(doc.frontmatter.text("title").as_deref(), Some("Port Scanning"));
        assert_eq!(
            doc.frontmatter.text("display_name").as_deref(),
            Some("Scanning 101")
        );
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn legacy_value_may_contain_colons() {
        let doc = parse("% Source: https://example.com\nbody");
        assert_eq!(
            doc.frontmatter.text("source").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn legacy_line_without_colon_is_consumed() {
        let doc = parse("% just a note\n% Title: T\nbody");
        assert_eq!(doc.frontmatter.0.len(), 1);
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn legacy_header_ends_at_first_plain_line() {
        let doc = parse("% Title: T\nfirst line\n% Author: late\n");
        assert_eq!(doc.frontmatter.text("author"), None);
        assert_eq!(doc.body, "first line\n% Author: late");
    }

    #[test]
    fn plain_document_untouched() {
        let content = "# Intro\n\nHello\n";
        let doc = parse(content);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, content);
    }
}
