//! Markdown to HTML conversion.
//!
//! A thin layer over pulldown-cmark: GFM-style extensions are enabled,
//! every heading gets a stable `id` for in-page links, and code-block
//! classes Prism has no grammar for are mapped to `language-none`.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use std::collections::HashMap;

/// Code-block classes rewritten for Prism.
const PRISM_CLASS_MAP: &[(&str, &str)] = &[
    ("class=\"language-http\"", "class=\"language-none\""),
    ("class=\"language-plaintext\"", "class=\"language-none\""),
];

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_HEADING_ATTRIBUTES
}

/// Render a Markdown body to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut events: Vec<Event> = Parser::new_ext(markdown, options()).collect();
    assign_heading_ids(&mut events);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    fix_prism_classes(&out)
}

/// Give every heading without an explicit `{#id}` a slug id.
///
/// Repeated slugs get `-1`, `-2`, ... suffixes in document order. Explicit
/// ids are reserved first so generated ones never shadow them.
fn assign_heading_ids(events: &mut [Event]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for event in events.iter() {
        if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
            counts.insert(id.to_string(), 1);
        }
    }

    for i in 0..events.len() {
        let Event::Start(Tag::Heading { id: None, .. }) = &events[i] else {
            continue;
        };
        let text = heading_text(&events[i + 1..]);
        let new_id = unique_id(&mut counts, slugify(&text));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(new_id));
        }
    }
}

fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// `counts` maps every id emitted so far to the next suffix to try for it.
fn unique_id(counts: &mut HashMap<String, usize>, base: String) -> String {
    let base = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };
    let mut n = counts.get(&base).copied().unwrap_or(0);
    let id = loop {
        let candidate = match n {
            0 => base.clone(),
            n => format!("{base}-{n}"),
        };
        if !counts.contains_key(&candidate) {
            break candidate;
        }
        n += 1;
    };
    counts.insert(base, n + 1);
    counts.entry(id.clone()).or_insert(1);
    id
}

/// Lower-case, whitespace and `-`/`_` runs collapse to one dash, other
/// punctuation dropped.
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }
    if result.ends_with('-') {
        result.pop();
    }
    result
}

fn fix_prism_classes(html: &str) -> String {
    let mut out = html.to_string();
    for (from, to) in PRISM_CLASS_MAP {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}

/// Words in a Markdown body, split on whitespace.
pub fn word_count(markdown: &str) -> usize {
    markdown.split_whitespace().count()
}
