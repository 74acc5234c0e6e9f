//! Organization-name extraction from noisy titles and URLs.

use once_cell::sync::Lazy;
use url::Url;

/// Longest acceptable name lifted from a title's left segment
const MAX_NAME_CHARS: usize = 50;

/// Title-fallback truncation length
const TITLE_FALLBACK_CHARS: usize = 30;

/// Last-resort name when both title and URL are unusable
const FALLBACK_NAME: &str = "Unknown";

/// Separators that typically divide "Product — tagline" titles, tried in
/// order. Spaces matter: a bare hyphen inside a product name must not
/// split it.
static TITLE_SEPARATORS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![" - ", " | ", ": ", " \u{2014} ", " \u{2013} "]);

/// Domain label prefixes that are marketing convention, not identity
/// (getdropbox.com, usefathom.com, app.example.com)
static DOMAIN_PREFIXES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["www.", "app.", "get", "use"]);

/// Extract a clean, human-presentable organization name.
///
/// Tries title separators first (left-hand segment, if non-empty and
/// under 50 characters), then falls back to the URL host with common
/// prefixes stripped and the first character capitalized, then to the
/// first 30 characters of the trimmed title. Never returns an empty
/// string and never panics on malformed input.
#[must_use]
pub fn extract_name(title: &str, url: &str) -> String {
    for sep in TITLE_SEPARATORS.iter() {
        if let Some(idx) = title.find(sep) {
            let left = title[..idx].trim();
            if !left.is_empty() && left.chars().count() < MAX_NAME_CHARS {
                return left.to_string();
            }
        }
    }

    if let Some(name) = name_from_host(url) {
        return name;
    }

    let fallback = safe_truncate_chars(title.trim(), TITLE_FALLBACK_CHARS).trim();
    if fallback.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        fallback.to_string()
    }
}

/// Derive a name from the URL host: strip conventional prefixes, take
/// the label before the first remaining dot, capitalize it.
fn name_from_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let mut host = parsed.host_str()?;

    for prefix in DOMAIN_PREFIXES.iter() {
        if let Some(rest) = host.strip_prefix(prefix)
            && !rest.is_empty()
        {
            host = rest;
            break;
        }
    }

    let label = host.split('.').next()?;
    if label.is_empty() {
        return None;
    }
    Some(capitalize_first(label))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate to a maximum number of characters without splitting a
/// multi-byte character.
fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
