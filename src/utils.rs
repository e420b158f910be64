use std::{collections::HashSet, hash::Hash};

use chrono::{SecondsFormat, Utc};

const YOUTUBE_TITLE_SUFFIX: &str = " - YouTube";

/// Drops repeated items, keeping the first occurrence of each in place.
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &mut Vec<T>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// Splits raw input into trimmed, non-empty lines paired with their 1-based
/// position among the kept lines.
pub fn split_input_lines(input: &str) -> Vec<(usize, &str)> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect()
}

/// Strips a trailing " - YouTube" and surrounding whitespace from a page title.
pub fn clean_playlist_name(raw: &str) -> String {
    let trimmed = raw.trim_end();
    trimmed
        .strip_suffix(YOUTUBE_TITLE_SUFFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Decodes the handful of HTML entities YouTube uses in titles.
pub fn decode_html_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Current time as an RFC 3339 UTC timestamp with millisecond precision,
/// e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fills a relay template with the target URL.
///
/// `{encoded_url}` is replaced with the percent-encoded target and `{url}`
/// with the raw one. A template without either placeholder gets the encoded
/// target appended.
pub fn fill_relay_template(template: &str, target: &str) -> String {
    if template.contains("{encoded_url}") {
        template.replace("{encoded_url}", &urlencoding::encode(target))
    } else if template.contains("{url}") {
        template.replace("{url}", target)
    } else {
        format!("{}{}", template, urlencoding::encode(target))
    }
}
