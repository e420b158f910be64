//! Ordered regex strategies for scraping third-party markup.
//!
//! Each extracted field owns a [`PatternChain`]: a list of patterns tried in
//! priority order. When a page layout changes, a new pattern is added to the
//! chain; callers stay untouched.

use regex::Regex;

/// A named regex whose first capture group holds the extracted value.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
    json_string: bool,
}

impl Pattern {
    /// Compiles a pattern from a literal known at build time.
    ///
    /// # Panics
    ///
    /// Panics if `source` is not a valid regex. Only call with literals.
    pub fn new(name: &'static str, source: &str) -> Self {
        Self {
            name,
            regex: Regex::new(source).expect("invalid built-in extraction pattern"),
            json_string: false,
        }
    }

    /// Marks the capture as the body of a JSON string literal, so
    /// [`Pattern::first`] resolves escapes like `\u0026` and `\"`.
    pub fn json_string(mut self) -> Self {
        self.json_string = true;
        self
    }

    pub fn first(&self, text: &str) -> Option<String> {
        let raw = self.regex.captures(text)?.get(1)?.as_str();
        if self.json_string {
            Some(unescape_json_string(raw))
        } else {
            Some(raw.to_string())
        }
    }

    /// Every capture in order of appearance, as raw text.
    pub fn all<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

// Malformed escapes are kept as captured.
fn unescape_json_string(raw: &str) -> String {
    serde_json::from_str::<String>(&format!("\"{}\"", raw)).unwrap_or_else(|_| raw.to_string())
}

/// Patterns for one field, tried in order until one yields a value.
#[derive(Debug, Clone)]
pub struct PatternChain {
    patterns: Vec<Pattern>,
}

impl PatternChain {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Returns the first captured value that `accept` turns into `Some`,
    /// trying patterns in order.
    pub fn first_accepted<T>(&self, text: &str, accept: impl Fn(&str) -> Option<T>) -> Option<T> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.first(text).and_then(|value| accept(&value)))
    }
}
