//! Text processing utilities.
//!
//! Helpers for turning catalog text into display lines and for compiling
//! the search query typed by the user.

use log::*;
use regex::Regex;

/// Compile a case-insensitive literal matcher for `query`. Returns `None`
/// for a blank query, which means "match everything".
///
pub fn search_pattern(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let pattern = format!("(?i){}", regex::escape(query));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Failed to compile search pattern '{}': {}", pattern, e);
            None
        }
    }
}

/// Collapse runs of whitespace, including newlines, into single spaces.
///
pub fn normalize_whitespace(text: &str) -> String {
    let re = match Regex::new(r"\s+") {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to compile whitespace pattern: {}", e);
            return text.trim().to_string();
        }
    };
    re.replace_all(text.trim(), " ").to_string()
}

/// Split block text on blank lines into normalized paragraphs.
///
/// # Arguments
/// * `text` - Body text as written in the catalog, hard-wrapped or not
///
/// # Returns
/// One string per paragraph, with empty paragraphs dropped.
pub fn paragraphs(text: &str) -> Vec<String> {
    let re = match Regex::new(r"\n\s*\n") {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to compile paragraph pattern: {}", e);
            return vec![normalize_whitespace(text)];
        }
    };
    re.split(text)
        .map(normalize_whitespace)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Greedy word wrap of `text` into lines at most `width` characters wide.
/// Words longer than `width` get a line of their own.
///
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = vec![];
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
