//! Generic pattern extractors.
//!
//! All functions here are total: empty or unexpected input yields `None` or
//! an empty list, never an error.

use regex::Regex;

/// Separators allowed between a keyword, the filler words after it and the number.
/// `*` covers markdown emphasis such as `**Humidity:** 58%`.
const SEPARATORS: &str = r"[\s:=~()*\-]";

/// Maximum number of filler words between a keyword and its number.
const WORD_WINDOW: usize = 4;

/// Regex source matching `alias`, a short window of filler words and a number.
///
/// Capture group 1 is the number. `unit` is matched optionally after it.
#[must_use]
pub fn number_pattern(alias: &str, unit: &str) -> String {
    let boundary = if alias.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    let unit = if unit.is_empty() {
        String::new()
    } else {
        format!(r"(?:\s*{})?", regex::escape(unit))
    };
    format!(
        r"(?i){boundary}{alias}{SEPARATORS}*(?:[a-z]+{SEPARATORS}+){{0,{WORD_WINDOW}}}(\d+(?:\.\d+)?){unit}",
        alias = regex::escape(alias),
    )
}

/// Regex source matching a number immediately followed by `unit`, e.g. `92°F`.
#[must_use]
pub fn suffix_pattern(unit: &str) -> String {
    format!(r"(?i)(\d+(?:\.\d+)?)\s*{}", regex::escape(unit))
}

/// First number found after any of `aliases`, trying aliases in order.
#[must_use]
pub fn extract_number(text: &str, aliases: &[&str], unit: &str) -> Option<f64> {
    aliases.iter().find_map(|alias| {
        Regex::new(&number_pattern(alias, unit))
            .ok()
            .and_then(|re| first_capture(&re, text))
    })
}

/// Parse capture group 1 of the first match of `re` as a finite number.
pub(crate) fn first_capture(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// First label whose needle occurs in `text`, in table order.
///
/// Several needles may map to the same label; matching is case-insensitive.
#[must_use]
pub fn extract_category<T: Copy>(text: &str, labels: &[(&str, T)]) -> Option<T> {
    let lower = text.to_lowercase();
    labels
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, label)| *label)
}

/// Every label with at least one needle present in `text`, in table order.
#[must_use]
pub fn extract_tags<T: Copy + PartialEq>(text: &str, table: &[(&[&str], T)]) -> Vec<T> {
    let lower = text.to_lowercase();
    let mut tags = Vec::new();
    for (needles, tag) in table {
        if needles.iter().any(|needle| lower.contains(needle)) && !tags.contains(tag) {
            tags.push(*tag);
        }
    }
    tags
}

/// Lines mentioning any trigger word (and, when `filters` is non-empty, any
/// filter word too), trimmed, capped at `cap` entries.
#[must_use]
pub fn extract_list_by_keyword(
    text: &str,
    triggers: &[&str],
    filters: &[&str],
    cap: usize,
) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            triggers.iter().any(|t| lower.contains(t))
                && (filters.is_empty() || filters.iter().any(|f| lower.contains(f)))
        })
        .map(|line| line.trim().to_string())
        .take(cap)
        .collect()
}

#[must_use]
pub fn mentions_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}
