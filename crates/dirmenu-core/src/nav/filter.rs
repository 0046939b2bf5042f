//! Filter patterns and fuzzy highlighting for keyed entries.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::Regex;

use crate::error::CoreResult;
use crate::nav::page::KeyedEntry;

/// Compiles an optional user pattern. Empty input clears the pattern.
///
/// # Errors
///
/// [`crate::CoreError::InvalidPattern`] if the pattern is not a valid regex.
pub fn compile_pattern(pattern: Option<&str>) -> CoreResult<Option<Regex>> {
    match pattern {
        Some(p) if !p.is_empty() => Ok(Some(Regex::new(p)?)),
        _ => Ok(None),
    }
}

/// Marks every entry whose label fuzzy-matches `query`.
///
/// Membership and order are untouched; only the highlight positions are
/// filled in. An empty query leaves all entries unmarked.
pub fn highlight_entries(entries: Vec<KeyedEntry>, query: &str) -> Vec<KeyedEntry> {
    if query.is_empty() {
        return entries;
    }

    let matcher = SkimMatcherV2::default();
    entries
        .into_iter()
        .map(|item| match matcher.fuzzy_indices(item.label(), query) {
            Some((_, indices)) => item.with_highlight(indices),
            None => item,
        })
        .collect()
}
