//! Finds every occurrence of the configured phrase in a base name.
//!
//! Matching is literal. With `case_insensitive` both sides are lowercased with
//! full Unicode rules; with `loose` hyphen and space variants are folded to a
//! canonical form first (see [`normalize::LOOSE_TABLE`]). Spans are always
//! reported as byte ranges into the *original* base name.

use crate::config::MatchOptions;
use log::trace;
use std::ops::Range;

pub mod normalize;

use normalize::{fold, Folded};

/// A phrase folded once and reused for every candidate of a run.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    folded_phrase: String,
    case_insensitive: bool,
    loose: bool,
}

impl PhraseMatcher {
    /// Prepares a matcher for the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use namescrub::config::MatchOptions;
    /// use namescrub::matching::PhraseMatcher;
    ///
    /// let opts = MatchOptions {
    ///     phrase: "(Z-Library)".to_string(),
    ///     case_insensitive: true,
    ///     loose: false,
    /// };
    /// let matcher = PhraseMatcher::new(&opts);
    /// assert_eq!(matcher.find_spans("Notes(Z-LIBRARY)"), vec![5..16]);
    /// ```
    pub fn new(opts: &MatchOptions) -> Self {
        let folded = fold(&opts.phrase, opts.case_insensitive, opts.loose);
        Self {
            folded_phrase: folded.text,
            case_insensitive: opts.case_insensitive,
            loose: opts.loose,
        }
    }

    /// Returns all non-overlapping occurrences, left to right.
    ///
    /// Each search resumes right after the end of the previous match. An empty
    /// vector means the phrase does not occur.
    pub fn find_spans(&self, base_name: &str) -> Vec<Range<usize>> {
        if self.folded_phrase.is_empty() {
            return Vec::new();
        }
        let folded = fold(base_name, self.case_insensitive, self.loose);
        let spans = scan(&folded, &self.folded_phrase);
        trace!("Spans for '{}': {:?}", base_name, spans);
        spans
    }
}

fn scan(haystack: &Folded, needle: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(found) = haystack.text[cursor..].find(needle) {
        let start = cursor + found;
        let end = start + needle.len();
        spans.push(haystack.source_range(start..end));
        cursor = end;
    }
    spans
}

/// Convenience wrapper for one-off matching without keeping a [`PhraseMatcher`].
pub fn find_spans(base_name: &str, opts: &MatchOptions) -> Vec<Range<usize>> {
    PhraseMatcher::new(opts).find_spans(base_name)
}
