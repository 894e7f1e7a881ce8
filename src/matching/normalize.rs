// src/matching/normalize.rs

//! Character folding for loose and case-insensitive matching.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::ops::Range;

/// Canonical hyphen every hyphen-like variant folds to in loose mode.
pub const CANONICAL_HYPHEN: char = '-';
/// Canonical space every space-like variant folds to in loose mode.
pub const CANONICAL_SPACE: char = ' ';

/// Hyphen-like code points treated as equal in loose mode.
const HYPHEN_VARIANTS: &[char] = &[
    '\u{002D}', // hyphen-minus
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
    '\u{FE58}', // small em dash
    '\u{FE63}', // small hyphen-minus
    '\u{FF0D}', // fullwidth hyphen-minus
];

/// Space-like code points treated as equal in loose mode.
const SPACE_VARIANTS: &[char] = &[
    '\u{0020}', '\u{0009}', '\u{00A0}', '\u{1680}', '\u{2000}', '\u{2001}', '\u{2002}',
    '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}', '\u{2008}', '\u{2009}',
    '\u{200A}', '\u{202F}', '\u{205F}', '\u{3000}',
];

/// The loose-mode mapping table: variant code point -> canonical code point.
pub static LOOSE_TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HYPHEN_VARIANTS
        .iter()
        .map(|&c| (c, CANONICAL_HYPHEN))
        .chain(SPACE_VARIANTS.iter().map(|&c| (c, CANONICAL_SPACE)))
        .collect()
});

/// Maps a single character through the loose table.
pub fn loosen(c: char) -> char {
    LOOSE_TABLE.get(&c).copied().unwrap_or(c)
}

/// A folded copy of a string that remembers where each byte came from.
///
/// `origin[i]` is the byte range, in the source string, of the character that
/// produced byte `i` of `text`. Lowercasing may expand one character into
/// several, so folded and source offsets do not line up in general.
#[derive(Debug, Clone)]
pub struct Folded {
    pub text: String,
    origin: Vec<Range<usize>>,
}

impl Folded {
    /// Maps a byte range in the folded text back onto whole characters of the source.
    ///
    /// `range` must be non-empty and lie within `text`.
    pub fn source_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.origin[range.start].start;
        let end = self.origin[range.end - 1].end;
        start..end
    }
}

/// Folds `s` for comparison: loose mapping first (if enabled), then full Unicode
/// lowercasing (if enabled).
pub fn fold(s: &str, case_insensitive: bool, loose: bool) -> Folded {
    let mut text = String::with_capacity(s.len());
    let mut origin = Vec::with_capacity(s.len());

    for (idx, ch) in s.char_indices() {
        let src = idx..idx + ch.len_utf8();
        let mapped = if loose { loosen(ch) } else { ch };
        if case_insensitive {
            for lc in mapped.to_lowercase() {
                push_char(&mut text, &mut origin, fold_final_sigma(lc), &src);
            }
        } else {
            push_char(&mut text, &mut origin, mapped, &src);
        }
    }

    Folded { text, origin }
}

/// `char::to_lowercase` has no word context, so final sigma would never meet
/// `Σ`/`σ`. Folding it to `σ` makes all three compare equal.
fn fold_final_sigma(c: char) -> char {
    if c == '\u{03C2}' {
        '\u{03C3}'
    } else {
        c
    }
}

fn push_char(text: &mut String, origin: &mut Vec<Range<usize>>, c: char, src: &Range<usize>) {
    text.push(c);
    origin.extend(std::iter::repeat(src.clone()).take(c.len_utf8()));
}
