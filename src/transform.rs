//! Computes the new file name from the match spans.

use crate::config::Mode;
use crate::errors::{Error, Result};
use std::ops::Range;

/// Applies the spans to `base_name` and returns the new full file name.
///
/// Spans are substituted right to left, so earlier offsets stay valid. In
/// `Mode::Delete` each span is removed; in `Mode::Replace` it is replaced by
/// `replacement`. Whitespace runs of two or more characters touching a
/// substitution point collapse to a single space, then the base name is
/// trimmed and `extension` is reattached unchanged.
///
/// # Errors
/// Returns `Error::InvalidResultName` if the cleaned base name is empty, and
/// `Error::UnsafeResultName` if the new name would contain a path separator or
/// be `.` or `..`.
///
/// # Examples
///
/// ```
/// use namescrub::config::Mode;
/// use namescrub::transform::compute_new_name;
///
/// let name = compute_new_name("Book Title (Z-Library)", ".pdf", &[11..22], Mode::Delete, "").unwrap();
/// assert_eq!(name, "Book Title.pdf");
/// ```
pub fn compute_new_name(
    base_name: &str,
    extension: &str,
    spans: &[Range<usize>],
    mode: Mode,
    replacement: &str,
) -> Result<String> {
    let insert = match mode {
        Mode::Delete => "",
        Mode::Replace => replacement,
    };

    let mut name = base_name.to_string();
    // Substitution boundaries in the coordinates of `name`, collected right to left.
    let mut boundaries: Vec<usize> = Vec::with_capacity(spans.len() * 2);
    let mut applied_start = usize::MAX;

    for span in spans.iter().rev() {
        if span.end > applied_start {
            // Overlaps the span applied before it; only possible when lowercasing
            // expanded a single source character into several folded ones.
            continue;
        }
        let delta = insert.len() as isize - span.len() as isize;
        for b in boundaries.iter_mut() {
            *b = (*b as isize + delta) as usize;
        }
        name.replace_range(span.clone(), insert);
        boundaries.push(span.start + insert.len());
        boundaries.push(span.start);
        applied_start = span.start;
    }

    // Boundaries are already in descending order; collapsing right to left keeps
    // the remaining (smaller) offsets valid.
    let mut last_run_start = usize::MAX;
    for b in boundaries {
        if b >= last_run_start {
            continue;
        }
        if let Some(run) = whitespace_run_at(&name, b) {
            last_run_start = run.start;
            if name[run.clone()].chars().count() >= 2 {
                name.replace_range(run, " ");
            }
        }
    }

    let cleaned = name.trim();
    if cleaned.is_empty() {
        return Err(Error::InvalidResultName {
            name: format!("{}{}", base_name, extension),
        });
    }
    let new_name = format!("{}{}", cleaned, extension);
    if new_name == "." || new_name == ".." || new_name.chars().any(std::path::is_separator) {
        return Err(Error::UnsafeResultName {
            name: format!("{}{}", base_name, extension),
            new_name,
        });
    }
    Ok(new_name)
}

/// Returns the maximal run of whitespace that contains or touches byte offset `at`.
fn whitespace_run_at(s: &str, at: usize) -> Option<Range<usize>> {
    let start = s[..at]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(at, |(i, _)| i);
    let end = s[at..]
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map_or(at, |(i, c)| at + i + c.len_utf8());
    if start == end {
        None
    } else {
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete(base: &str, ext: &str, spans: &[Range<usize>]) -> Result<String> {
        compute_new_name(base, ext, spans, Mode::Delete, "")
    }

    #[test]
    fn test_delete_trailing_phrase() {
        assert_eq!(
            delete("Book Title (Z-Library)", ".pdf", &[11..22]).unwrap(),
            "Book Title.pdf"
        );
    }

    #[test]
    fn test_replace_phrase() {
        let name = compute_new_name(
            "Another Book (Z-Library)",
            ".epub",
            &[13..24],
            Mode::Replace,
            "[Clean]",
        )
        .unwrap();
        assert_eq!(name, "Another Book [Clean].epub");
    }

    #[test]
    fn test_delete_middle_collapses_double_space() {
        // "Book (Z-Library) Vol 2" -> "Book  Vol 2" -> "Book Vol 2"
        assert_eq!(
            delete("Book (Z-Library) Vol 2", ".pdf", &[5..16]).unwrap(),
            "Book Vol 2.pdf"
        );
    }

    #[test]
    fn test_whitespace_away_from_removal_is_kept() {
        assert_eq!(
            delete("A  B (x)", ".txt", &[5..8]).unwrap(),
            "A  B.txt"
        );
    }

    #[test]
    fn test_multiple_spans_right_to_left() {
        // "x A x B x" with every "x" removed
        assert_eq!(
            delete("x A x B x", "", &[0..1, 4..5, 8..9]).unwrap(),
            "A B"
        );
    }

    #[test]
    fn test_replace_with_longer_text_keeps_offsets() {
        let name =
            compute_new_name("a-b-c", ".md", &[1..2, 3..4], Mode::Replace, " -- ").unwrap();
        assert_eq!(name, "a -- b -- c.md");
    }

    #[test]
    fn test_collapse_non_ascii_whitespace() {
        // NBSP before the phrase and a regular space after it.
        assert_eq!(
            delete("Book\u{00A0}X Two", "", &[6..7]).unwrap(),
            "Book Two"
        );
    }

    #[test]
    fn test_empty_result_is_error() {
        let err = delete("(Z-Library)", ".pdf", &[0..11]).unwrap_err();
        assert!(matches!(err, Error::InvalidResultName { ref name } if name == "(Z-Library).pdf"));
    }

    #[test]
    fn test_separator_in_new_name_is_error() {
        let err = compute_new_name("Book (Z-Library)", ".pdf", &[5..16], Mode::Replace, "a/b")
            .unwrap_err();
        assert!(
            matches!(err, Error::UnsafeResultName { ref new_name, .. } if new_name == "Book a/b.pdf")
        );
    }

    #[test]
    fn test_dot_names_are_errors() {
        // ".(Z-Library)" has no extension, so deleting the phrase leaves ".".
        let err = delete(".(Z-Library)", "", &[1..12]).unwrap_err();
        assert!(matches!(err, Error::UnsafeResultName { ref new_name, .. } if new_name == "."));
        let err = delete("..x", "", &[2..3]).unwrap_err();
        assert!(matches!(err, Error::UnsafeResultName { ref new_name, .. } if new_name == ".."));
    }

    #[test]
    fn test_whitespace_only_replacement_is_error() {
        let err = compute_new_name("phrase", ".txt", &[0..6], Mode::Replace, "   ").unwrap_err();
        assert!(matches!(err, Error::InvalidResultName { .. }));
    }

    #[test]
    fn test_replace_same_text_yields_identical_name() {
        let name =
            compute_new_name("Book (Z-Library)", ".pdf", &[5..16], Mode::Replace, "(Z-Library)")
                .unwrap();
        assert_eq!(name, "Book (Z-Library).pdf");
    }

    #[test]
    fn test_no_spans_returns_original() {
        assert_eq!(delete("Plain", ".pdf", &[]).unwrap(), "Plain.pdf");
    }

    #[test]
    fn test_whitespace_run_at() {
        assert_eq!(whitespace_run_at("a  b", 2), Some(1..3));
        assert_eq!(whitespace_run_at("a  b", 1), Some(1..3));
        assert_eq!(whitespace_run_at("ab", 1), None);
        assert_eq!(whitespace_run_at("a ", 2), Some(1..2));
    }
}
