//! Single-line canonicalization: punctuation stripping, uppercasing and
//! abbreviation expansion.

use crate::data;

/// Characters deleted outright before any other processing.
const STRIPPED_PUNCTUATION: [char; 3] = [',', '.', '-'];

/// Unit marker that survives segment-wise expansion and is rewritten as a
/// substring afterwards.
const UNIT_MARKER: &str = "# 5";
const UNIT_MARKER_EXPANSION: &str = "APARTMENT 5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentClass {
    Word,
    Digits,
    Separator,
}

impl SegmentClass {
    fn of(ch: char) -> Self {
        if ch.is_ascii_digit() {
            SegmentClass::Digits
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            SegmentClass::Word
        } else {
            SegmentClass::Separator
        }
    }
}

/// Canonicalize one address line.
///
/// Strips `,` `.` `-`, uppercases, expands whole-segment abbreviations and
/// finally rewrites any `"# 5"` left in the line to `"APARTMENT 5"`.
///
/// # Example
///
/// ```rust
/// use mail_bundler::canonicalizer::canonicalize;
///
/// assert_eq!(canonicalize("1324 Pine St."), "1324 PINE STREET");
/// ```
pub fn canonicalize(line: &str) -> String {
    let stripped = strip_punctuation(line);
    let expanded = expand_abbreviations(&stripped.to_uppercase());
    fold_unit_marker(&expanded)
}

/// Remove the fixed punctuation set without inserting anything in its place.
pub fn strip_punctuation(line: &str) -> String {
    line.chars()
        .filter(|ch| !STRIPPED_PUNCTUATION.contains(ch))
        .collect()
}

/// Split a line into maximal runs of word characters, digits, or anything
/// else.
///
/// Concatenating the segments always reproduces the input.
pub fn segments(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<SegmentClass> = None;

    for (idx, ch) in line.char_indices() {
        let class = SegmentClass::of(ch);
        match current {
            Some(prev) if prev == class => {}
            Some(_) => {
                out.push(&line[start..idx]);
                start = idx;
                current = Some(class);
            }
            None => current = Some(class),
        }
    }
    if start < line.len() {
        out.push(&line[start..]);
    }
    out
}

/// Replace every segment found in the abbreviation table.
///
/// Matching is exact, so the line is expected to be uppercased already.
pub fn expand_abbreviations(line: &str) -> String {
    segments(line)
        .into_iter()
        .map(|segment| data::abbreviation(segment).unwrap_or(segment))
        .collect()
}

/// Rewrite the literal `"# 5"` unit marker.
pub fn fold_unit_marker(line: &str) -> String {
    line.replace(UNIT_MARKER, UNIT_MARKER_EXPANSION)
}
