//! Street-line normalization: designator insertion and unit folding.

/// Tokens that end the street part of a line.
pub const STREET_DESIGNATORS: [&str; 2] = ["STREET", "AVENUE"];

const UNIT_PREFIX: &str = "APARTMENT ";

/// Normalize a canonicalized street line.
///
/// Runs [`ensure_street_token`] and then [`fold_trailing_unit`]; the order
/// matters, since folding looks for the designator the first step may add.
pub fn normalize_street(line: &str) -> String {
    fold_trailing_unit(&ensure_street_token(line))
}

/// Append `STREET` when the line mentions neither designator.
///
/// The designator is glued on without a space, so `"246 KEARNY"` becomes
/// `"246 KEARNYSTREET"`. Grouping keys depend on this exact form.
pub fn ensure_street_token(line: &str) -> String {
    if STREET_DESIGNATORS
        .iter()
        .any(|designator| line.contains(designator))
    {
        line.to_string()
    } else {
        format!("{line}{}", STREET_DESIGNATORS[0])
    }
}

/// Fold a single `#n` token after the last designator into `APARTMENT n`.
///
/// The line is always re-joined with single spaces, even when nothing is
/// folded.
///
/// # Example
///
/// ```rust
/// use mail_bundler::street::fold_trailing_unit;
///
/// assert_eq!(
///     fold_trailing_unit("330 TOWNSEND STREET #240"),
///     "330 TOWNSEND STREET APARTMENT 240"
/// );
/// ```
pub fn fold_trailing_unit(line: &str) -> String {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();

    let designator = tokens
        .iter()
        .rposition(|token| STREET_DESIGNATORS.contains(&token.as_str()));

    if let Some(idx) = designator {
        if idx + 2 == tokens.len() && tokens[idx + 1].contains('#') {
            let unit = tokens[idx + 1].replace('#', UNIT_PREFIX);
            tokens[idx + 1] = unit;
        }
    }

    tokens.join(" ")
}
