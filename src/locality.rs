//! Locality-line resolution: zip truncation and table-driven completion.

use crate::data;
use crate::error::{Error, Result};

/// Number of leading zip digits kept in a normalized locality line.
pub const ZIP_PREFIX_LEN: usize = 4;

fn is_zip(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit())
}

fn is_place_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Produce the normalized locality line for a letter.
///
/// `line2` must already be street-normalized and `line3` canonicalized. Zip
/// tokens are cut to [`ZIP_PREFIX_LEN`] digits. A missing zip is looked up
/// from the street line (falling back to `"0"`); a missing city/state is
/// looked up from the whole locality line.
///
/// # Errors
///
/// Returns [`Error::UnresolvableLocality`] when `line3` has no alphabetic
/// token and is not a known zip.
pub fn resolve(line2: &str, line3: &str) -> Result<String> {
    let mut tokens: Vec<String> = line3.split(' ').map(str::to_string).collect();
    let mut has_zip = false;
    let mut has_place = false;

    for token in tokens.iter_mut() {
        if is_zip(token) {
            token.truncate(ZIP_PREFIX_LEN);
            has_zip = true;
        }
        if is_place_name(token) {
            has_place = true;
        }
    }

    if !has_zip {
        let zip = data::street_zip(line2, line3).unwrap_or_else(|| {
            tracing::warn!(line2, line3, "no zip on record, using fallback");
            data::UNKNOWN_ZIP
        });
        tokens.push(zip.to_string());
    }

    if !has_place {
        let place = data::zip_city_state(line3).ok_or_else(|| Error::unresolvable_locality(line3))?;
        let mut prefixed: Vec<String> = place.iter().map(|token| token.to_string()).collect();
        prefixed.append(&mut tokens);
        tokens = prefixed;
    }

    Ok(tokens.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_resolve_truncates_zip() {
        assert_eq!(
            resolve("1 MAIN STREET", "SAN FRANCISCO CA 941071234").unwrap(),
            "SAN FRANCISCO CA 9410"
        );
        assert_eq!(
            resolve("1 MAIN STREET", "SAN FRANCISCO CA 94107").unwrap(),
            "SAN FRANCISCO CA 9410"
        );
        assert_eq!(
            resolve("1 MAIN STREET", "WASHINGTON DC 205").unwrap(),
            "WASHINGTON DC 205"
        );
    }

    #[test]
    fn test_resolve_appends_known_zip() {
        assert_eq!(
            resolve("1324 PINE STREET", "SAN FRANCISCO CA").unwrap(),
            "SAN FRANCISCO CA 9410"
        );
        assert_eq!(
            resolve("1", "WASHINGTON DC").unwrap(),
            "WASHINGTON DC 20008"
        );
    }

    #[test]
    fn test_resolve_falls_back_to_unknown_zip() {
        assert_eq!(
            resolve("99 NOWHERE STREET", "SAN FRANCISCO CA").unwrap(),
            "SAN FRANCISCO CA 0"
        );
    }

    #[test]
    fn test_resolve_prepends_city_state() {
        assert_eq!(
            resolve("330 TOWNSEND STREET", "94107").unwrap(),
            "SAN FRANCISCO CA 9410"
        );
    }

    #[test]
    fn test_resolve_fails_on_unknown_bare_zip() {
        assert_matches!(
            resolve("1 MAIN STREET", "12345"),
            Err(Error::UnresolvableLocality { line3 }) if line3 == "12345"
        );
    }

    #[test]
    fn test_resolve_fails_on_empty_line() {
        // An empty line has neither kind of token; the zip fallback applies
        // and then the city/state lookup misses.
        assert_matches!(
            resolve("1 MAIN STREET", ""),
            Err(Error::UnresolvableLocality { .. })
        );
    }

    #[test]
    fn test_resolve_keeps_empty_tokens() {
        // Double spaces survive as empty tokens.
        assert_eq!(
            resolve("1 MAIN STREET", "SAN FRANCISCO  CA 94107").unwrap(),
            "SAN FRANCISCO  CA 9410"
        );
    }

    #[test]
    fn test_mixed_tokens_count_as_neither() {
        assert_matches!(
            resolve("1 MAIN STREET", "CA94107"),
            Err(Error::UnresolvableLocality { .. })
        );
    }
}
