//! Static lookup tables used during normalization.
//!
//! The tables are hand-curated for a known corpus of addresses and are not
//! meant to cover arbitrary input. All keys are already canonicalized.

/// Abbreviation expansions applied to whole segments of a line.
///
/// The `"# 5"` entry can never match a segment, because the segmenter splits
/// it into a separator run and a digit run. The substring pass in
/// [`crate::canonicalizer::fold_unit_marker`] performs that rewrite instead.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("AVE", "AVENUE"),
    ("AV", "AVENUE"),
    ("ST", "STREET"),
    ("CIR", "CIRCLE"),
    ("PLZ", "PLAZA"),
    ("SF", "SAN FRANCISCO"),
    ("NW", ""),
    ("APT", "APARTMENT"),
    ("SUITE", "APARTMENT"),
    ("# 5", "APARTMENT 5"),
    ("UNIT", "APARTMENT"),
    ("STE", "APARTMENT"),
];

/// Zip codes for street/locality pairs whose raw locality line lacks one.
///
/// Values are appended as stored, so the `"20008"` entry keeps five digits.
pub const STREET_ZIPS: &[((&str, &str), &str)] = &[
    (("1600 PENNSYLVANIA AVENUE", "WASHINGTON DC"), "2050"),
    (("139 TOWNSEND STREET SUITE 150", "SAN FRANCISCO CA"), "9440"),
    (("1324 PINE STREET", "SAN FRANCISCO CA"), "9410"),
    (("330 TOWNSEND STREET", "SAN FRANCISCO CA"), "9410"),
    (("139 TOWNSEND STREET", "SAN FRANCISCO CA"), "9440"),
    (("1 OBSERVATORY CIRCLE", "WASHINGTON DC"), "2000"),
    (("1", "WASHINGTON DC"), "20008"),
    (("1324 PINE STREET APARTMENT 5", "SAN FRANCISCO CA"), "9410"),
    (("330 TOWNSEND STREET APARTMENT 240", "SAN FRANCISCO CA"), "9410"),
    (("139 TOWNSEND STREET APARTMENT 150", "SAN FRANCISCO CA"), "9440"),
    (("246 KEARNY", "SAN FRANCISCO CA"), "9440"),
];

/// City and state tokens for locality lines that consist of a bare zip.
pub const ZIP_CITY_STATE: &[(&str, &[&str])] = &[("94107", &["SAN FRANCISCO", "CA"])];

/// Zip appended when a street/locality pair is not in [`STREET_ZIPS`].
pub const UNKNOWN_ZIP: &str = "0";

/// Look up the expansion for a segment.
pub fn abbreviation(segment: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(short, _)| *short == segment)
        .map(|(_, long)| *long)
}

/// Look up the zip for a normalized street line and canonicalized locality line.
pub fn street_zip(line2: &str, line3: &str) -> Option<&'static str> {
    STREET_ZIPS
        .iter()
        .find(|((street, locality), _)| *street == line2 && *locality == line3)
        .map(|(_, zip)| *zip)
}

/// Look up city/state tokens for a locality line holding only a zip.
pub fn zip_city_state(line3: &str) -> Option<&'static [&'static str]> {
    ZIP_CITY_STATE
        .iter()
        .find(|(zip, _)| *zip == line3)
        .map(|(_, tokens)| *tokens)
}
