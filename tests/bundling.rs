use std::fs;
use std::io::Cursor;

use assert_matches::assert_matches;
use mail_bundler::golden::{self, Mismatch, Verification};
use mail_bundler::{Address, Bundler, BundlerConfig, Error, Letter, bundle_mail, loader, report};

const INPUT: &str = "\
1
Jane Doe
1324 Pine St.
San Francisco, CA
2
John Roe
1324 Pine Street
San Francisco, CA 94107
3
Acme Corp
330 Townsend St. #240
94107
4
Acme Corp
330 Townsend Street, Apt. 240
San Francisco, CA
5
Ann Lee
1324 Pine St # 5
San Francisco, CA
6
Ann Lee
1324 Pine St. Unit 5
San Francisco, CA 94107
7
Ann Lee
1324 Pine St. #5
San Francisco CA
8
The President
1600 Pennsylvania Ave. NW
Washington, DC
9
The President
1600 Pennsylvania Avenue
Washington, D.C. 20500
10
The Vice President
1 Observatory Cir.
Washington, DC
11
The Vice President
1 Observatory Circle
Washington DC 20008
12
Bob Ray
246 Kearny
SF, CA
13
Bob Ray
246 Kearny St
SF CA
";

const GOLDEN: &str = "\
1 2
3 4
5 6 7
8 9
10
11
12
13
";

fn input() -> Vec<Letter> {
    loader::load_letters(Cursor::new(INPUT)).unwrap()
}

fn golden() -> Vec<Vec<i64>> {
    golden::load_golden(Cursor::new(GOLDEN)).unwrap()
}

#[test]
fn bundles_match_golden_grouping() {
    let letters = input();
    assert_eq!(letters.len(), 13);

    let bundles = bundle_mail(&letters).unwrap();
    assert_eq!(bundles.len(), 8);
    assert_eq!(golden::verify(&bundles, &golden(), &letters), Verification::Passed);
}

#[test]
fn display_address_is_an_original_member_address() {
    let letters = input();
    for bundle in bundle_mail(&letters).unwrap() {
        assert!(
            bundle
                .letters()
                .iter()
                .any(|letter| &letter.address == bundle.address())
        );
    }
}

#[test]
fn wrong_golden_is_reported() {
    let letters = input();
    let bundles = bundle_mail(&letters).unwrap();
    let expected = golden::load_golden(Cursor::new("1 2\n3 4\n5 6 7\n8 9\n10 11\n12 13\n")).unwrap();

    assert_matches!(
        golden::verify(&bundles, &expected, &letters),
        Verification::Failed(Mismatch::Misgrouped { letter: 11, expected: 10, actual: 11, .. })
    );
}

#[test]
fn dropped_letter_is_reported() {
    let letters = input();
    let bundles = bundle_mail(&letters[..12]).unwrap();

    assert_matches!(
        golden::verify(&bundles, &golden(), &letters),
        Verification::Failed(Mismatch::MissingLetters(missing)) if missing.len() == 1 && missing[0].id == 13
    );
}

#[test]
fn unknown_bare_zip_fails_the_run() {
    let mut letters = input();
    letters.push(Letter::new(
        14,
        Address::new("Nobody", "1 Nowhere Rd", "10001"),
    ));

    assert_matches!(
        bundle_mail(&letters),
        Err(Error::UnresolvableLocality { line3 }) if line3 == "10001"
    );
}

#[test]
fn bundling_is_independent_of_input_order() {
    let letters = input();
    let mut reversed = letters.clone();
    reversed.reverse();

    let bundles = bundle_mail(&reversed).unwrap();
    assert_eq!(golden::verify(&bundles, &golden(), &letters), Verification::Passed);
}

#[test]
fn summary_and_reports_from_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), INPUT).unwrap();
    fs::write(dir.path().join("output.txt"), GOLDEN).unwrap();

    let letters = loader::load_letters_from_path(dir.path().join("input.txt")).unwrap();
    let expected = golden::load_golden_from_path(dir.path().join("output.txt")).unwrap();

    let bundler = Bundler::with_config(BundlerConfig::builder().log_bundles(true).build());
    let (bundles, summary) = bundler.bundle_with_summary(&letters).unwrap();
    assert!(golden::verify(&bundles, &expected, &letters).passed());
    assert_eq!(summary.letters, 13);
    assert_eq!(summary.bundles, 8);
    assert_eq!(summary.largest_bundle, 3);

    let mut csv = Vec::new();
    report::write_csv(&bundles, &mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert_eq!(csv.lines().count(), 9);
    assert!(csv.contains(",5 6 7\n"));

    let mut table = Vec::new();
    report::write_table(&bundles, &mut table).unwrap();
    let table = String::from_utf8(table).unwrap();
    assert_eq!(table.lines().filter(|line| line.starts_with('\t')).count(), 13);
}
