//! Golden-file loading and verification of bundling output.
//!
//! A golden file lists one expected bundle per line as ascending,
//! whitespace-separated letter ids. The id [`RETURN_TO_SENDER_ID`] heads the
//! group of letters expected to be returned to sender.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Address, Bundle, Letter, LetterId, RETURN_TO_SENDER_ID};

/// Expected grouping: one ascending id list per bundle.
pub type Golden = Vec<Vec<LetterId>>;

/// Read a golden file from a buffered reader.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`Error::GoldenFormat`] for non-integer ids or lists that are not
/// ascending.
pub fn load_golden<R: BufRead>(reader: R) -> Result<Golden> {
    let mut golden = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let ids = line
            .split_whitespace()
            .map(|id| {
                id.parse::<LetterId>()
                    .map_err(|e| Error::golden_format(n + 1, format!("invalid id {id:?}: {e}")))
            })
            .collect::<Result<Vec<LetterId>>>()?;

        if ids.is_empty() {
            continue;
        }
        if !ids.is_sorted() {
            return Err(Error::golden_format(n + 1, "ids must be ascending"));
        }
        golden.push(ids);
    }

    Ok(golden)
}

/// Read a golden file from disk.
pub fn load_golden_from_path<P: AsRef<Path>>(path: P) -> Result<Golden> {
    let file = File::open(path.as_ref())?;
    load_golden(BufReader::new(file))
}

/// Outcome of comparing bundles against a golden file.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// Output matches the expected grouping
    Passed,
    /// The first problem found
    Failed(Mismatch),
}

impl Verification {
    /// Check if verification passed.
    pub fn passed(&self) -> bool {
        matches!(self, Verification::Passed)
    }
}

/// A reason bundling output does not match expectations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Mismatch {
    /// A bundle is displayed under an address none of its letters carry
    #[error("ERROR: Could not find the following address in any Letter in the Bundle:\n{0}")]
    ForeignAddress(Address),

    /// Input letters absent from every bundle
    #[error("ERROR: The following Letters were not found in output:\n{}", lines(.0))]
    MissingLetters(Vec<Letter>),

    /// Addresses displayed by more than one bundle
    #[error("ERROR: Found more than one bundle for the following addresses:\n{}", lines(.0))]
    DuplicateAddresses(Vec<Address>),

    /// Letters placed in more than one bundle
    #[error("ERROR: Found letters in more than one bundle:\n{}", lines(.0))]
    DuplicateLetters(Vec<Letter>),

    /// A letter grouped differently from the golden file
    #[error("The output did not match the expected values.\nThe first error was:\n\n{detail}")]
    Misgrouped {
        /// The misplaced letter
        letter: LetterId,
        /// Head of the golden group the letter belongs to
        expected: LetterId,
        /// Head of the group the letter was placed in
        actual: LetterId,
        /// Human-readable explanation
        detail: String,
    },
}

fn lines<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compare bundling output against the golden grouping.
///
/// Structural checks run first: each bundle's address must belong to one of
/// its letters (unless it is the return-to-sender sentinel), every input
/// letter must be bundled, and no address or letter may repeat across
/// bundles. Then each letter's group, identified by its smallest id, must
/// match the golden group.
pub fn verify(output: &[Bundle], expected: &[Vec<LetterId>], input: &[Letter]) -> Verification {
    match check(output, expected, input) {
        Ok(()) => Verification::Passed,
        Err(mismatch) => Verification::Failed(mismatch),
    }
}

fn check(
    output: &[Bundle],
    expected: &[Vec<LetterId>],
    input: &[Letter],
) -> std::result::Result<(), Mismatch> {
    let mut found: HashSet<LetterId> = HashSet::new();
    let mut duplicates: BTreeSet<&Letter> = BTreeSet::new();
    let mut addresses: HashSet<&Address> = HashSet::new();
    let mut address_duplicates: BTreeSet<&Address> = BTreeSet::new();

    for bundle in output {
        let address = bundle.address();
        if !address.is_return_to_sender()
            && !bundle.letters().iter().any(|letter| &letter.address == address)
        {
            return Err(Mismatch::ForeignAddress(address.clone()));
        }

        if !addresses.insert(address) {
            address_duplicates.insert(address);
        }

        for letter in bundle.letters() {
            if !found.insert(letter.id) {
                duplicates.insert(letter);
            }
        }
    }

    let mut missing: Vec<Letter> = input
        .iter()
        .filter(|letter| !found.contains(&letter.id))
        .cloned()
        .collect();
    if !missing.is_empty() {
        missing.sort();
        missing.dedup();
        return Err(Mismatch::MissingLetters(missing));
    }

    if !address_duplicates.is_empty() {
        return Err(Mismatch::DuplicateAddresses(
            address_duplicates.into_iter().cloned().collect(),
        ));
    }

    if !duplicates.is_empty() {
        return Err(Mismatch::DuplicateLetters(
            duplicates.into_iter().cloned().collect(),
        ));
    }

    let mut actual: BTreeMap<LetterId, LetterId> = BTreeMap::new();
    let mut by_id: HashMap<LetterId, &Letter> = HashMap::new();
    for bundle in output {
        let letters = bundle.sorted_letters();
        let head = if bundle.address().is_return_to_sender() {
            RETURN_TO_SENDER_ID
        } else {
            letters.first().map_or(RETURN_TO_SENDER_ID, |letter| letter.id)
        };
        for letter in letters {
            actual.insert(letter.id, head);
            by_id.insert(letter.id, letter);
        }
    }

    let mut golden: HashMap<LetterId, LetterId> = HashMap::new();
    for group in expected {
        if let Some(&head) = group.first() {
            for &id in group {
                golden.insert(id, head);
            }
        }
    }

    let describe = |id: LetterId| {
        by_id
            .get(&id)
            .map_or_else(|| format!("Letter {id}"), |letter| letter.to_string())
    };

    for (&id, &head) in &actual {
        let Some(&expected_head) = golden.get(&id) else {
            return Err(Mismatch::Misgrouped {
                letter: id,
                expected: id,
                actual: head,
                detail: format!("{}\n\nis not listed in the expected output.", describe(id)),
            });
        };
        if expected_head == head {
            continue;
        }

        let mut detail = describe(id);
        if expected_head == RETURN_TO_SENDER_ID {
            detail.push_str("\n\nwas expected to be returned to sender.");
        } else {
            detail.push_str(&format!(
                "\n\nwas expected to be in the same bundle as\n\n{}",
                describe(expected_head)
            ));
            if head == RETURN_TO_SENDER_ID {
                detail.push_str("\n\nand not returned to sender.");
            } else if id != head {
                detail.push_str(&format!(
                    "\n\nand not in the same bundle as\n\n{}",
                    describe(head)
                ));
            }
        }

        return Err(Mismatch::Misgrouped {
            letter: id,
            expected: expected_head,
            actual: head,
            detail,
        });
    }

    Ok(())
}
