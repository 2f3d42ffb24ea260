//! Address, letter and bundle value types.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a letter within a run.
pub type LetterId = i64;

/// Golden-file identifier reserved for the return-to-sender group.
pub const RETURN_TO_SENDER_ID: LetterId = -1;

/// A raw three-line postal address, kept exactly as the caller supplied it.
///
/// Equality is exact and case-sensitive over all three lines; no
/// normalization happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// Recipient or organisation line
    pub line1: String,
    /// Street line (number, street name, unit)
    pub line2: String,
    /// Locality line (city, state, zip)
    pub line3: String,
}

impl Address {
    /// Create a new address from its three lines.
    pub fn new(
        line1: impl Into<String>,
        line2: impl Into<String>,
        line3: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
            line3: line3.into(),
        }
    }

    /// The sentinel address of a bundle holding undeliverable letters.
    pub fn return_to_sender() -> Self {
        Self::new("RETURN TO SENDER", "", "")
    }

    /// Whether this is the return-to-sender sentinel.
    pub fn is_return_to_sender(&self) -> bool {
        *self == Self::return_to_sender()
    }

    /// The three lines in order.
    pub fn lines(&self) -> [&str; 3] {
        [self.line1.as_str(), self.line2.as_str(), self.line3.as_str()]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<&str> = self
            .lines()
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect();
        write!(f, "{}", lines.join(", "))
    }
}

/// One piece of mail.
///
/// Letters compare, hash and order by `id` alone.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter {
    /// Identifier, expected to be unique within a run
    pub id: LetterId,
    /// Destination as written on the envelope
    pub address: Address,
}

impl Letter {
    /// Create a new letter.
    pub fn new(id: LetterId, address: Address) -> Self {
        Self { id, address }
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Letter {}

impl Hash for Letter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Letter {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Letter {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter {}: {}", self.id, self.address)
    }
}

/// Letters headed for the same normalized destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bundle {
    address: Address,
    letters: HashSet<Letter>,
}

impl Bundle {
    /// Create an empty bundle displayed under `address`.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            letters: HashSet::new(),
        }
    }

    /// Add a letter. Returns `false` if a letter with the same id was present.
    pub fn add_letter(&mut self, letter: Letter) -> bool {
        self.letters.insert(letter)
    }

    /// Add several letters at once.
    pub fn add_letters<I: IntoIterator<Item = Letter>>(&mut self, letters: I) {
        self.letters.extend(letters);
    }

    /// Display address of the bundle.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Letters in the bundle, in no particular order.
    pub fn letters(&self) -> &HashSet<Letter> {
        &self.letters
    }

    /// Letters sorted by id.
    pub fn sorted_letters(&self) -> Vec<&Letter> {
        let mut letters: Vec<&Letter> = self.letters.iter().collect();
        letters.sort();
        letters
    }

    /// Check whether a letter with this id is in the bundle.
    pub fn contains(&self, id: LetterId) -> bool {
        self.letters.iter().any(|letter| letter.id == id)
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if the bundle holds no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pine() -> Address {
        Address::new("Jane Doe", "1324 Pine St.", "San Francisco, CA")
    }

    #[test]
    fn test_address_equality_is_exact() {
        assert_eq!(pine(), pine());
        assert_ne!(
            pine(),
            Address::new("Jane Doe", "1324 PINE ST.", "San Francisco, CA")
        );
    }

    #[test]
    fn test_address_display() {
        assert_eq!(
            pine().to_string(),
            "Jane Doe, 1324 Pine St., San Francisco, CA"
        );
        assert_eq!(Address::return_to_sender().to_string(), "RETURN TO SENDER");
        assert!(Address::return_to_sender().is_return_to_sender());
        assert!(!pine().is_return_to_sender());
    }

    #[test]
    fn test_letter_identity_is_id() {
        let a = Letter::new(7, pine());
        let b = Letter::new(7, Address::new("", "", ""));
        let c = Letter::new(8, pine());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
    }

    #[test]
    fn test_bundle_deduplicates_letters() {
        let mut bundle = Bundle::new(pine());
        assert!(bundle.is_empty());
        assert!(bundle.add_letter(Letter::new(3, pine())));
        assert!(!bundle.add_letter(Letter::new(3, pine())));
        bundle.add_letters(vec![Letter::new(1, pine()), Letter::new(2, pine())]);

        assert_eq!(bundle.len(), 3);
        assert!(bundle.contains(2));
        assert!(!bundle.contains(4));
        let ids: Vec<LetterId> = bundle.sorted_letters().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(bundle.address(), &pine());
    }
}
