//! Grouping letters into bundles by canonicalization key.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::BundlerConfig;
use crate::canonicalizer::canonicalize;
use crate::error::Result;
use crate::locality;
use crate::street::normalize_street;
use crate::types::{Address, Bundle, Letter};

/// Normalized street and locality lines; two letters share a bundle iff their
/// keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CanonicalKey {
    street: String,
    locality: String,
}

impl CanonicalKey {
    /// Run the full normalization pipeline over one address.
    pub(crate) fn of(address: &Address) -> Result<Self> {
        let street = normalize_street(&canonicalize(&address.line2));
        let locality = locality::resolve(&street, &canonicalize(&address.line3))?;
        Ok(Self { street, locality })
    }
}

/// Groups letters into bundles.
#[derive(Debug, Clone, Default)]
pub struct Bundler {
    config: BundlerConfig,
}

impl Bundler {
    /// Create a bundler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundler with custom configuration.
    pub fn with_config(config: BundlerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration used by this bundler.
    pub fn config(&self) -> &BundlerConfig {
        &self.config
    }

    /// Bundle letters by normalized destination.
    ///
    /// Every letter lands in exactly one bundle (assuming unique ids). Bundles
    /// come out in order of their first letter; each is displayed under that
    /// first letter's original address.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnresolvableLocality`] for the first letter
    /// whose locality line cannot be completed; no bundles are returned then.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mail_bundler::{Address, Bundler, Letter};
    ///
    /// let letters = vec![
    ///     Letter::new(1, Address::new("A", "1324 Pine St.", "San Francisco, CA")),
    ///     Letter::new(2, Address::new("B", "1324 Pine Street", "San Francisco, CA")),
    /// ];
    /// let bundles = Bundler::new().bundle(&letters)?;
    /// assert_eq!(bundles.len(), 1);
    /// # Ok::<(), mail_bundler::Error>(())
    /// ```
    pub fn bundle(&self, letters: &[Letter]) -> Result<Vec<Bundle>> {
        let keys = self.keys(letters)?;

        let mut index: HashMap<CanonicalKey, usize> = HashMap::new();
        let mut bundles: Vec<Bundle> = Vec::new();

        for (letter, key) in letters.iter().zip(keys) {
            let slot = *index.entry(key).or_insert_with(|| {
                bundles.push(Bundle::new(letter.address.clone()));
                bundles.len() - 1
            });
            bundles[slot].add_letter(letter.clone());
        }

        if self.config.log_bundles {
            for bundle in &bundles {
                tracing::debug!(
                    address = %bundle.address(),
                    letters = bundle.len(),
                    "bundle"
                );
            }
        }

        Ok(bundles)
    }

    /// Bundle letters and report run statistics.
    pub fn bundle_with_summary(
        &self,
        letters: &[Letter],
    ) -> Result<(Vec<Bundle>, BundleSummary)> {
        let started = Instant::now();
        let bundles = self.bundle(letters)?;
        let summary = BundleSummary::new(letters.len(), &bundles, started.elapsed());

        tracing::info!(
            letters = summary.letters,
            bundles = summary.bundles,
            largest = summary.largest_bundle,
            elapsed_us = summary.elapsed.as_micros() as u64,
            "bundling finished"
        );

        Ok((bundles, summary))
    }

    fn keys(&self, letters: &[Letter]) -> Result<Vec<CanonicalKey>> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;

                return letters
                    .par_iter()
                    .map(|letter| CanonicalKey::of(&letter.address))
                    .collect();
            }
        }

        letters
            .iter()
            .map(|letter| CanonicalKey::of(&letter.address))
            .collect()
    }
}

/// Statistics for one bundling run.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSummary {
    /// Number of input letters
    pub letters: usize,
    /// Number of bundles produced
    pub bundles: usize,
    /// Letter count of the largest bundle
    pub largest_bundle: usize,
    /// Wall-clock time spent bundling
    pub elapsed: Duration,
}

impl BundleSummary {
    fn new(letters: usize, bundles: &[Bundle], elapsed: Duration) -> Self {
        Self {
            letters,
            bundles: bundles.len(),
            largest_bundle: bundles.iter().map(Bundle::len).max().unwrap_or(0),
            elapsed,
        }
    }

    /// Average letters per bundle.
    pub fn letters_per_bundle(&self) -> f64 {
        if self.bundles > 0 {
            self.letters as f64 / self.bundles as f64
        } else {
            0.0
        }
    }
}
