//! # mail-bundler
//!
//! Groups letters into delivery bundles by normalizing US-style postal
//! addresses.
//!
//! Two letters share a bundle when their street and locality lines normalize
//! to the same text, even if the raw lines differ in punctuation,
//! abbreviations or unit formatting.
//!
//! ## Pipeline
//!
//! - **Canonicalization**: strip `,` `.` `-`, uppercase, expand abbreviations
//! - **Street normalization**: ensure a `STREET`/`AVENUE` designator, fold
//!   trailing `#n` units into `APARTMENT n`
//! - **Locality resolution**: cut zips to four digits, fill in missing zips and
//!   city/state from built-in tables
//! - **Bundling**: group letters by the normalized lines
//!
//! ## Quick Start
//!
//! ```rust
//! use mail_bundler::{Address, Letter, bundle_mail};
//!
//! let letters = vec![
//!     Letter::new(1, Address::new("Jane Doe", "1324 Pine St.", "San Francisco, CA")),
//!     Letter::new(2, Address::new("John Roe", "1324 Pine Street", "San Francisco, CA")),
//!     Letter::new(3, Address::new("Acme", "330 Townsend St. #240", "94107")),
//! ];
//!
//! let bundles = bundle_mail(&letters)?;
//! assert_eq!(bundles.len(), 2);
//! # Ok::<(), mail_bundler::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bundler;
pub mod canonicalizer;
pub mod data;
pub mod error;
pub mod golden;
pub mod loader;
pub mod locality;
pub mod report;
pub mod street;
pub mod types;

// Re-export main API
pub use bundler::{BundleSummary, Bundler};
pub use error::{Error, Result};
pub use golden::{Mismatch, Verification};
pub use types::*;

/// Bundle letters with the default configuration.
///
/// # Errors
///
/// Returns [`Error::UnresolvableLocality`] if any letter's locality line has
/// no city/state and is not a known zip.
pub fn bundle_mail(letters: &[Letter]) -> Result<Vec<Bundle>> {
    Bundler::new().bundle(letters)
}

/// Configuration for a [`Bundler`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundlerConfig {
    /// Compute normalization keys on the rayon thread pool.
    ///
    /// Only takes effect when the `parallel` feature is enabled. Output is the
    /// same either way.
    pub parallel: bool,

    /// Emit a debug event for every bundle produced
    pub log_bundles: bool,
}

impl BundlerConfig {
    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mail_bundler::BundlerConfig;
    ///
    /// let config = BundlerConfig::builder()
    ///     .parallel(true)
    ///     .log_bundles(false)
    ///     .build();
    /// assert!(config.parallel);
    /// ```
    pub fn builder() -> BundlerConfigBuilder {
        BundlerConfigBuilder::new()
    }
}

/// Builder for BundlerConfig.
#[derive(Debug, Clone, Default)]
pub struct BundlerConfigBuilder {
    parallel: bool,
    log_bundles: bool,
}

impl BundlerConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to normalize letters in parallel.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set whether to log every bundle.
    pub fn log_bundles(mut self, enabled: bool) -> Self {
        self.log_bundles = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> BundlerConfig {
        BundlerConfig {
            parallel: self.parallel,
            log_bundles: self.log_bundles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        assert_eq!(BundlerConfig::builder().build(), BundlerConfig::default());

        let config = BundlerConfig::builder().parallel(true).log_bundles(true).build();
        assert!(config.parallel);
        assert!(config.log_bundles);
        assert_eq!(Bundler::with_config(config.clone()).config(), &config);
    }
}
