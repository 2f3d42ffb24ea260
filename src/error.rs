//! Error types and handling for mail-bundler.

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bundling operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The locality line carries no city/state and is not a known zip
    #[error("Cannot resolve city/state for locality line {line3:?}")]
    UnresolvableLocality {
        /// Canonicalized locality line that missed the lookup
        line3: String,
    },

    /// Letter input did not follow the four-lines-per-letter layout
    #[error("Malformed letter record at line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number where the record starts
        line: usize,
        /// Error message
        message: String,
    },

    /// Golden output file could not be interpreted
    #[error("Malformed golden file at line {line}: {message}")]
    GoldenFormat {
        /// 1-based line number
        line: usize,
        /// Error message
        message: String,
    },

    /// I/O errors
    #[error("I/O error: {source}")]
    IoError {
        /// Source error
        #[from]
        source: std::io::Error,
    },

    /// CSV serialization errors
    #[error("CSV error: {source}")]
    CsvError {
        /// Source error
        #[from]
        source: csv::Error,
    },
}

impl Error {
    /// Create a new unresolvable locality error
    pub fn unresolvable_locality(line3: impl Into<String>) -> Self {
        Self::UnresolvableLocality {
            line3: line3.into(),
        }
    }

    /// Create a new malformed record error
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a new golden format error
    pub fn golden_format(line: usize, message: impl Into<String>) -> Self {
        Self::GoldenFormat {
            line,
            message: message.into(),
        }
    }
}
