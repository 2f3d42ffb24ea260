//! Reading letters from the four-lines-per-letter text format.
//!
//! Each letter is an id line followed by the three address lines:
//!
//! ```text
//! 1
//! Jane Doe
//! 1324 Pine St.
//! San Francisco, CA
//! 2
//! ...
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Address, Letter, LetterId};

const LINES_PER_LETTER: usize = 4;

/// Read letters from a buffered reader.
///
/// Lines are trimmed. Trailing blank lines are ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] for a truncated final record or an id
/// line that is not an integer, and [`Error::IoError`] when reading fails.
pub fn load_letters<R: BufRead>(reader: R) -> Result<Vec<Letter>> {
    let mut lines = reader
        .lines()
        .map(|line| line.map(|l| l.trim().to_string()))
        .collect::<std::io::Result<Vec<String>>>()?;

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let letters = lines
        .chunks(LINES_PER_LETTER)
        .enumerate()
        .map(|(n, record)| parse_record(n * LINES_PER_LETTER + 1, record))
        .collect::<Result<Vec<Letter>>>()?;

    tracing::debug!(count = letters.len(), "loaded letters");
    Ok(letters)
}

/// Read letters from a file.
pub fn load_letters_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Letter>> {
    let file = File::open(path.as_ref())?;
    load_letters(BufReader::new(file))
}

fn parse_record(line: usize, record: &[String]) -> Result<Letter> {
    let [id, line1, line2, line3] = record else {
        return Err(Error::malformed_record(
            line,
            format!(
                "expected {} address lines, found {}",
                LINES_PER_LETTER - 1,
                record.len().saturating_sub(1)
            ),
        ));
    };

    let id: LetterId = id
        .parse()
        .map_err(|e| Error::malformed_record(line, format!("invalid letter id {id:?}: {e}")))?;

    Ok(Letter::new(
        id,
        Address::new(line1.as_str(), line2.as_str(), line3.as_str()),
    ))
}
