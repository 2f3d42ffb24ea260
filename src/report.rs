//! Human-readable and CSV dumps of bundles.

use std::io::Write;

use crate::error::Result;
use crate::types::Bundle;

/// Header row of the CSV dump.
pub const CSV_HEADER: [&str; 2] = ["Destination Address", "Letters"];

/// Write bundles as a plain-text table.
///
/// Each bundle is its address, a blank line, one tab-indented line per letter
/// (sorted by id), and a blank line.
pub fn write_table<W: Write>(bundles: &[Bundle], mut writer: W) -> Result<()> {
    for bundle in bundles {
        writeln!(writer, "{}\n", bundle.address())?;
        for letter in bundle.sorted_letters() {
            writeln!(writer, "\t{letter}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write bundles as a two-column CSV: address, then space-separated letter ids.
pub fn write_csv<W: Write>(bundles: &[Bundle], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;

    for bundle in bundles {
        let ids = bundle
            .sorted_letters()
            .iter()
            .map(|letter| letter.id.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        csv.write_record([bundle.address().to_string(), ids])?;
    }

    csv.flush()?;
    Ok(())
}
