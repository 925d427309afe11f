//! Export adapters: CSV, spreadsheet and renamed-PDF archive.

pub mod archive;
pub mod xlsx;

use std::io::Write;

use qex_core::{BatchResult, FIELD_NAMES};

/// Write the batch result as delimited text, one row per document.
///
/// The header row is the canonical column list; every record writes
/// all 42 values in display order.
pub fn write_csv<W: Write>(result: &BatchResult, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(FIELD_NAMES)?;
    for record in result.records() {
        wtr.write_record(record.values())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Build an output filename, optionally timestamped.
pub fn output_name(stem: &str, extension: &str, timestamped: bool) -> String {
    if timestamped {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("{stem}_{timestamp}.{extension}")
    } else {
        format!("{stem}.{extension}")
    }
}
