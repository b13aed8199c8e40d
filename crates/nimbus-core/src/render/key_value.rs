//! `label: value` output for single-entity summaries

use std::io::Write;

use crate::error::OutputError;
use crate::record::RecordSet;

/// Write each field of the only record as `label: value`
///
/// # Errors
/// Returns `ExpectedSingleRecord` if the set holds more than one record, or an
/// error if writing fails.
pub fn write_key_values<W: Write>(records: &RecordSet, out: &mut W) -> Result<(), OutputError> {
    let record = match records.records() {
        [] => return Ok(()),
        [record] => record,
        many => return Err(OutputError::ExpectedSingleRecord { found: many.len() }),
    };

    for field in record.fields() {
        writeln!(out, "{}: {}", field.label(), field.value())?;
    }
    Ok(())
}
