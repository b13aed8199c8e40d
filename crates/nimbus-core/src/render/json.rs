//! JSON output
//!
//! Keys are machine keys and every value is a JSON string, so JSON and custom
//! template output always show identical values.

use std::io::Write;

use serde::Serialize;

use crate::error::OutputError;
use crate::record::{Record, RecordSet};

/// Write the only record of the set as one object
///
/// An empty set is written as `{}`.
///
/// # Errors
/// Returns `ExpectedSingleRecord` if the set holds more than one record, or an
/// error if encoding or writing fails.
pub fn write_single<W: Write>(
    records: &RecordSet,
    pretty: bool,
    out: &mut W,
) -> Result<(), OutputError> {
    match records.records() {
        [] => encode(&Record::new(), pretty, out),
        [record] => encode(record, pretty, out),
        many => Err(OutputError::ExpectedSingleRecord { found: many.len() }),
    }
}

/// Write every record as an array of objects
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn write_array<W: Write>(
    records: &RecordSet,
    pretty: bool,
    out: &mut W,
) -> Result<(), OutputError> {
    encode(records.records(), pretty, out)
}

fn encode<T, W>(value: &T, pretty: bool, out: &mut W) -> Result<(), OutputError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
