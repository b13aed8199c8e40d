//! User-supplied template output
//!
//! Templates reference fields as `{{key}}`. Anything that is not a known key
//! is copied through unchanged.

use std::io::Write;

use crate::error::OutputError;
use crate::record::{Record, RecordSet};

/// Replace every `{{key}}` in `template` with the record's value for `key`
#[must_use]
pub fn substitute(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        match record.get(after[..end].trim()) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Write one substituted line per record
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_custom<W: Write>(
    records: &RecordSet,
    template: &str,
    out: &mut W,
) -> Result<(), OutputError> {
    for record in records.records() {
        writeln!(out, "{}", substitute(template, record))?;
    }
    Ok(())
}
