//! Aligned table output

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::OutputError;
use crate::record::RecordSet;

/// Width of every column: the widest of the header and all cells
#[must_use]
pub fn column_widths(records: &RecordSet) -> Vec<usize> {
    let mut widths: Vec<usize> = records
        .columns()
        .iter()
        .map(|column| column.label.width())
        .collect();

    for record in records.records() {
        for (width, field) in widths.iter_mut().zip(record.fields()) {
            *width = (*width).max(field.value().width());
        }
    }
    widths
}

/// Write a header line and one line per record
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_table<W: Write>(records: &RecordSet, out: &mut W) -> Result<(), OutputError> {
    let columns = records.columns();
    if columns.is_empty() {
        return Ok(());
    }
    let widths = column_widths(records);

    let header = columns.iter().map(|column| column.label.as_str());
    writeln!(out, "{}", line(header, &widths))?;

    for record in records.records() {
        let cells = record.fields().iter().map(|field| field.value());
        writeln!(out, "{}", line(cells, &widths))?;
    }
    Ok(())
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.width());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    line.truncate(line.trim_end().len());
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> RecordSet {
        let mut set = RecordSet::new();
        for (code, name) in [("LON1", "London 1"), ("NYC1", "New York 1")] {
            set.start_record()
                .append_field("code", code, "Code")
                .unwrap()
                .append_field("name", name, "Name")
                .unwrap();
        }
        set
    }

    fn render(set: &RecordSet) -> String {
        let mut out = Vec::new();
        write_table(set, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_widths_take_max_of_header_and_cells() {
        assert_eq!(column_widths(&regions()), vec![4, 10]);
    }

    #[test]
    fn test_aligned_output() {
        let expected = "Code Name\nLON1 London 1\nNYC1 New York 1\n";
        assert_eq!(render(&regions()), expected);
    }

    #[test]
    fn test_header_wider_than_cells() {
        let mut set = RecordSet::new();
        set.start_record()
            .append_field("mount_point", "/a", "Mount Point")
            .unwrap()
            .append_field("status", "ok", "Status")
            .unwrap();

        assert_eq!(render(&set), "Mount Point Status\n/a          ok\n");
    }

    #[test]
    fn test_no_truncation() {
        let mut set = RecordSet::new();
        let long = "x".repeat(200);
        set.start_record().append_field("id", long.as_str(), "ID").unwrap();

        assert!(render(&set).contains(&long));
    }

    #[test]
    fn test_empty_set_with_columns_prints_header() {
        let set = RecordSet::with_columns([("id", "ID"), ("name", "Name")]);
        assert_eq!(render(&set), "ID Name\n");
    }

    #[test]
    fn test_empty_set_without_columns_prints_nothing() {
        assert_eq!(render(&RecordSet::new()), "");
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let mut set = RecordSet::new();
        set.start_record()
            .append_field("name", "東京", "Name")
            .unwrap()
            .append_field("code", "TYO1", "Code")
            .unwrap();

        assert_eq!(render(&set), "Name Code\n東京 TYO1\n");
    }
}
