//! CSV import/export of vault entries.
//!
//! Export writes a `title,category,username,password,url,notes` header
//! followed by one row per entry.  A field containing a comma, quote or
//! line break is wrapped in double quotes with inner quotes doubled.
//!
//! Import skips the header row, accepts quoted fields that span lines,
//! and ignores rows with fewer than five columns.

use std::fmt::Write;

use crate::errors::{LusakeyError, Result};
use crate::vault::Entry;

/// Header row written on export.
pub const HEADER: &str = "title,category,username,password,url,notes";

/// Minimum number of columns for a row to become an entry.
const MIN_COLUMNS: usize = 5;

/// Render entries as CSV text.
pub fn to_csv(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for e in entries {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            escape_field(&e.title),
            escape_field(&e.category),
            escape_field(&e.username),
            escape_field(&e.password),
            escape_field(&e.url),
            escape_field(&e.notes),
        );
    }
    out
}

/// Parse CSV text into entries.
///
/// The first record is treated as a header and skipped.  An unterminated
/// quoted field is an error.
pub fn from_csv(content: &str) -> Result<Vec<Entry>> {
    let records = split_records(content)?;

    Ok(records
        .into_iter()
        .skip(1)
        .filter(|cols| cols.len() >= MIN_COLUMNS)
        .map(|mut cols| {
            cols.resize(6, String::new());
            let mut cols = cols.into_iter();
            let mut next = || cols.next().unwrap_or_default();
            Entry {
                title: next(),
                category: next(),
                username: next(),
                password: next(),
                url: next(),
                notes: next(),
            }
        })
        .collect())
}

/// Quote a field if it contains a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if !field.contains(&[',', '"', '\n', '\r'][..]) {
        return field.to_string();
    }
    let mut out = String::with_capacity(field.len() + 2);
    out.push('"');
    for c in field.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Split CSV text into records of fields, honoring quotes.
fn split_records(content: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_started = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => {
                in_quotes = true;
                quote_started = line;
            }
            ',' if !in_quotes => record.push(std::mem::take(&mut field)),
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                line += 1;
                record.push(std::mem::take(&mut field));
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            other => {
                if other == '\n' {
                    line += 1;
                }
                field.push(other);
            }
        }
    }

    if in_quotes {
        return Err(LusakeyError::ImportError(format!(
            "unterminated quoted field starting on line {quote_started}"
        )));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}
