//! CSV import adapter.
//!
//! Reads a payroll file into raw rows and hands them to the aggregator.
//! The first line is a header and is skipped; field meaning is positional
//! (employee id, hours, rate, visa, year-to-date), so the header's spelling
//! does not matter. A single malformed row aborts the whole import, and an
//! unreadable file is an explicit error rather than an empty batch.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::aggregate::build_pay_records;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PayRecord, PayRow};

/// Imports a payroll file into one pay record per contiguous employee run.
///
/// # Errors
///
/// Returns [`PayrollError::FileUnreadable`] if the file cannot be opened and
/// [`PayrollError::MalformedRow`] if any row fails type conversion.
pub fn import_pay_records<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<PayRecord>> {
    let path = path.as_ref();

    let rows = read_pay_rows(path)?;
    let records = build_pay_records(rows)?;

    info!(
        path = %path.display(),
        records = records.len(),
        "imported pay records"
    );

    Ok(records)
}

/// Reads the raw rows of a payroll file, skipping the header line.
///
/// # Errors
///
/// Returns [`PayrollError::FileUnreadable`] if the file cannot be opened and
/// [`PayrollError::MalformedRow`] if any row fails type conversion.
pub fn read_pay_rows<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<PayRow>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| PayrollError::FileUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| PayrollError::MalformedRow {
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;

        let line = record.position().map_or(0, |p| p.line());
        rows.push(parse_row(&record, line)?);
    }

    Ok(rows)
}

fn parse_row(record: &StringRecord, line: u64) -> PayrollResult<PayRow> {
    Ok(PayRow {
        employee_id: parse_field(record, 0, "employee id", line)?,
        hours: parse_field(record, 1, "hours", line)?,
        rate: parse_field(record, 2, "rate", line)?,
        visa: parse_optional_field(record, 3, "visa", line)?,
        year_to_date: parse_optional_field(record, 4, "year to date", line)?,
    })
}

fn field<'a>(
    record: &'a StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> PayrollResult<&'a str> {
    record.get(index).ok_or_else(|| PayrollError::MalformedRow {
        line,
        message: format!("missing {name} field"),
    })
}

fn parse_field<T>(record: &StringRecord, index: usize, name: &str, line: u64) -> PayrollResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = field(record, index, name, line)?;

    raw.trim().parse().map_err(|e| PayrollError::MalformedRow {
        line,
        message: format!("invalid {name} '{raw}': {e}"),
    })
}

/// Parses a blank-allowed field; an empty value means the field is absent.
fn parse_optional_field<T>(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> PayrollResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = field(record, index, name, line)?;
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|e| PayrollError::MalformedRow {
            line,
            message: format!("invalid {name} '{raw}': {e}"),
        })
}
