//! CSV export adapter.
//!
//! Writes a computed pay run to a delimited file with an `Id,Gross,Net,Tax`
//! header, one row per record. Console presentation is not this module's
//! concern: callers print [`PayRecord::details`](crate::models::PayRecord::details)
//! themselves.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayRecord;

/// One exported row of a pay run: the four derived columns of a record.
///
/// The same type reads a previously written file back, so an exported pay
/// run round-trips exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayLine {
    /// The employee id.
    #[serde(rename = "Id")]
    pub id: u32,
    /// Gross pay for the period.
    #[serde(rename = "Gross", with = "rust_decimal::serde::str")]
    pub gross: Decimal,
    /// Net pay for the period.
    #[serde(rename = "Net", with = "rust_decimal::serde::str")]
    pub net: Decimal,
    /// Tax withheld for the period.
    #[serde(rename = "Tax", with = "rust_decimal::serde::str")]
    pub tax: Decimal,
}

impl From<&PayRecord> for PayLine {
    fn from(record: &PayRecord) -> Self {
        Self {
            id: record.id(),
            gross: record.gross(),
            net: record.net(),
            tax: record.tax(),
        }
    }
}

/// Writes a pay run to a CSV file.
///
/// # Errors
///
/// Returns [`PayrollError::ExportFailed`] if the file cannot be created or
/// written.
pub fn write_pay_records<P: AsRef<Path>>(path: P, records: &[PayRecord]) -> PayrollResult<()> {
    let path = path.as_ref();
    let export_failed = |message: String| PayrollError::ExportFailed {
        path: path.display().to_string(),
        message,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| export_failed(e.to_string()))?;

    // Written explicitly so that an empty pay run still produces the header.
    writer
        .write_record(["Id", "Gross", "Net", "Tax"])
        .map_err(|e| export_failed(e.to_string()))?;

    for record in records {
        writer
            .serialize(PayLine::from(record))
            .map_err(|e| export_failed(e.to_string()))?;
    }
    writer.flush().map_err(|e| export_failed(e.to_string()))?;

    info!(
        path = %path.display(),
        records = records.len(),
        "wrote pay run"
    );

    Ok(())
}

/// Reads the rows of a previously exported pay run.
///
/// # Errors
///
/// Returns [`PayrollError::FileUnreadable`] if the file cannot be opened and
/// [`PayrollError::MalformedRow`] if any row fails type conversion.
pub fn read_pay_lines<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<PayLine>> {
    let path = path.as_ref();

    let mut reader = csv::Reader::from_path(path).map_err(|e| PayrollError::FileUnreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut lines = Vec::new();
    for result in reader.deserialize() {
        let line = result.map_err(|e| PayrollError::MalformedRow {
            line: e.position().map_or(0, |p| p.line()),
            message: e.to_string(),
        })?;
        lines.push(line);
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_records() -> Vec<PayRecord> {
        vec![
            PayRecord::resident(
                1,
                vec![dec("12.5"), dec("12.5")],
                vec![dec("26.08"), dec("26.08")],
            )
            .unwrap(),
            PayRecord::working_holiday(
                2,
                vec![dec("11"), dec("11")],
                vec![dec("19.00"), dec("19.00")],
                417,
                dec("40000"),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_export_writes_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        write_pay_records(&path, &sample_records()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("Id,Gross,Net,Tax"));
        assert_eq!(lines.next(), Some("1,652.00,469.55,182.45"));
        assert_eq!(lines.next(), Some("2,418.00,284.24,133.76"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_round_trip_reproduces_every_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        let records = sample_records();

        write_pay_records(&path, &records).unwrap();
        let lines = read_pay_lines(&path).unwrap();

        let expected: Vec<PayLine> = records.iter().map(PayLine::from).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let result = write_pay_records("/nonexistent/dir/records.csv", &sample_records());

        match result.unwrap_err() {
            PayrollError::ExportFailed { path, .. } => {
                assert!(path.contains("records.csv"));
            }
            other => panic!("Expected ExportFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_pay_run_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");

        write_pay_records(&path, &[]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Id,Gross,Net,Tax\n");
    }
}
