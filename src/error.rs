//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur during a pay run.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payrun_engine::error::PayrollError;
///
/// let error = PayrollError::FileUnreadable {
///     path: "/missing/payroll.csv".to_string(),
///     message: "No such file or directory".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Payroll file could not be read '/missing/payroll.csv': No such file or directory"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The input file could not be opened or read.
    ///
    /// This surfaces as an explicit error rather than an empty batch so
    /// that a missing file is never mistaken for a pay run with no rows.
    #[error("Payroll file could not be read '{path}': {message}")]
    FileUnreadable {
        /// The path that could not be read.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },

    /// A row contained a field that failed type conversion.
    ///
    /// A single malformed row aborts the entire import.
    #[error("Malformed payroll row at line {line}: {message}")]
    MalformedRow {
        /// The 1-based line number of the offending row.
        line: u64,
        /// A description of the conversion failure.
        message: String,
    },

    /// A pay record was constructed with hours and rates of differing length.
    #[error(
        "Pay record for employee {id} has mismatched series: {hours} hours entries, {rates} rates entries"
    )]
    MismatchedSeries {
        /// The employee id of the rejected record.
        id: u32,
        /// The number of hours entries supplied.
        hours: usize,
        /// The number of rates entries supplied.
        rates: usize,
    },

    /// A pay record was constructed with no worked periods at all.
    #[error("Pay record for employee {id} has no worked periods")]
    EmptyRecord {
        /// The employee id of the rejected record.
        id: u32,
    },

    /// The export file could not be written.
    #[error("Failed to write pay run to '{path}': {message}")]
    ExportFailed {
        /// The path that could not be written.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
