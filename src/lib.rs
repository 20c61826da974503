//! Batch payroll engine for Australian pay runs.
//!
//! This crate ingests payroll time-entry rows from a CSV file, aggregates
//! contiguous per-employee runs into pay records, applies the applicable
//! PAYG withholding schedule (resident or working-holiday visa holder), and
//! exports the derived gross/net/tax figures back to CSV.

#![warn(missing_docs)]

pub mod aggregate;
pub mod calculation;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
