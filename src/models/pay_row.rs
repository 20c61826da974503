//! Raw payroll row model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single time-entry row from a payroll import.
///
/// Each row records one worked period for one employee. Rows for the same
/// employee are expected to be contiguous in the import stream; the
/// aggregator folds each contiguous run into one
/// [`PayRecord`](crate::models::PayRecord).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRow {
    /// The employee this row belongs to.
    pub employee_id: u32,
    /// Hours worked in this period.
    pub hours: Decimal,
    /// The pay rate applicable to this period.
    pub rate: Decimal,
    /// Visa subclass code; present only for working holiday makers.
    pub visa: Option<u32>,
    /// Earnings accumulated before this pay run; present only for working
    /// holiday makers.
    pub year_to_date: Option<Decimal>,
}
