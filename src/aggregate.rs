//! Record aggregation.
//!
//! This module folds an ordered stream of raw payroll rows into one
//! [`PayRecord`] per contiguous run of rows sharing an employee id.

use rust_decimal::Decimal;

use crate::error::PayrollResult;
use crate::models::{PayRecord, PayRow};

/// Accumulates the rows of one contiguous employee run.
#[derive(Debug, Default)]
struct RunAccumulator {
    employee_id: Option<u32>,
    hours: Vec<Decimal>,
    rates: Vec<Decimal>,
    visa: Option<u32>,
    year_to_date: Option<Decimal>,
}

impl RunAccumulator {
    fn push(&mut self, row: &PayRow) {
        self.employee_id = Some(row.employee_id);
        self.hours.push(row.hours);
        self.rates.push(row.rate);
        // Last row wins for the class fields, even when a later row blanks them.
        self.visa = row.visa;
        self.year_to_date = row.year_to_date;
    }

    /// Closes the current run into a pay record, if any rows were seen.
    ///
    /// A working holiday record requires both the visa and year-to-date
    /// fields; a run missing either closes as a resident record.
    fn close(&mut self) -> PayrollResult<Option<PayRecord>> {
        let Some(id) = self.employee_id.take() else {
            return Ok(None);
        };

        let hours = std::mem::take(&mut self.hours);
        let rates = std::mem::take(&mut self.rates);

        let record = match (self.visa.take(), self.year_to_date.take()) {
            (Some(visa), Some(year_to_date)) => {
                PayRecord::working_holiday(id, hours, rates, visa, year_to_date)?
            }
            _ => PayRecord::resident(id, hours, rates)?,
        };

        Ok(Some(record))
    }
}

/// Builds one pay record per contiguous run of rows sharing an employee id.
///
/// Rows for one employee are assumed contiguous in the stream. An id that
/// reappears after its run has closed starts a new, separate record rather
/// than reopening the old one; the result preserves input order.
///
/// # Errors
///
/// Propagates record-construction errors. None are reachable from rows
/// produced by the importer, which grows the hours and rates series in
/// lockstep.
///
/// # Examples
///
/// ```
/// use payrun_engine::aggregate::build_pay_records;
/// use payrun_engine::models::PayRow;
/// use rust_decimal::Decimal;
///
/// let rows = vec![
///     PayRow {
///         employee_id: 1,
///         hours: Decimal::new(8, 0),
///         rate: Decimal::new(2500, 2),
///         visa: None,
///         year_to_date: None,
///     },
///     PayRow {
///         employee_id: 1,
///         hours: Decimal::new(6, 0),
///         rate: Decimal::new(2500, 2),
///         visa: None,
///         year_to_date: None,
///     },
///     PayRow {
///         employee_id: 2,
///         hours: Decimal::new(8, 0),
///         rate: Decimal::new(3000, 2),
///         visa: Some(417),
///         year_to_date: Some(Decimal::new(12000, 0)),
///     },
/// ];
///
/// let records = build_pay_records(rows).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].gross(), Decimal::new(35000, 2)); // $350.00
/// ```
pub fn build_pay_records<I>(rows: I) -> PayrollResult<Vec<PayRecord>>
where
    I: IntoIterator<Item = PayRow>,
{
    let mut records = Vec::new();
    let mut run = RunAccumulator::default();

    for row in rows {
        if run.employee_id.is_some_and(|id| id != row.employee_id) {
            if let Some(record) = run.close()? {
                records.push(record);
            }
        }
        run.push(&row);
    }

    if let Some(record) = run.close()? {
        records.push(record);
    }

    Ok(records)
}
