//! Pay record model.
//!
//! This module defines [`PayRecord`], the aggregated pay for one employee
//! within one import batch, and [`PayClass`], the tax class that selects
//! which withholding schedule applies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_resident_tax, calculate_working_holiday_tax};
use crate::error::{PayrollError, PayrollResult};

/// The tax class of a pay record.
///
/// The class selects the withholding schedule and carries the
/// class-specific fields; everything else about a record is common.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayClass {
    /// Employee taxed under the standard resident progressive schedule.
    Resident,
    /// Working holiday visa holder, taxed at a flat rate selected from
    /// cumulative year-to-date earnings.
    WorkingHoliday {
        /// Visa subclass code held by the employee. Opaque to tax logic.
        visa: u32,
        /// Earnings accumulated before this pay run.
        year_to_date: Decimal,
    },
}

/// One employee's aggregated pay for one import batch.
///
/// A record is built once by the aggregator from a contiguous run of rows
/// and is read-only thereafter: the id and the parallel hours/rates series
/// never change, and the monetary figures are derived on read so repeated
/// reads are stable.
///
/// # Example
///
/// ```
/// use payrun_engine::models::PayRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayRecord::resident(
///     1,
///     vec![Decimal::new(125, 1), Decimal::new(125, 1)],   // 12.5h + 12.5h
///     vec![Decimal::new(2608, 2), Decimal::new(2608, 2)], // at $26.08
/// )
/// .unwrap();
///
/// assert_eq!(record.gross(), Decimal::new(65200, 2)); // $652.00
/// assert_eq!(record.tax(), Decimal::new(18245, 2));   // $182.45
/// assert_eq!(record.net(), Decimal::new(46955, 2));   // $469.55
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRecord {
    id: u32,
    hours: Vec<Decimal>,
    rates: Vec<Decimal>,
    kind: PayClass,
}

impl PayRecord {
    /// Creates a pay record for a resident employee.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::MismatchedSeries`] if `hours` and `rates`
    /// differ in length, or [`PayrollError::EmptyRecord`] if the series are
    /// empty.
    pub fn resident(id: u32, hours: Vec<Decimal>, rates: Vec<Decimal>) -> PayrollResult<Self> {
        Self::new(id, hours, rates, PayClass::Resident)
    }

    /// Creates a pay record for a working holiday maker.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::MismatchedSeries`] if `hours` and `rates`
    /// differ in length, or [`PayrollError::EmptyRecord`] if the series are
    /// empty.
    pub fn working_holiday(
        id: u32,
        hours: Vec<Decimal>,
        rates: Vec<Decimal>,
        visa: u32,
        year_to_date: Decimal,
    ) -> PayrollResult<Self> {
        Self::new(id, hours, rates, PayClass::WorkingHoliday { visa, year_to_date })
    }

    fn new(
        id: u32,
        hours: Vec<Decimal>,
        rates: Vec<Decimal>,
        kind: PayClass,
    ) -> PayrollResult<Self> {
        if hours.len() != rates.len() {
            return Err(PayrollError::MismatchedSeries {
                id,
                hours: hours.len(),
                rates: rates.len(),
            });
        }
        if hours.is_empty() {
            return Err(PayrollError::EmptyRecord { id });
        }

        Ok(Self {
            id,
            hours,
            rates,
            kind,
        })
    }

    /// Returns the employee id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the hours worked, one entry per period.
    pub fn hours(&self) -> &[Decimal] {
        &self.hours
    }

    /// Returns the pay rates, parallel to [`hours`](Self::hours).
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    /// Returns the tax class of this record.
    pub fn kind(&self) -> PayClass {
        self.kind
    }

    /// Returns the gross pay for the period.
    ///
    /// Gross is the sum of `hours[i] * rates[i]` over all worked periods,
    /// rounded to 2 decimal places.
    pub fn gross(&self) -> Decimal {
        let gross: Decimal = self
            .hours
            .iter()
            .zip(&self.rates)
            .map(|(hours, rate)| hours * rate)
            .sum();

        gross.round_dp(2)
    }

    /// Returns the tax withheld, per this record's schedule.
    pub fn tax(&self) -> Decimal {
        match self.kind {
            PayClass::Resident => calculate_resident_tax(self.gross()),
            PayClass::WorkingHoliday { year_to_date, .. } => {
                calculate_working_holiday_tax(self.gross(), year_to_date)
            }
        }
    }

    /// Returns the net pay: gross less tax, rounded to 2 decimal places.
    pub fn net(&self) -> Decimal {
        (self.gross() - self.tax()).round_dp(2)
    }

    /// Renders a human-readable multi-line summary of this record.
    ///
    /// This is formatting only; printing is the caller's concern. Working
    /// holiday records append the visa subclass and the employee's total
    /// gross earnings for the year including this pay run.
    pub fn details(&self) -> String {
        let mut detail = format!("----------- EMPLOYEE: {} -----------\n", self.id);
        detail.push_str(&format!("GROSS:\t${:.2}\n", self.gross()));
        detail.push_str(&format!("NET:\t${:.2}\n", self.net()));
        detail.push_str(&format!("TAX:\t${:.2}\n", self.tax()));

        if let PayClass::WorkingHoliday { visa, year_to_date } = self.kind {
            detail.push_str(&format!("VISA:\t{}\n", visa));
            detail.push_str(&format!("TOTAL GROSS:\t${:.2}\n", year_to_date + self.gross()));
        }

        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn resident_record() -> PayRecord {
        PayRecord::resident(
            1,
            vec![dec("12.5"), dec("12.5")],
            vec![dec("26.08"), dec("26.08")],
        )
        .unwrap()
    }

    fn working_holiday_record() -> PayRecord {
        PayRecord::working_holiday(
            2,
            vec![dec("11"), dec("11")],
            vec![dec("19.00"), dec("19.00")],
            417,
            dec("40000"),
        )
        .unwrap()
    }

    #[test]
    fn test_gross_sums_parallel_series() {
        let record = resident_record();
        assert_eq!(record.gross(), dec("652.00"));
    }

    #[test]
    fn test_gross_rounds_to_two_decimal_places() {
        // 3.333 * 10.01 = 33.36333 -> 33.36
        let record = PayRecord::resident(1, vec![dec("3.333")], vec![dec("10.01")]).unwrap();
        assert_eq!(record.gross(), dec("33.36"));
    }

    #[test]
    fn test_resident_tax_uses_resident_schedule() {
        let record = resident_record();
        assert_eq!(record.tax(), dec("182.45"));
    }

    #[test]
    fn test_working_holiday_tax_uses_year_to_date() {
        // 418 gross + 40000 year-to-date selects the 32% bracket
        let record = working_holiday_record();
        assert_eq!(record.tax(), dec("133.76"));
    }

    #[test]
    fn test_net_is_gross_less_tax() {
        assert_eq!(resident_record().net(), dec("469.55"));
        assert_eq!(working_holiday_record().net(), dec("284.24"));
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let record = resident_record();
        assert_eq!(record.gross(), record.gross());
        assert_eq!(record.tax(), record.tax());
        assert_eq!(record.net(), record.net());
    }

    #[test]
    fn test_mismatched_series_is_rejected() {
        let result = PayRecord::resident(4, vec![dec("8"), dec("8")], vec![dec("25.00")]);

        match result.unwrap_err() {
            PayrollError::MismatchedSeries { id, hours, rates } => {
                assert_eq!(id, 4);
                assert_eq!(hours, 2);
                assert_eq!(rates, 1);
            }
            other => panic!("Expected MismatchedSeries, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let result = PayRecord::working_holiday(9, vec![], vec![], 417, dec("0"));

        match result.unwrap_err() {
            PayrollError::EmptyRecord { id } => assert_eq!(id, 9),
            other => panic!("Expected EmptyRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_resident_details_block() {
        let detail = resident_record().details();
        assert_eq!(
            detail,
            "----------- EMPLOYEE: 1 -----------\n\
             GROSS:\t$652.00\n\
             NET:\t$469.55\n\
             TAX:\t$182.45\n"
        );
    }

    #[test]
    fn test_working_holiday_details_appends_visa_and_total() {
        let detail = working_holiday_record().details();
        assert_eq!(
            detail,
            "----------- EMPLOYEE: 2 -----------\n\
             GROSS:\t$418.00\n\
             NET:\t$284.24\n\
             TAX:\t$133.76\n\
             VISA:\t417\n\
             TOTAL GROSS:\t$40418.00\n"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = working_holiday_record();

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: PayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn series(pairs: &[(u32, u32)]) -> (Vec<Decimal>, Vec<Decimal>) {
            let hours = pairs
                .iter()
                .map(|(h, _)| Decimal::new(i64::from(*h), 2))
                .collect();
            let rates = pairs
                .iter()
                .map(|(_, r)| Decimal::new(i64::from(*r), 2))
                .collect();
            (hours, rates)
        }

        fn pair_series() -> impl Strategy<Value = Vec<(u32, u32)>> {
            // hours up to 2000.00, rates up to 200.00, 1..12 periods
            prop::collection::vec((0u32..200_000, 0u32..20_000), 1..12)
        }

        proptest! {
            #[test]
            fn net_is_gross_less_tax_for_both_classes(
                pairs in pair_series(),
                year_to_date in 0u32..20_000_000,
            ) {
                let (hours, rates) = series(&pairs);

                let resident = PayRecord::resident(1, hours.clone(), rates.clone()).unwrap();
                prop_assert_eq!(
                    resident.net(),
                    (resident.gross() - resident.tax()).round_dp(2)
                );

                let holiday = PayRecord::working_holiday(
                    2,
                    hours,
                    rates,
                    417,
                    Decimal::new(i64::from(year_to_date), 2),
                )
                .unwrap();
                prop_assert_eq!(
                    holiday.net(),
                    (holiday.gross() - holiday.tax()).round_dp(2)
                );
            }

            #[test]
            fn gross_is_invariant_under_period_reordering(
                (pairs, shuffled) in pair_series()
                    .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
            ) {
                let (hours, rates) = series(&pairs);
                let (shuffled_hours, shuffled_rates) = series(&shuffled);

                let original = PayRecord::resident(1, hours, rates).unwrap();
                let reordered = PayRecord::resident(1, shuffled_hours, shuffled_rates).unwrap();

                prop_assert_eq!(original.gross(), reordered.gross());
            }
        }
    }
}
