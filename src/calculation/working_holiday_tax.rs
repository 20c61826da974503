//! Working holiday maker withholding calculation.
//!
//! Working holiday visa holders are taxed at a flat rate chosen from their
//! cumulative earnings for the year, not from the current period alone.

use rust_decimal::Decimal;

/// One bracket of the working holiday schedule.
///
/// A bracket covers the half-open total-earnings range `(floor, ceiling]`
/// and supplies the flat withholding rate inside that range.
#[derive(Debug, Clone, Copy)]
struct WorkingHolidayBracket {
    floor: Decimal,
    ceiling: Decimal,
    rate: Decimal,
}

/// Returns the working holiday withholding brackets in ascending order.
fn working_holiday_brackets() -> [WorkingHolidayBracket; 4] {
    [
        WorkingHolidayBracket {
            floor: Decimal::new(-1, 0),
            ceiling: Decimal::new(37_000, 0),
            rate: Decimal::new(15, 2),
        },
        WorkingHolidayBracket {
            floor: Decimal::new(37_000, 0),
            ceiling: Decimal::new(90_000, 0),
            rate: Decimal::new(32, 2),
        },
        WorkingHolidayBracket {
            floor: Decimal::new(90_000, 0),
            ceiling: Decimal::new(180_000, 0),
            rate: Decimal::new(37, 2),
        },
        WorkingHolidayBracket {
            floor: Decimal::new(180_000, 0),
            ceiling: Decimal::new(9_999_999, 0),
            rate: Decimal::new(45, 2),
        },
    ]
}

/// Calculates the tax withheld for a working holiday maker.
///
/// The rate is selected by `gross + year_to_date` (the employee's total
/// earnings including this period), but is applied to this period's `gross`
/// only; the year-to-date amount has already been taxed in earlier periods.
/// The result is rounded to 2 decimal places. Totals outside every bracket
/// (at or below -1, or above 9999999) withhold nothing and return zero.
///
/// # Arguments
///
/// * `gross` - The gross pay for the period
/// * `year_to_date` - Earnings accumulated before this period
///
/// # Examples
///
/// ```
/// use payrun_engine::calculation::calculate_working_holiday_tax;
/// use rust_decimal::Decimal;
///
/// // Total earnings of $1000 fall in the (-1, 37000] bracket: 15%
/// let tax = calculate_working_holiday_tax(Decimal::new(1000, 0), Decimal::ZERO);
/// assert_eq!(tax, Decimal::new(15000, 2)); // $150.00
/// ```
pub fn calculate_working_holiday_tax(gross: Decimal, year_to_date: Decimal) -> Decimal {
    let total_gross = gross + year_to_date;

    let rate = working_holiday_brackets()
        .into_iter()
        .find(|b| total_gross > b.floor && total_gross <= b.ceiling)
        .map(|b| b.rate)
        .unwrap_or(Decimal::ZERO);

    (gross * rate).round_dp(2)
}
