//! Resident withholding calculation.
//!
//! This module implements the progressive weekly withholding schedule for
//! resident employees as a table of piecewise-linear brackets.

use rust_decimal::Decimal;

/// One bracket of the resident schedule.
///
/// A bracket covers the half-open gross range `(floor, ceiling]` and
/// supplies the coefficients of the linear withholding formula
/// `rate_a * gross - rate_b` inside that range.
#[derive(Debug, Clone, Copy)]
struct ResidentBracket {
    floor: Decimal,
    ceiling: Decimal,
    rate_a: Decimal,
    rate_b: Decimal,
}

/// Returns the resident withholding brackets in ascending order.
fn resident_brackets() -> [ResidentBracket; 6] {
    [
        ResidentBracket {
            floor: Decimal::new(-1, 0),
            ceiling: Decimal::new(72, 0),
            rate_a: Decimal::new(19, 2),
            rate_b: Decimal::new(19, 2),
        },
        ResidentBracket {
            floor: Decimal::new(72, 0),
            ceiling: Decimal::new(361, 0),
            rate_a: Decimal::new(2342, 4),
            rate_b: Decimal::new(3213, 3),
        },
        ResidentBracket {
            floor: Decimal::new(361, 0),
            ceiling: Decimal::new(932, 0),
            rate_a: Decimal::new(3477, 4),
            rate_b: Decimal::new(442_476, 4),
        },
        ResidentBracket {
            floor: Decimal::new(932, 0),
            ceiling: Decimal::new(1380, 0),
            rate_a: Decimal::new(345, 3),
            rate_b: Decimal::new(417_311, 4),
        },
        ResidentBracket {
            floor: Decimal::new(1380, 0),
            ceiling: Decimal::new(3111, 0),
            rate_a: Decimal::new(39, 2),
            rate_b: Decimal::new(1_038_657, 4),
        },
        ResidentBracket {
            floor: Decimal::new(3111, 0),
            ceiling: Decimal::new(999_999, 0),
            rate_a: Decimal::new(47, 2),
            rate_b: Decimal::new(3_527_888, 4),
        },
    ]
}

/// Calculates the tax withheld for a resident employee.
///
/// The bracket containing `gross` supplies the coefficients of the linear
/// formula `rate_a * gross - rate_b`; the result is rounded to 2 decimal
/// places. A gross outside every bracket (at or below -1, or above 999999)
/// withholds nothing and returns zero.
///
/// # Arguments
///
/// * `gross` - The gross pay for the period
///
/// # Examples
///
/// ```
/// use payrun_engine::calculation::calculate_resident_tax;
/// use rust_decimal::Decimal;
///
/// // $652.00 gross falls in the (361, 932] bracket:
/// // 0.3477 * 652 - 44.2476 = 182.4528, rounded to $182.45
/// let tax = calculate_resident_tax(Decimal::new(65200, 2));
/// assert_eq!(tax, Decimal::new(18245, 2));
/// ```
pub fn calculate_resident_tax(gross: Decimal) -> Decimal {
    let bracket = resident_brackets()
        .into_iter()
        .find(|b| gross > b.floor && gross <= b.ceiling);

    match bracket {
        Some(b) => ((b.rate_a * gross) - b.rate_b).round_dp(2),
        None => Decimal::ZERO,
    }
}
