//! Withholding calculation logic for the payroll engine.
//!
//! This module contains the pure bracket-table functions for deriving the
//! tax withheld from a period's gross pay: the resident schedule, which is
//! piecewise linear in the period's gross, and the working holiday maker
//! schedule, which selects a flat rate from the employee's cumulative
//! year-to-date earnings.

mod resident_tax;
mod working_holiday_tax;

pub use resident_tax::calculate_resident_tax;
pub use working_holiday_tax::calculate_working_holiday_tax;
