//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine.

mod pay_record;
mod pay_row;

pub use pay_record::{PayClass, PayRecord};
pub use pay_row::PayRow;
