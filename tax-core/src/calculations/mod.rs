//! Tax calculation for a single bill amount.
//!
//! [`TaxInput::compute`] does the arithmetic and [`TaxCalculator`] renders
//! the result in a locale's currency.

pub mod common;
pub mod tax;

pub use tax::{DEFAULT_TAX_PERCENT, TaxCalculator, TaxInput, TaxResult, calculate_tax};
