pub mod calculations;
pub mod currency;

pub use calculations::{TaxCalculator, TaxInput, TaxResult, calculate_tax};
pub use currency::{CurrencyFormat, Locale, LocaleError};
