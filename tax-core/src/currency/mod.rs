//! Locale-aware currency formatting.
//!
//! A [`Locale`] is resolved from a tag or from the process environment and
//! mapped to a [`CurrencyFormat`] describing the symbol, separators and
//! fraction digits of that locale's default currency.

mod format;
mod locale;

pub use format::{CurrencyFormat, Grouping, SymbolPosition};
pub use locale::{LOCALE_ENV_VARS, Locale, LocaleError};
