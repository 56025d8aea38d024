//! Tax amount calculation for a single bill.
//!
//! The calculation is `tax_percent / 100 * amount`, optionally rounded up to
//! the next whole currency unit, and then rendered with the currency format
//! of a locale.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{TaxCalculator, TaxInput};
//! use tax_core::currency::Locale;
//!
//! let calculator = TaxCalculator::for_locale(&Locale::en_us());
//! let input = TaxInput::new(dec!(33), dec!(7.5), true);
//!
//! let result = input.compute();
//! assert_eq!(result.raw_tax, dec!(2.475));
//! assert_eq!(result.tax, dec!(3));
//! assert_eq!(calculator.calculate(&input), "$3.00");
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use crate::calculations::common::{ceiling, percent_of};
use crate::currency::{CurrencyFormat, Locale};

/// Tax rate used when an input is built without an explicit percentage.
pub const DEFAULT_TAX_PERCENT: Decimal = Decimal::TEN;

/// Input values for a tax calculation.
///
/// Negative values are allowed and flow through the same formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxInput {
    /// The bill amount the tax applies to.
    pub amount: Decimal,

    /// The tax rate as a percentage (`7.5` means 7.5%).
    pub tax_percent: Decimal,

    /// Whether to round the tax up to the next whole unit.
    pub round_up: bool,
}

impl Default for TaxInput {
    fn default() -> Self {
        Self {
            amount: Decimal::ZERO,
            tax_percent: DEFAULT_TAX_PERCENT,
            round_up: false,
        }
    }
}

impl TaxInput {
    pub fn new(
        amount: Decimal,
        tax_percent: Decimal,
        round_up: bool,
    ) -> Self {
        Self {
            amount,
            tax_percent,
            round_up,
        }
    }

    /// Runs the calculation for this input.
    pub fn compute(&self) -> TaxResult {
        let raw_tax = percent_of(self.tax_percent, self.amount);
        let tax = if self.round_up {
            ceiling(raw_tax)
        } else {
            raw_tax
        };

        trace!(amount = %self.amount, tax_percent = %self.tax_percent, %raw_tax, %tax, "computed tax");

        TaxResult { raw_tax, tax }
    }
}

/// Result of a tax calculation, before currency formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxResult {
    /// The tax before any rounding.
    pub raw_tax: Decimal,

    /// The tax to display. Equal to `raw_tax` unless rounding up was requested.
    pub tax: Decimal,
}

/// Computes the tax owed on `amount` at `tax_percent` percent.
///
/// When `round_up` is set the result is the ceiling of the raw tax.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::calculate_tax;
///
/// assert_eq!(calculate_tax(dec!(100), dec!(10), false), dec!(10));
/// assert_eq!(calculate_tax(dec!(33), dec!(7.5), true), dec!(3));
/// ```
pub fn calculate_tax(
    amount: Decimal,
    tax_percent: Decimal,
    round_up: bool,
) -> Decimal {
    TaxInput::new(amount, tax_percent, round_up).compute().tax
}

/// Calculator that turns a [`TaxInput`] into a formatted currency string.
///
/// The calculator owns the currency format for one locale; the arithmetic
/// itself lives on [`TaxInput::compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCalculator {
    format: CurrencyFormat,
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::for_locale(&Locale::en_us())
    }
}

impl TaxCalculator {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    /// Creates a calculator that formats with the default currency of `locale`.
    pub fn for_locale(locale: &Locale) -> Self {
        Self::new(CurrencyFormat::for_locale(locale))
    }

    /// Computes the tax for `input` and formats it as currency.
    pub fn calculate(
        &self,
        input: &TaxInput,
    ) -> String {
        self.format_result(&input.compute())
    }

    /// Formats an already computed result.
    pub fn format_result(
        &self,
        result: &TaxResult,
    ) -> String {
        self.format.format(result.tax)
    }
}
