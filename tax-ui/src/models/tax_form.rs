use std::fmt;

use tax_core::{TaxCalculator, TaxInput};

use crate::utils::parse_decimal_or_zero;

/// Snapshot of the values entered on the tax form.
///
/// The text fields hold exactly what the user typed; coercion to numbers
/// happens in [`TaxFormModel::to_input`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxFormModel {
    pub amount_text: String,
    pub tax_percent_text: String,
    pub round_up: bool,
}

impl TaxFormModel {
    pub fn new(
        amount_text: impl Into<String>,
        tax_percent_text: impl Into<String>,
        round_up: bool,
    ) -> Self {
        Self {
            amount_text: amount_text.into(),
            tax_percent_text: tax_percent_text.into(),
            round_up,
        }
    }

    /// Converts the raw text into calculator input. Unparsable text is 0.
    pub fn to_input(&self) -> TaxInput {
        TaxInput::new(
            parse_decimal_or_zero(&self.amount_text),
            parse_decimal_or_zero(&self.tax_percent_text),
            self.round_up,
        )
    }

    /// Formatted tax for the current values.
    pub fn formatted_tax(
        &self,
        calculator: &TaxCalculator,
    ) -> String {
        calculator.calculate(&self.to_input())
    }

    /// Text for the result label under the form.
    pub fn tax_label(
        &self,
        calculator: &TaxCalculator,
    ) -> String {
        format!("Tax Amount: {}", self.formatted_tax(calculator))
    }
}

impl fmt::Display for TaxFormModel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "amount='{}' tax_percent='{}' round_up={}",
            self.amount_text, self.tax_percent_text, self.round_up
        )
    }
}
