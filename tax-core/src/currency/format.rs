use rust_decimal::Decimal;
use tracing::debug;

use super::Locale;
use crate::calculations::common::round_for_display;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$10.00`, or `R$ 10,00` when `spaced`.
    Prefix { spaced: bool },
    /// `10,00 €` when `spaced`.
    Suffix { spaced: bool },
}

/// How digits of the integer part are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: `1,234,567`.
    Thousands,
    /// Three then twos: `12,34,567`.
    Indian,
    None,
}

/// Currency formatting rules for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: Grouping,
    pub fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::prefixed("$", false, '.', ',', 2)
    }
}

impl CurrencyFormat {
    fn prefixed(
        symbol: &str,
        spaced: bool,
        decimal_separator: char,
        grouping_separator: char,
        fraction_digits: u32,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            symbol_position: SymbolPosition::Prefix { spaced },
            decimal_separator,
            grouping_separator,
            grouping: Grouping::Thousands,
            fraction_digits,
        }
    }

    fn suffixed(
        symbol: &str,
        decimal_separator: char,
        grouping_separator: char,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            symbol_position: SymbolPosition::Suffix { spaced: true },
            decimal_separator,
            grouping_separator,
            grouping: Grouping::Thousands,
            fraction_digits: 2,
        }
    }

    /// Returns the default currency format for `locale`.
    ///
    /// Matching is by language and region, then by region alone. Anything
    /// unknown formats as US dollars.
    pub fn for_locale(locale: &Locale) -> Self {
        let language = locale.language.as_str();
        let region = locale.region.as_deref().unwrap_or_default();

        match (language, region) {
            (_, "US") => Self::default(),
            ("fr", "CA") => Self::suffixed("$", ',', NBSP),
            (_, "CA" | "AU") => Self::prefixed("$", false, '.', ',', 2),
            (_, "GB") => Self::prefixed("£", false, '.', ',', 2),
            (_, "IN") => Self {
                grouping: Grouping::Indian,
                ..Self::prefixed("₹", false, '.', ',', 2)
            },
            (_, "CH") => Self::prefixed("CHF", true, '.', '’', 2),
            (_, "FR") | ("fr", "BE" | "LU") => Self::suffixed("€", ',', NARROW_NBSP),
            (_, "DE" | "AT" | "ES" | "IT") => Self::suffixed("€", ',', '.'),
            (_, "NL") => Self::prefixed("€", true, ',', '.', 2),
            (_, "BR") => Self::prefixed("R$", true, ',', '.', 2),
            (_, "JP") => Self::prefixed("￥", false, '.', ',', 0),
            (_, "CN") => Self::prefixed("¥", false, '.', ',', 2),
            (_, "KR") => Self::prefixed("₩", false, '.', ',', 0),
            _ => {
                debug!(%locale, "no currency format for locale, using en_US");
                Self::default()
            }
        }
    }

    /// Formats `value` as currency.
    ///
    /// The value is rounded half-even to `fraction_digits`. Negative values
    /// carry a leading minus sign (`-$5.00`, `-5,00 €`); a value that rounds
    /// to zero is shown without a sign.
    pub fn format(
        &self,
        value: Decimal,
    ) -> String {
        let rounded = round_for_display(value, self.fraction_digits);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let number = self.format_number(rounded.abs());

        let mut out = String::with_capacity(number.len() + self.symbol.len() + 2);
        if negative {
            out.push('-');
        }
        match self.symbol_position {
            SymbolPosition::Prefix { spaced } => {
                out.push_str(&self.symbol);
                if spaced {
                    out.push(NBSP);
                }
                out.push_str(&number);
            }
            SymbolPosition::Suffix { spaced } => {
                out.push_str(&number);
                if spaced {
                    out.push(NBSP);
                }
                out.push_str(&self.symbol);
            }
        }
        out
    }

    /// Formats a non-negative, already rounded value without the symbol.
    fn format_number(
        &self,
        value: Decimal,
    ) -> String {
        let digits = value.to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = group_digits(int_part, self.grouping, self.grouping_separator);
        if self.fraction_digits > 0 {
            let width = self.fraction_digits as usize;
            out.push(self.decimal_separator);
            out.push_str(frac_part);
            for _ in frac_part.len()..width {
                out.push('0');
            }
        }
        out
    }
}

/// Inserts `separator` into a string of ASCII digits according to `grouping`.
fn group_digits(
    digits: &str,
    grouping: Grouping,
    separator: char,
) -> String {
    // Group sizes counted from the right.
    let (first, rest) = match grouping {
        Grouping::Thousands => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::None => return digits.to_string(),
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size = first;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&digits[..end]);

    let sep = separator.to_string();
    groups.reverse();
    groups.join(&sep)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn format_in(
        tag: &str,
        value: Decimal,
    ) -> String {
        let locale = Locale::parse(tag).unwrap();
        CurrencyFormat::for_locale(&locale).format(value)
    }

    #[test]
    fn group_digits_thousands() {
        assert_eq!(group_digits("1234567", Grouping::Thousands, ','), "1,234,567");
        assert_eq!(group_digits("123", Grouping::Thousands, ','), "123");
        assert_eq!(group_digits("1000", Grouping::Thousands, ','), "1,000");
        assert_eq!(group_digits("0", Grouping::Thousands, ','), "0");
    }

    #[test]
    fn group_digits_indian() {
        assert_eq!(group_digits("1234567", Grouping::Indian, ','), "12,34,567");
        assert_eq!(group_digits("12345", Grouping::Indian, ','), "12,345");
    }

    #[test]
    fn group_digits_none() {
        assert_eq!(group_digits("1234567", Grouping::None, ','), "1234567");
    }

    #[test]
    fn us_format_pads_fraction() {
        assert_eq!(format_in("en_US", dec!(10)), "$10.00");
        assert_eq!(format_in("en_US", dec!(4.0)), "$4.00");
        assert_eq!(format_in("en_US", dec!(0)), "$0.00");
        assert_eq!(format_in("en_US", dec!(2.5)), "$2.50");
    }

    #[test]
    fn us_format_groups_and_rounds() {
        assert_eq!(format_in("en_US", dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn us_format_negative_value() {
        assert_eq!(format_in("en_US", dec!(-5)), "-$5.00");
        assert_eq!(format_in("en_US", dec!(-1234.5)), "-$1,234.50");
    }

    #[test]
    fn negative_value_rounding_to_zero_has_no_sign() {
        assert_eq!(format_in("en_US", dec!(-0.001)), "$0.00");
    }

    #[test]
    fn german_format() {
        assert_eq!(format_in("de_DE", dec!(1234567.891)), "1.234.567,89\u{a0}€");
        assert_eq!(format_in("de_DE", dec!(-5)), "-5,00\u{a0}€");
    }

    #[test]
    fn french_format_uses_narrow_space_grouping() {
        assert_eq!(format_in("fr_FR", dec!(1234.5)), "1\u{202f}234,50\u{a0}€");
    }

    #[test]
    fn french_canadian_format() {
        assert_eq!(format_in("fr_CA", dec!(1234.5)), "1\u{a0}234,50\u{a0}$");
    }

    #[test]
    fn english_canadian_format() {
        assert_eq!(format_in("en_CA", dec!(1234.5)), "$1,234.50");
    }

    #[test]
    fn swiss_format() {
        assert_eq!(format_in("de_CH", dec!(1234.5)), "CHF\u{a0}1’234.50");
    }

    #[test]
    fn brazilian_format() {
        assert_eq!(format_in("pt_BR", dec!(1234.5)), "R$\u{a0}1.234,50");
    }

    #[test]
    fn japanese_format_has_no_fraction() {
        assert_eq!(format_in("ja_JP", dec!(1234567.891)), "￥1,234,568");
        assert_eq!(format_in("ja_JP", dec!(2.5)), "￥2");
    }

    #[test]
    fn indian_format_groups_lakhs() {
        assert_eq!(format_in("en_IN", dec!(1234567.891)), "₹12,34,567.89");
    }

    #[test]
    fn british_format() {
        assert_eq!(format_in("en_GB", dec!(3)), "£3.00");
    }

    #[test]
    fn unknown_locale_uses_us_dollars() {
        assert_eq!(format_in("xx_ZZ", dec!(3)), "$3.00");
        assert_eq!(format_in("en", dec!(3)), "$3.00");
    }
}
